//! Call-site suppression of the remote's missing-vertex failures. The match
//! is against the service's exact wording for a given id and type, so the
//! coupling to that wording lives here and nowhere else.

use tigergraph_core::GraphError;

/// True when `err` is the remote's "lookup of an id the graph doesn't know"
/// failure for this id and vertex type. Reported with code `601`, but the
/// wording is the discriminator: other failures under the same code must
/// still propagate.
pub fn is_missing_vertex_error(err: &GraphError, id: &str, vertex_type: &str) -> bool {
    err.message.contains(&format!(
        "The input vertex id '{}' is not a valid vertex id for vertex type = {}",
        id, vertex_type
    ))
}

/// Variant wording used by the all-edges endpoints, which name the id as a
/// source_vertex_id.
pub fn is_missing_source_vertex_error(err: &GraphError, id: &str, vertex_type: &str) -> bool {
    err.message.contains(&format!(
        "The input source_vertex_id '{}' is not a valid vertex id for vertex type = {}",
        id, vertex_type
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_error(code: &str, message: &str) -> GraphError {
        GraphError {
            code: code.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_matches_missing_vertex_wording() {
        let err = graph_error(
            "601",
            "The input vertex id '66666' is not a valid vertex id for vertex type = entity.",
        );
        assert!(is_missing_vertex_error(&err, "66666", "entity"));
    }

    #[test]
    fn test_rejects_other_ids() {
        let err = graph_error(
            "601",
            "The input vertex id '66666' is not a valid vertex id for vertex type = entity.",
        );
        assert!(!is_missing_vertex_error(&err, "12345", "entity"));
    }

    #[test]
    fn test_rejects_other_vertex_types() {
        let err = graph_error(
            "601",
            "The input vertex id '66666' is not a valid vertex id for vertex type = entity.",
        );
        assert!(!is_missing_vertex_error(&err, "66666", "person"));
    }

    #[test]
    fn test_rejects_unrelated_failures() {
        let err = graph_error(
            "REST-1004",
            "The graph name 'occcc' parsed from the url = '/graph/occcc/vertices/entity/66666' is not found, please provide a valid graph name.",
        );
        assert!(!is_missing_vertex_error(&err, "66666", "entity"));
    }

    #[test]
    fn test_matches_source_vertex_wording() {
        let err = graph_error(
            "601",
            "The input source_vertex_id '999' is not a valid vertex id for vertex type = entity.",
        );
        assert!(is_missing_source_vertex_error(&err, "999", "entity"));
        assert!(!is_missing_vertex_error(&err, "999", "entity"));
    }

    #[test]
    fn test_source_predicate_rejects_plain_vertex_wording() {
        let err = graph_error(
            "601",
            "The input vertex id '999' is not a valid vertex id for vertex type = entity.",
        );
        assert!(!is_missing_source_vertex_error(&err, "999", "entity"));
    }
}
