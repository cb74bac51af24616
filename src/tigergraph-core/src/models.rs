use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Attribute value in the wrapper shape the upsert endpoint accepts:
/// `{"value": …}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attribute {
    pub value: Value,
}

impl Attribute {
    pub fn new(value: impl Into<Value>) -> Self {
        Self { value: value.into() }
    }
}

/// attribute name -> wrapped value
pub type Attributes = HashMap<String, Attribute>;

/// vertex type -> vertex id -> attributes
pub type Vertices = HashMap<String, HashMap<String, Attributes>>;

/// vertex type -> source id -> edge type -> target vertex type -> target id -> attributes
///
/// The nesting depth is dictated entirely by the JSON schema the remote
/// service accepts, not by this client.
pub type Edges =
    HashMap<String, HashMap<String, HashMap<String, HashMap<String, HashMap<String, Attributes>>>>>;

/// Body for `POST /graph/{graph}`: create-or-update for vertices and,
/// optionally, edges. `edges` is left out of the serialized body entirely
/// when absent.
#[derive(Debug, Clone, Serialize)]
pub struct UpsertRequest {
    pub vertices: Vertices,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Edges>,
}

impl UpsertRequest {
    pub fn vertices_only(vertices: Vertices) -> Self {
        Self { vertices, edges: None }
    }

    pub fn with_edges(vertices: Vertices, edges: Edges) -> Self {
        Self { vertices, edges: Some(edges) }
    }
}

/// Insert one vertex's attributes into a vertices mapping.
pub fn insert_vertex(vertices: &mut Vertices, vertex_type: &str, id: &str, attributes: Attributes) {
    vertices
        .entry(vertex_type.to_string())
        .or_default()
        .insert(id.to_string(), attributes);
}

/// Insert one edge's attributes into an edges mapping.
pub fn insert_edge(
    edges: &mut Edges,
    vertex_type: &str,
    left_id: &str,
    edge_type: &str,
    target_type: &str,
    right_id: &str,
    attributes: Attributes,
) {
    edges
        .entry(vertex_type.to_string())
        .or_default()
        .entry(left_id.to_string())
        .or_default()
        .entry(edge_type.to_string())
        .or_default()
        .entry(target_type.to_string())
        .or_default()
        .insert(right_id.to_string(), attributes);
}
