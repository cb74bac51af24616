//! REST path construction. No validation or escaping of identifier
//! characters happens here: callers supply URL-safe identifiers, and anything
//! beyond that is whatever the transport does by default.

use crate::config::GraphConfig;
use crate::query::{encode_query, QueryParams};

impl GraphConfig {
    pub fn vertex_url(&self, id: &str, vertex_type: &str) -> String {
        format!("{}/vertices/{}/{}", self.base_url(), vertex_type, id)
    }

    /// The path carries no separate parameter for the target vertex type: the
    /// remote addresses both endpoints of an edge by the source's type.
    pub fn edge_url(&self, left_id: &str, right_id: &str, edge_type: &str, vertex_type: &str) -> String {
        format!(
            "{}/edges/{}/{}/{}/{}/{}",
            self.base_url(),
            vertex_type,
            left_id,
            edge_type,
            vertex_type,
            right_id
        )
    }

    pub fn edges_url(&self, id: &str, vertex_type: &str, edge_type: Option<&str>) -> String {
        let url = format!("{}/edges/{}/{}", self.base_url(), vertex_type, id);
        match edge_type {
            Some(edge_type) => format!("{}/{}", url, edge_type),
            None => url,
        }
    }

    /// Installed queries are registered under `{graph}_{name}`.
    pub fn query_url(&self, query_name: &str, params: &QueryParams) -> String {
        format!(
            "{}/query/{}/{}_{}?{}",
            self.base_url(),
            self.graph,
            self.graph,
            query_name,
            encode_query(params)
        )
    }

    pub fn statistics_url(&self, seconds: u64) -> String {
        format!("{}/statistics?seconds={}", self.base_url(), seconds)
    }

    /// Scheme-relative on purpose; the transport resolves it against the
    /// configured scheme.
    pub fn version_url(&self) -> String {
        format!("//{}/version", self.host_and_port())
    }

    /// Scheme-relative on purpose, like [`GraphConfig::version_url`].
    pub fn endpoints_url(&self) -> String {
        format!("//{}/endpoints", self.host_and_port())
    }
}
