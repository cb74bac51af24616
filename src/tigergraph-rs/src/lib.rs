//! TigerGraph Client Library
//!
//! HTTP client for the REST interface of a TigerGraph server: vertex and
//! edge upsert, lookup and deletion, installed-query invocation, and the
//! server statistics/version/endpoints calls.

mod client;
mod missing;

pub use client::GraphClient;
pub use missing::{is_missing_source_vertex_error, is_missing_vertex_error};
pub use tigergraph_core::{
    insert_edge, insert_vertex, Attribute, Attributes, Edges, Envelope, EnvelopeError, GraphConfig,
    GraphError, QueryParams, UpsertRequest, Vertices,
};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("response body is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("invalid response from server")]
    InvalidResponse,
}

impl From<EnvelopeError> for ClientError {
    fn from(err: EnvelopeError) -> Self {
        match err {
            EnvelopeError::Parse(parse_err) => ClientError::Parse(parse_err),
            EnvelopeError::Graph(graph_err) => ClientError::Graph(graph_err),
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
