//! TigerGraph Core Library
//!
//! This crate provides the pieces the REST client is assembled from:
//! - Connection configuration and URL construction
//! - Response-envelope decoding and error classification
//! - Upsert payload model
//! - Custom-query parameter encoding
//! - GSQL artifact generation from templates

pub mod codes;
pub mod config;
pub mod ddl;
pub mod envelope;
pub mod models;
pub mod query;
pub mod urls;

// Re-export commonly used types
pub use config::GraphConfig;
pub use ddl::DdlGenerator;
pub use envelope::{decode, sanitize_version_body, Envelope, EnvelopeError, GraphError};
pub use models::{insert_edge, insert_vertex, Attribute, Attributes, Edges, UpsertRequest, Vertices};
pub use query::{encode_query, QueryParams};
