use serde_json::Value;

use tigergraph_core::{envelope, DdlGenerator, Edges, Envelope, GraphConfig, QueryParams, UpsertRequest, Vertices};

use crate::missing::{is_missing_source_vertex_error, is_missing_vertex_error};
use crate::{ClientError, Result};

/// TigerGraph REST API client.
///
/// Stateless between calls: every operation is a single HTTP round trip that
/// resolves once the response is fully received and decoded. The remote is
/// the sole source of truth; nothing is cached here.
pub struct GraphClient {
    config: GraphConfig,
    http: reqwest::Client,
}

/// The three verbs the remote interface uses, each mapped to exactly one
/// request-builder arm in [`GraphClient::fetch`].
enum Verb<'a> {
    Get,
    Post(&'a UpsertRequest),
    Delete,
}

impl Verb<'_> {
    fn name(&self) -> &'static str {
        match self {
            Verb::Get => "GET",
            Verb::Post(_) => "POST",
            Verb::Delete => "DELETE",
        }
    }
}

impl GraphClient {
    /// Create a new client for the configured graph.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Connection settings this client was built from. Also the binding
    /// context the DDL generator renders templates against.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// DDL generator bound to a snapshot of this client's configuration.
    pub fn ddl(&self, template_dir: &str, out_dir: &str) -> DdlGenerator {
        DdlGenerator::new(self.config.clone(), template_dir, out_dir)
    }

    /// Create-or-update vertices. Supplied attributes merge into existing
    /// data; omitted attributes keep their prior values.
    pub async fn upsert_vertices(&self, vertices: Vertices) -> Result<Envelope> {
        self.submit(&UpsertRequest::vertices_only(vertices)).await
    }

    /// Create-or-update vertices and edges in one request.
    pub async fn upsert_data(&self, vertices: Vertices, edges: Edges) -> Result<Envelope> {
        self.submit(&UpsertRequest::with_edges(vertices, edges)).await
    }

    pub async fn delete_vertex(&self, id: &str, vertex_type: &str) -> Result<Option<Value>> {
        self.delete_at(&self.config.vertex_url(id, vertex_type)).await
    }

    pub async fn delete_edge(
        &self,
        left_id: &str,
        right_id: &str,
        edge_type: &str,
        vertex_type: &str,
    ) -> Result<Option<Value>> {
        self.delete_at(&self.config.edge_url(left_id, right_id, edge_type, vertex_type)).await
    }

    /// Look up one vertex by id and type. A missing vertex is not
    /// exceptional: the remote's "not a valid vertex id" failure for this id
    /// and type becomes `None`, while any other failure propagates.
    pub async fn find_vertex(&self, id: &str, vertex_type: &str) -> Result<Option<Value>> {
        match self.find_at(&self.config.vertex_url(id, vertex_type)).await {
            Ok(results) => Ok(first_result(results)),
            Err(ClientError::Graph(ref err)) if is_missing_vertex_error(err, id, vertex_type) => Ok(None),
            Err(other) => Err(other),
        }
    }

    /// All edges of one type between two vertices. Possibly empty.
    pub async fn find_edges(
        &self,
        left_id: &str,
        right_id: &str,
        edge_type: &str,
        vertex_type: &str,
    ) -> Result<Vec<Value>> {
        let results = self
            .find_at(&self.config.edge_url(left_id, right_id, edge_type, vertex_type))
            .await?;
        Ok(match results {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        })
    }

    /// All edges attached to a vertex, optionally narrowed to one edge type.
    pub async fn all_edges_for(
        &self,
        id: &str,
        vertex_type: &str,
        edge_type: Option<&str>,
    ) -> Result<Option<Value>> {
        self.find_at(&self.config.edges_url(id, vertex_type, edge_type)).await
    }

    /// Delete every edge attached to a vertex, optionally narrowed to one
    /// edge type. Suppresses the remote's "not a valid source_vertex_id"
    /// failure for this id and type into `None`; re-raises everything else.
    pub async fn delete_all_edges_for(
        &self,
        id: &str,
        vertex_type: &str,
        edge_type: Option<&str>,
    ) -> Result<Option<Value>> {
        match self.delete_at(&self.config.edges_url(id, vertex_type, edge_type)).await {
            Err(ClientError::Graph(ref err)) if is_missing_source_vertex_error(err, id, vertex_type) => Ok(None),
            other => other,
        }
    }

    /// Invoke an installed query. Parameters with empty or absent values are
    /// dropped from the query string entirely.
    pub async fn custom_query(&self, query_name: &str, params: &QueryParams) -> Result<Envelope> {
        self.execute(Verb::Get, &self.config.query_url(query_name, params)).await
    }

    /// Server statistics over the given window, defaulting to 60 seconds.
    pub async fn statistics(&self, seconds: Option<u64>) -> Result<Envelope> {
        self.execute(Verb::Get, &self.config.statistics_url(seconds.unwrap_or(60))).await
    }

    /// Server version string. The body needs sanitizing before it parses;
    /// see [`envelope::sanitize_version_body`].
    pub async fn version(&self) -> Result<String> {
        let raw = self.fetch(Verb::Get, &self.config.version_url()).await?;
        let data: Value = serde_json::from_str(&envelope::sanitize_version_body(&raw))?;
        match data.get("message").and_then(Value::as_str) {
            Some(message) => Ok(message.to_string()),
            None => Err(ClientError::InvalidResponse),
        }
    }

    /// The remote's endpoint catalogue.
    pub async fn endpoints(&self) -> Result<Envelope> {
        self.execute(Verb::Get, &self.config.endpoints_url()).await
    }

    // POST /graph/{graph}
    async fn submit(&self, request: &UpsertRequest) -> Result<Envelope> {
        self.execute(Verb::Post(request), &self.config.base_url()).await
    }

    async fn find_at(&self, url: &str) -> Result<Option<Value>> {
        let envelope = self.execute(Verb::Get, url).await?;
        Ok(envelope.results)
    }

    async fn delete_at(&self, url: &str) -> Result<Option<Value>> {
        let envelope = self.execute(Verb::Delete, url).await?;
        Ok(envelope.results)
    }

    /// One round trip plus envelope decoding.
    async fn execute(&self, verb: Verb<'_>, url: &str) -> Result<Envelope> {
        let raw = self.fetch(verb, url).await?;
        Ok(envelope::decode(&raw)?)
    }

    /// One round trip; returns the raw body. Network-level failures surface
    /// here as the transport error variant, untouched.
    async fn fetch(&self, verb: Verb<'_>, url: &str) -> Result<String> {
        let url = self.resolve(url);
        tracing::debug!("{} {}", verb.name(), url);

        let request = match verb {
            Verb::Get => self.http.get(&url),
            Verb::Post(payload) => self.http.post(&url).json(payload),
            Verb::Delete => self.http.delete(&url),
        };

        let response = request.send().await?;
        Ok(response.text().await?)
    }

    /// The version/endpoints URLs are scheme-relative; everything else is
    /// already absolute.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("//") {
            format!("{}:{}", self.config.scheme, url)
        } else {
            url.to_string()
        }
    }
}

fn first_result(results: Option<Value>) -> Option<Value> {
    match results {
        Some(Value::Array(items)) => items.into_iter().next(),
        _ => None,
    }
}
