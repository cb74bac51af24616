use serde::{Deserialize, Serialize};

/// Connection settings for one graph on one TigerGraph server.
///
/// All four fields are required; there are no defaults. The derived
/// `host:port` string and base graph URL are plain functions of these
/// immutable fields, so a config (and anything built on it) can be shared
/// freely across tasks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GraphConfig {
    pub scheme: String,
    pub host: String,
    pub port: u16,
    pub graph: String,
}

impl GraphConfig {
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: GraphConfig = serde_json::from_str(&contents)?;
        Ok(config)
    }

    pub fn host_and_port(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Root URL for all per-graph operations: `{scheme}://{host}:{port}/graph/{graph}`.
    pub fn base_url(&self) -> String {
        format!("{}://{}/graph/{}", self.scheme, self.host_and_port(), self.graph)
    }
}
