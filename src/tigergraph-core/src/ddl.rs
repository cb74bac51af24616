//! GSQL artifact generation. Templates for the graph schema and installed
//! queries are rendered against the connection configuration and written out
//! as data-definition text for the remote's tooling to load.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::GraphConfig;

/// Installed-query templates the generator knows about.
const QUERY_TEMPLATES: &[&str] = &["many_hops"];

/// Renders `.gsql.tmpl` templates with the configuration as the binding
/// context. The config is taken by value: the generator reads a fixed
/// snapshot of `scheme`/`host`/`port`/`graph` and nothing else.
pub struct DdlGenerator {
    config: GraphConfig,
    template_dir: PathBuf,
    out_dir: PathBuf,
}

impl DdlGenerator {
    pub fn new(config: GraphConfig, template_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            config,
            template_dir: template_dir.into(),
            out_dir: out_dir.into(),
        }
    }

    /// Render the graph schema template.
    pub fn schema(&self) -> Result<String> {
        self.render(&self.template_dir.join("schema.gsql.tmpl"))
    }

    /// Render one installed-query template by name.
    pub fn query(&self, name: &str) -> Result<String> {
        self.render(&self.template_dir.join("queries").join(format!("{}.gsql.tmpl", name)))
    }

    /// Render every known template and write the artifacts under the output
    /// directory: `schema.gsql` plus `queries/{name}.gsql` per query.
    pub fn generate(&self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("failed to create {}", self.out_dir.display()))?;
        self.write_artifact(&self.out_dir.join("schema.gsql"), &self.schema()?)?;

        let queries_dir = self.out_dir.join("queries");
        fs::create_dir_all(&queries_dir)
            .with_context(|| format!("failed to create {}", queries_dir.display()))?;
        for name in QUERY_TEMPLATES {
            self.write_artifact(&queries_dir.join(format!("{}.gsql", name)), &self.query(name)?)?;
        }

        Ok(())
    }

    fn write_artifact(&self, path: &Path, contents: &str) -> Result<()> {
        fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))?;
        tracing::debug!("wrote {}", path.display());
        Ok(())
    }

    fn render(&self, path: &Path) -> Result<String> {
        let template =
            fs::read_to_string(path).with_context(|| format!("failed to read template {}", path.display()))?;
        Ok(self.bind(&template))
    }

    /// Substitute configuration placeholders. Unknown placeholders are left
    /// untouched.
    fn bind(&self, template: &str) -> String {
        template
            .replace("{{scheme}}", &self.config.scheme)
            .replace("{{host}}", &self.config.host)
            .replace("{{port}}", &self.config.port.to_string())
            .replace("{{graph}}", &self.config.graph)
    }
}
