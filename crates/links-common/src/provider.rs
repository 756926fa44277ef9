/// Sources of the useful-links section tree.
///
/// The engine asks a provider for the tree on every non-empty search; a provider
/// failure is surfaced as `ConfigurationUnavailable` and ends the search.
use std::path::PathBuf;

use futures::future::BoxFuture;
use tracing::{debug, warn};

use crate::error::CommonError;
use crate::model::LinkSection;

pub trait ConfigurationProvider: Send + Sync {
    fn get_config<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Vec<LinkSection>, CommonError>>;
}

/// Reads `{root}/{path}` as a JSON array of sections.
pub struct JsonDirProvider {
    root: PathBuf,
}

impl JsonDirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    async fn load(&self, path: &str) -> Result<Vec<LinkSection>, CommonError> {
        let file = self.root.join(path);
        let unavailable = |reason: String| CommonError::ConfigurationUnavailable {
            path: path.to_string(),
            reason,
        };

        let json = tokio::fs::read_to_string(&file)
            .await
            .inspect_err(|e| warn!(error = %e, file = %file.display(), "failed to read section tree"))
            .map_err(|e| unavailable(e.to_string()))?;

        let sections: Vec<LinkSection> = serde_json::from_str(&json)
            .inspect_err(|e| warn!(error = %e, file = %file.display(), "failed to parse section tree"))
            .map_err(|e| unavailable(e.to_string()))?;

        debug!(path, sections = sections.len(), "section tree loaded");
        Ok(sections)
    }
}

impl ConfigurationProvider for JsonDirProvider {
    fn get_config<'a>(&'a self, path: &'a str) -> BoxFuture<'a, Result<Vec<LinkSection>, CommonError>> {
        Box::pin(self.load(path))
    }
}

/// Serves a fixed in-memory tree regardless of the requested path.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    sections: Vec<LinkSection>,
}

impl StaticProvider {
    pub fn new(sections: Vec<LinkSection>) -> Self {
        Self { sections }
    }
}

impl ConfigurationProvider for StaticProvider {
    fn get_config<'a>(&'a self, _path: &'a str) -> BoxFuture<'a, Result<Vec<LinkSection>, CommonError>> {
        let sections = self.sections.clone();
        Box::pin(async move { Ok::<_, CommonError>(sections) })
    }
}
