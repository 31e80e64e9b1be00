use std::collections::HashMap;
use std::sync::Arc;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::sources::{GuardianSource, NewsApiSource, NewsSource, NytSource};

/// Maps source identifiers to the adapter serving them.
pub struct SourceRegistry {
    sources: HashMap<String, Arc<dyn NewsSource>>,
}

impl SourceRegistry {
    /// Builds the three upstream adapters with credentials from `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::with_sources([
            Arc::new(GuardianSource::new(config.guardian_api_key.clone())) as Arc<dyn NewsSource>,
            Arc::new(NytSource::new(config.nyt_api_key.clone())),
            Arc::new(NewsApiSource::new(config.newsapi_key.clone())),
        ])
    }

    /// Registers each adapter under its own `id()`.
    pub fn with_sources<I>(sources: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn NewsSource>>,
    {
        let sources = sources
            .into_iter()
            .map(|source| (source.id().to_lowercase(), source))
            .collect();
        Self { sources }
    }

    /// Case-insensitive lookup; `nyt` and `nytimes` are the same source.
    pub fn resolve(&self, source_id: &str) -> Result<Arc<dyn NewsSource>> {
        let key = canonical_id(source_id);
        self.sources
            .get(&key)
            .cloned()
            .ok_or_else(|| AppError::UnsupportedSource(source_id.to_string()))
    }
}

fn canonical_id(source_id: &str) -> String {
    match source_id.trim().to_lowercase().as_str() {
        "nyt" => "nytimes".to_string(),
        other => other.to_string(),
    }
}
