pub mod client;
pub mod guardian;
pub mod newsapi;
pub mod nyt;

pub use guardian::GuardianSource;
pub use newsapi::NewsApiSource;
pub use nyt::NytSource;

use async_trait::async_trait;
use serde::Serialize;
use tracing::{error, info};

use crate::error::{AppError, Result};
use crate::models::ArticleResponse;

/// The filter fields a source adapter acts on.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct NewsQuery {
    pub keyword: String,
    pub categories: Vec<String>,
    pub author: String,
    pub date: String,
}

/// Outcome of one source call. Failures are values, never errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceResult {
    pub success: bool,
    pub data: Vec<ArticleResponse>,
    pub source: String,
}

impl SourceResult {
    pub fn ok(source: &str, data: Vec<ArticleResponse>) -> Self {
        SourceResult { success: true, data, source: source.to_string() }
    }

    pub fn failed(source: &str) -> Self {
        SourceResult { success: false, data: Vec::new(), source: source.to_string() }
    }
}

/// A news API that can be queried with a [`NewsQuery`].
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Identifier reported in [`SourceResult::source`].
    fn id(&self) -> &str;

    /// Queries the upstream and normalizes its articles.
    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<ArticleResponse>>;

    /// Like [`fetch_articles`](Self::fetch_articles) but absorbs every error.
    async fn fetch(&self, query: &NewsQuery) -> SourceResult {
        match self.fetch_articles(query).await {
            Ok(articles) => {
                info!("{} returned {} articles", self.id(), articles.len());
                SourceResult::ok(self.id(), articles)
            }
            Err(AppError::ConfigMissing(source)) => {
                error!("{} API key is not configured", source);
                SourceResult::failed(self.id())
            }
            Err(err) => {
                error!("Error fetching from {} API: {}", self.id(), err);
                SourceResult::failed(self.id())
            }
        }
    }
}

/// Returns the configured key or the soft `ConfigMissing` failure.
pub(crate) fn require_key<'a>(source: &str, api_key: &'a Option<String>) -> Result<&'a str> {
    api_key
        .as_deref()
        .ok_or_else(|| AppError::ConfigMissing(source.to_string()))
}
