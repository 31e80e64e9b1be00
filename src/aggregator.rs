use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, Utc};
use futures::future::join_all;
use tracing::{error, info, warn};

use crate::filter::FilterRequest;
use crate::models::ArticleResponse;
use crate::registry::SourceRegistry;
use crate::sources::{NewsSource, SourceResult};

/// Fans a filter out to every requested source and merges what comes back.
pub struct Aggregator {
    registry: Arc<SourceRegistry>,
    upstream_timeout: Duration,
}

impl Aggregator {
    pub fn new(registry: Arc<SourceRegistry>, upstream_timeout: Duration) -> Self {
        Self { registry, upstream_timeout }
    }

    /// Queries all requested sources concurrently and returns their articles
    /// newest first. Failed, timed out or panicking sources contribute
    /// nothing; this never fails.
    pub async fn aggregate(&self, filter: &FilterRequest) -> Vec<ArticleResponse> {
        let sources = self.resolve_sources(&filter.sources);
        let query = Arc::new(filter.query());

        let handles = sources.into_iter().map(|source| {
            let query = Arc::clone(&query);
            let timeout = self.upstream_timeout;
            tokio::spawn(async move {
                match tokio::time::timeout(timeout, source.fetch(&query)).await {
                    Ok(result) => result,
                    Err(_) => {
                        warn!("{} timed out after {:?}", source.id(), timeout);
                        SourceResult::failed(source.id())
                    }
                }
            })
        });

        let mut articles = Vec::new();
        for outcome in join_all(handles).await {
            match outcome {
                Ok(result) if result.success => articles.extend(result.data),
                Ok(result) => info!("Skipping failed source {}", result.source),
                Err(e) => error!("Source task did not complete: {}", e),
            }
        }

        sort_by_date_desc(&mut articles);
        articles
    }

    /// Resolves identifiers to adapters, once per adapter, in request order.
    fn resolve_sources(&self, ids: &[String]) -> Vec<Arc<dyn NewsSource>> {
        let mut resolved: Vec<Arc<dyn NewsSource>> = Vec::new();
        for id in ids {
            match self.registry.resolve(id) {
                Ok(source) => {
                    if !resolved.iter().any(|s| s.id() == source.id()) {
                        resolved.push(source);
                    }
                }
                Err(e) => warn!("Ignoring requested source: {}", e),
            }
        }
        resolved
    }
}

/// Parses an upstream timestamp. Accepts RFC 3339, NYT-style `+0000`
/// offsets and bare dates (taken as midnight UTC).
pub fn parse_timestamp(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(date) {
        return Some(ts.with_timezone(&Utc));
    }
    if let Ok(ts) = DateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%z") {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Newest first. Unparseable dates go last; ties keep their input order.
pub fn sort_by_date_desc(articles: &mut [ArticleResponse]) {
    articles.sort_by_cached_key(|article| std::cmp::Reverse(parse_timestamp(&article.date)));
}
