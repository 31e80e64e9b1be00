use serde::{Deserialize, Serialize};

/// An article normalized from any upstream source.
///
/// Every source adapter produces exactly this shape; nothing downstream of
/// the adapters looks at upstream-specific payloads. `id` is only unique
/// within one source, and `date` is kept as the upstream's timestamp string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub category: String,
    pub author: String,
    pub source: String,
    pub image: String,
    pub url: String,
}
