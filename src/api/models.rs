use serde::Serialize;

use crate::demo::DemoArticle;
use crate::models::ArticleResponse;

/// Body of a successful `GET /api/news`.
#[derive(Serialize)]
pub struct NewsResponse {
    pub success: bool,
    pub data: Vec<ArticleResponse>,
    /// Source identifiers as requested, after `all` expansion.
    pub sources: Vec<String>,
    pub total: usize,
}

#[derive(Serialize)]
pub struct DemoResponse {
    pub success: bool,
    pub data: Vec<DemoArticle>,
    pub total: usize,
}
