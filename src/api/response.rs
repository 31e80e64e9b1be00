use axum::Json;
use axum::http::StatusCode;

use crate::api::models::{DemoResponse, NewsResponse};
use crate::demo::DemoArticle;
use crate::models::ArticleResponse;

pub fn news(articles: Vec<ArticleResponse>, sources: Vec<String>) -> (StatusCode, Json<NewsResponse>) {
    let total = articles.len();
    (
        StatusCode::OK,
        Json(NewsResponse {
            success: true,
            data: articles,
            sources,
            total,
        }),
    )
}

pub fn demo(articles: Vec<DemoArticle>) -> (StatusCode, Json<DemoResponse>) {
    let total = articles.len();
    (
        StatusCode::OK,
        Json(DemoResponse {
            success: true,
            data: articles,
            total,
        }),
    )
}
