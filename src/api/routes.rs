use axum::{
    routing::get,
    Router,
    extract::{Query, State, rejection::QueryRejection},
    response::IntoResponse,
};
use tower_http::cors::{CorsLayer, Any};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::response;
use crate::demo::{self, DemoParams, DemoQuery};
use crate::error::{AppError, Result};
use crate::filter::{FilterRequest, NewsParams};
use crate::AppState;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/news", get(news_handler))
        .route("/api/demo/articles", get(demo_handler))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

async fn news_handler(
    State(state): State<AppState>,
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(pairs) = pairs.map_err(|e| AppError::Handler(e.body_text()))?;
    let filter = FilterRequest::from_params(&NewsParams::from_pairs(&pairs));
    info!(
        "Fetching news: keyword={:?} categories={:?} sources={:?}",
        filter.keyword, filter.categories, filter.sources
    );

    let start_time = std::time::Instant::now();
    let articles = state.aggregator.aggregate(&filter).await;
    info!("Aggregated {} articles in {:?}", articles.len(), start_time.elapsed());

    Ok(response::news(articles, filter.sources))
}

async fn demo_handler(
    pairs: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<impl IntoResponse> {
    let Query(pairs) = pairs.map_err(|e| AppError::Handler(e.body_text()))?;
    let articles = demo::filter_articles(&DemoQuery::from(&DemoParams::from_pairs(&pairs)));
    Ok(response::demo(articles))
}
