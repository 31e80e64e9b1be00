use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use news_aggregator::{
    AppState,
    aggregator::Aggregator,
    api::routes::create_router,
    config::Config,
    error::{AppError, Result},
    models::ArticleResponse,
    registry::SourceRegistry,
    sources::{NewsQuery, NewsSource},
};

struct FixedSource {
    id: &'static str,
    articles: Option<Vec<ArticleResponse>>,
}

#[async_trait]
impl NewsSource for FixedSource {
    fn id(&self) -> &str {
        self.id
    }

    async fn fetch_articles(&self, _query: &NewsQuery) -> Result<Vec<ArticleResponse>> {
        self.articles
            .clone()
            .ok_or_else(|| AppError::Upstream(format!("{} is down", self.id)))
    }
}

fn article(id: &str, source: &str, date: &str) -> ArticleResponse {
    ArticleResponse {
        id: id.to_string(),
        title: format!("Story {}", id),
        summary: "Summary".to_string(),
        date: date.to_string(),
        category: String::new(),
        author: String::new(),
        source: source.to_string(),
        image: String::new(),
        url: format!("https://example.com/{}", id),
    }
}

fn app(sources: Vec<FixedSource>) -> Router {
    let registry = SourceRegistry::with_sources(
        sources.into_iter().map(|s| Arc::new(s) as Arc<dyn NewsSource>),
    );
    let state = AppState {
        aggregator: Arc::new(Aggregator::new(Arc::new(registry), Duration::from_secs(1))),
    };
    create_router(state)
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let resp = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn newsapi_only_request_returns_newest_first() {
    let app = app(vec![
        FixedSource {
            id: "newsapi",
            articles: Some(vec![
                article("newsapi-0", "BBC News", "2024-03-01T08:00:00Z"),
                article("newsapi-1", "Wired", "2024-03-01T09:00:00Z"),
            ]),
        },
        FixedSource {
            id: "guardian",
            articles: Some(vec![article("g1", "guardian", "2024-03-02T09:00:00Z")]),
        },
    ]);

    let (status, json) = get_json(app, "/api/news?keyword=AI&source=newsapi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 2);
    assert_eq!(json["sources"], serde_json::json!(["newsapi"]));
    assert_eq!(json["data"][0]["id"], "newsapi-1");
    assert_eq!(json["data"][1]["id"], "newsapi-0");
}

#[tokio::test]
async fn failing_source_is_absorbed() {
    let app = app(vec![
        FixedSource { id: "guardian", articles: None },
        FixedSource {
            id: "newsapi",
            articles: Some(vec![article("newsapi-0", "Wired", "2024-03-01T08:00:00Z")]),
        },
    ]);

    let (status, json) = get_json(app, "/api/news?source=guardian,newsapi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["source"], "Wired");
}

#[tokio::test]
async fn no_configured_sources_is_an_empty_success() {
    let app = app(vec![
        FixedSource { id: "guardian", articles: None },
        FixedSource { id: "nytimes", articles: None },
        FixedSource { id: "newsapi", articles: None },
    ]);

    let (status, json) = get_json(app, "/api/news").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 0);
    assert_eq!(json["data"], serde_json::json!([]));
    assert_eq!(json["sources"], serde_json::json!(["guardian", "nyt", "newsapi"]));
}

#[tokio::test]
async fn default_state_without_keys_returns_nothing() {
    let app = create_router(AppState::from_config(&Config::default()));

    let (status, json) = get_json(app, "/api/news?q=anything&category=all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
}

fn three_sources() -> Vec<FixedSource> {
    vec![
        FixedSource {
            id: "guardian",
            articles: Some(vec![article("g1", "guardian", "2024-03-01T08:00:00Z")]),
        },
        FixedSource {
            id: "nytimes",
            articles: Some(vec![article("n1", "nytimes", "2024-03-02T08:00:00Z")]),
        },
        FixedSource {
            id: "newsapi",
            articles: Some(vec![article("newsapi-0", "Wired", "2024-03-03T08:00:00Z")]),
        },
    ]
}

#[tokio::test]
async fn repeated_query_keys_use_the_first_value() {
    let (status, json) = get_json(app(three_sources()), "/api/news?source=guardian&source=nyt").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sources"], serde_json::json!(["guardian"]));
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], "g1");

    let (status, json) = get_json(app(three_sources()), "/api/news?q=a&q=b&source=newsapi").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 1);
}

#[tokio::test]
async fn all_anywhere_in_source_list_queries_every_source() {
    let (status, json) = get_json(app(three_sources()), "/api/news?source=all,guardian").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["sources"], serde_json::json!(["guardian", "nyt", "newsapi"]));
    assert_eq!(json["total"], 3);
    assert_eq!(json["data"][0]["id"], "newsapi-0");
}

#[tokio::test]
async fn demo_articles_are_filtered() {
    let app = app(Vec::new());

    let (status, json) = get_json(app, "/api/demo/articles?source=nytimes&author=John%20Doe").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);
    assert_eq!(json["data"][0]["id"], "2");
    assert_eq!(json["data"][0]["publishedAt"], "2023-03-14T09:15:00Z");
    assert_eq!(json["data"][1]["id"], "5");
}
