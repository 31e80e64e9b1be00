use async_trait::async_trait;
use serde::Deserialize;

use super::{client, require_key, NewsQuery, NewsSource};
use crate::error::Result;
use crate::models::ArticleResponse;

pub const SOURCE_ID: &str = "newsapi";
const API_URL: &str = "https://newsapi.org/v2/everything";
const DOMAINS: &str = "bbc.co.uk,cnn.com,wired.com";
const PAGE_SIZE: &str = "10";

#[derive(Debug, Deserialize)]
pub struct NewsApiResponse {
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    pub source: NewsApiArticleSource,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub published_at: String,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiArticleSource {
    pub name: Option<String>,
}

/// NewsAPI.org `everything` endpoint.
///
/// Category and author filters are not supported upstream and are ignored.
pub struct NewsApiSource {
    api_key: Option<String>,
}

impl NewsApiSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Query pairs for the search endpoint, excluding the API key.
    pub fn query_params(query: &NewsQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("domains", DOMAINS.to_string())];

        if !query.keyword.is_empty() {
            params.push(("q", query.keyword.clone()));
        }

        if !query.date.is_empty() {
            params.push(("from", query.date.clone()));
            params.push(("to", query.date.clone()));
        }

        params.push(("sortBy", "publishedAt".to_string()));
        params.push(("pageSize", PAGE_SIZE.to_string()));
        params
    }

    /// Ids are positional (`newsapi-<index>`) since the upstream has none.
    /// `source` is the upstream's reported outlet name and category stays empty.
    pub fn normalize(body: NewsApiResponse) -> Vec<ArticleResponse> {
        body.articles
            .into_iter()
            .enumerate()
            .map(|(index, article)| ArticleResponse {
                id: format!("{}-{}", SOURCE_ID, index),
                title: article.title.unwrap_or_default(),
                summary: article.description.unwrap_or_default(),
                date: article.published_at,
                category: String::new(),
                author: article.author.unwrap_or_default(),
                source: article
                    .source
                    .name
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| SOURCE_ID.to_string()),
                image: article.url_to_image.unwrap_or_default(),
                url: article.url,
            })
            .collect()
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<ArticleResponse>> {
        let api_key = require_key(SOURCE_ID, &self.api_key)?;

        let mut params = vec![("apiKey", api_key.to_string())];
        params.extend(Self::query_params(query));

        let body: NewsApiResponse = client::get_json(API_URL, &params).await?;
        Ok(Self::normalize(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_category_and_author() {
        let params = NewsApiSource::query_params(&NewsQuery {
            keyword: "AI".into(),
            categories: vec!["technology".into()],
            author: "Jane Doe".into(),
            date: "2024-03-01".into(),
        });
        assert_eq!(
            params,
            vec![
                ("domains", "bbc.co.uk,cnn.com,wired.com".to_string()),
                ("q", "AI".to_string()),
                ("from", "2024-03-01".to_string()),
                ("to", "2024-03-01".to_string()),
                ("sortBy", "publishedAt".to_string()),
                ("pageSize", "10".to_string()),
            ]
        );
    }

    #[test]
    fn synthesizes_positional_ids() {
        let body: NewsApiResponse = serde_json::from_value(serde_json::json!({
            "status": "ok",
            "totalResults": 2,
            "articles": [
                {
                    "source": { "id": "wired", "name": "Wired" },
                    "author": null,
                    "title": "First",
                    "description": "Desc",
                    "url": "https://www.wired.com/story/first/",
                    "urlToImage": null,
                    "publishedAt": "2024-03-01T10:00:00Z",
                    "content": "..."
                },
                {
                    "source": { "id": null, "name": "BBC News" },
                    "author": "BBC",
                    "title": "Second",
                    "description": null,
                    "url": "https://www.bbc.co.uk/news/second",
                    "urlToImage": "https://ichef.bbci.co.uk/img.jpg",
                    "publishedAt": "2024-03-02T10:00:00Z"
                }
            ]
        }))
        .unwrap();

        let articles = NewsApiSource::normalize(body);
        assert_eq!(articles[0].id, "newsapi-0");
        assert_eq!(articles[1].id, "newsapi-1");
        assert_eq!(articles[0].source, "Wired");
        assert_eq!(articles[1].source, "BBC News");
        assert!(articles.iter().all(|a| a.category.is_empty()));
        assert_eq!(articles[0].author, "");
        assert_eq!(articles[0].image, "");
        assert_eq!(articles[1].summary, "");
    }

    #[tokio::test]
    async fn missing_key_is_a_soft_failure() {
        let result = NewsApiSource::new(None).fetch(&NewsQuery::default()).await;
        assert!(!result.success);
        assert_eq!(result.source, "newsapi");
    }
}
