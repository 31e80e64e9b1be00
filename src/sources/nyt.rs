use async_trait::async_trait;
use serde::Deserialize;

use super::{client, require_key, NewsQuery, NewsSource};
use crate::error::Result;
use crate::models::ArticleResponse;

pub const SOURCE_ID: &str = "nytimes";
const API_URL: &str = "https://api.nytimes.com/svc/search/v2/articlesearch.json";
const MEDIA_HOST: &str = "https://www.nytimes.com/";

/// Our category names that differ from NYT section names.
const SECTION_MAP: [(&str, &str); 4] = [
    ("politics", "U.S."),
    ("us-news", "Us"),
    ("business", "Business Day"),
    ("environment", "Climate"),
];

#[derive(Debug, Deserialize)]
pub struct NytApiResponse {
    pub response: NytResponse,
}

#[derive(Debug, Deserialize)]
pub struct NytResponse {
    #[serde(default)]
    pub docs: Vec<NytDoc>,
}

#[derive(Debug, Deserialize)]
pub struct NytDoc {
    #[serde(rename = "_id")]
    pub id: String,
    pub headline: NytHeadline,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(default)]
    pub snippet: Option<String>,
    pub pub_date: String,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub byline: Option<NytByline>,
    #[serde(default)]
    pub multimedia: Vec<NytMultimedia>,
    pub web_url: String,
}

#[derive(Debug, Deserialize)]
pub struct NytHeadline {
    pub main: String,
}

#[derive(Debug, Deserialize)]
pub struct NytByline {
    pub original: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NytMultimedia {
    pub url: String,
}

/// The New York Times Article Search API.
pub struct NytSource {
    api_key: Option<String>,
}

impl NytSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Query pairs for the search endpoint, excluding the API key.
    pub fn query_params(query: &NewsQuery) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if !query.keyword.is_empty() {
            params.push(("q", query.keyword.clone()));
        }

        if let Some(fq) = filter_query(query) {
            params.push(("fq", fq));
        }

        params
    }

    pub fn normalize(body: NytApiResponse) -> Vec<ArticleResponse> {
        body.response
            .docs
            .into_iter()
            .map(|doc| {
                let image = doc
                    .multimedia
                    .first()
                    .map(|media| format!("{}{}", MEDIA_HOST, media.url))
                    .unwrap_or_default();

                let author = doc
                    .byline
                    .and_then(|byline| byline.original)
                    .map(|original| match original.strip_prefix("By ") {
                        Some(name) => name.to_string(),
                        None => original,
                    })
                    .unwrap_or_default();

                let summary = doc
                    .abstract_text
                    .filter(|text| !text.is_empty())
                    .or(doc.snippet)
                    .unwrap_or_default();

                ArticleResponse {
                    id: doc.id,
                    title: doc.headline.main,
                    summary,
                    date: doc.pub_date,
                    category: doc.section_name.unwrap_or_default().to_lowercase(),
                    author,
                    source: SOURCE_ID.to_string(),
                    image,
                    url: doc.web_url,
                }
            })
            .collect()
    }
}

#[async_trait]
impl NewsSource for NytSource {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<ArticleResponse>> {
        let api_key = require_key(SOURCE_ID, &self.api_key)?;

        let mut params = vec![("api-key", api_key.to_string())];
        params.extend(Self::query_params(query));

        let body: NytApiResponse = client::get_json(API_URL, &params).await?;
        Ok(Self::normalize(body))
    }
}

/// Maps a category to its NYT section name; unknown categories pass through.
pub fn section_for(category: &str) -> &str {
    let lowered = category.to_lowercase();
    SECTION_MAP
        .iter()
        .find(|(name, _)| *name == lowered)
        .map(|(_, section)| *section)
        .unwrap_or(category)
}

/// The `fq` expression: date, section and byline clauses ANDed together.
fn filter_query(query: &NewsQuery) -> Option<String> {
    let mut clauses = Vec::new();

    if !query.date.is_empty() {
        clauses.push(format!("pub_date:(\"{}\")", query.date));
    }

    if !query.categories.is_empty() {
        let sections = query
            .categories
            .iter()
            .map(|category| format!("\"{}\"", section_for(category)))
            .collect::<Vec<_>>()
            .join(" OR ");
        clauses.push(format!("section_name:({})", sections));
    }

    if !query.author.is_empty() {
        clauses.push(format!("byline:(\"{}\")", query.author));
    }

    if clauses.is_empty() {
        None
    } else {
        Some(clauses.join(" AND "))
    }
}
