use async_trait::async_trait;
use serde::Deserialize;

use super::{client, require_key, NewsQuery, NewsSource};
use crate::error::Result;
use crate::models::ArticleResponse;

pub const SOURCE_ID: &str = "guardian";
const API_URL: &str = "https://content.guardianapis.com/search";

#[derive(Debug, Deserialize)]
pub struct GuardianApiResponse {
    pub response: GuardianResponse,
}

#[derive(Debug, Deserialize)]
pub struct GuardianResponse {
    #[serde(default)]
    pub results: Vec<GuardianResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianResult {
    pub id: String,
    #[serde(default)]
    pub section_id: String,
    pub web_publication_date: String,
    pub web_title: String,
    pub web_url: String,
    #[serde(default)]
    pub fields: Option<GuardianFields>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardianFields {
    pub trail_text: Option<String>,
    pub byline: Option<String>,
    pub thumbnail: Option<String>,
}

/// The Guardian Content API.
pub struct GuardianSource {
    api_key: Option<String>,
}

impl GuardianSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }

    /// Query pairs for the search endpoint, excluding the API key.
    ///
    /// Only the first category is sent since `section` takes a single value.
    /// An author becomes two `tag` values which the upstream ORs together.
    pub fn query_params(query: &NewsQuery) -> Vec<(&'static str, String)> {
        let mut params = vec![("show-fields", "byline,trailText,thumbnail".to_string())];

        if !query.keyword.is_empty() {
            params.push(("q", query.keyword.clone()));
        }

        if let Some(section) = query.categories.first() {
            params.push(("section", section.clone()));
        }

        if !query.date.is_empty() {
            params.push(("from-date", query.date.clone()));
            params.push(("to-date", query.date.clone()));
        }

        if !query.author.is_empty() {
            let (full_name, hyphenated) = author_slugs(&query.author);
            params.push(("tag", format!("profile/{}", full_name)));
            params.push(("tag", format!("profile/{}", hyphenated)));
        }

        params
    }

    pub fn normalize(body: GuardianApiResponse) -> Vec<ArticleResponse> {
        body.response
            .results
            .into_iter()
            .map(|result| {
                let fields = result.fields.unwrap_or_default();
                ArticleResponse {
                    id: result.id,
                    title: result.web_title,
                    summary: fields.trail_text.unwrap_or_default(),
                    date: result.web_publication_date,
                    category: result.section_id,
                    author: fields.byline.unwrap_or_default(),
                    source: SOURCE_ID.to_string(),
                    image: fields.thumbnail.unwrap_or_default(),
                    url: result.web_url,
                }
            })
            .collect()
    }
}

#[async_trait]
impl NewsSource for GuardianSource {
    fn id(&self) -> &str {
        SOURCE_ID
    }

    async fn fetch_articles(&self, query: &NewsQuery) -> Result<Vec<ArticleResponse>> {
        let api_key = require_key(SOURCE_ID, &self.api_key)?;

        let mut params = vec![("api-key", api_key.to_string())];
        params.extend(Self::query_params(query));

        let body: GuardianApiResponse = client::get_json(API_URL, &params).await?;
        Ok(Self::normalize(body))
    }
}

/// Profile tag slugs for an author: letters and digits only, and
/// whitespace replaced by hyphens. Both lowercased.
fn author_slugs(author: &str) -> (String, String) {
    let full_name: String = author
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();

    let hyphenated = author
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();

    (full_name, hyphenated)
}
