use crate::sources::NewsQuery;

/// Sentinel meaning "no filter" for both categories and sources.
pub const ALL: &str = "all";

/// Identifiers `source=all` expands to, in dispatch order.
pub const ALL_SOURCES: [&str; 3] = ["guardian", "nyt", "newsapi"];

/// Raw query string parameters of `GET /api/news`.
#[derive(Debug, Default, Clone)]
pub struct NewsParams {
    pub q: Option<String>,
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub author: Option<String>,
    pub date: Option<String>,
    pub source: Option<String>,
}

/// Normalized filter for one aggregation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRequest {
    pub keyword: String,
    pub categories: Vec<String>,
    pub author: String,
    pub date: String,
    pub sources: Vec<String>,
}

impl NewsParams {
    /// Builds params from decoded query pairs. A repeated key keeps its
    /// first value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        NewsParams {
            q: first_value(pairs, "q"),
            keyword: first_value(pairs, "keyword"),
            category: first_value(pairs, "category"),
            author: first_value(pairs, "author"),
            date: first_value(pairs, "date"),
            source: first_value(pairs, "source"),
        }
    }
}

impl FilterRequest {
    /// Builds a filter from raw parameters. No vocabulary or date validation
    /// happens here; bad values reach the adapters as-is.
    pub fn from_params(params: &NewsParams) -> Self {
        let keyword = non_empty(params.q.as_deref())
            .or_else(|| non_empty(params.keyword.as_deref()))
            .unwrap_or_default()
            .to_string();

        let categories = match non_empty(params.category.as_deref()) {
            Some(ALL) | None => Vec::new(),
            Some(raw) => split_list(raw),
        };

        // Any `all` entry dispatches every source
        let requested = split_list(non_empty(params.source.as_deref()).unwrap_or(ALL));
        let sources = if requested.is_empty() || requested.iter().any(|s| s.eq_ignore_ascii_case(ALL)) {
            ALL_SOURCES.iter().map(|s| s.to_string()).collect()
        } else {
            requested
        };

        FilterRequest {
            keyword,
            categories,
            author: params.author.clone().unwrap_or_default(),
            date: params.date.clone().unwrap_or_default(),
            sources,
        }
    }

    /// The part of the filter the source adapters see.
    pub fn query(&self) -> NewsQuery {
        NewsQuery {
            keyword: self.keyword.clone(),
            categories: self.categories.clone(),
            author: self.author.clone(),
            date: self.date.clone(),
        }
    }
}

/// First value of `key` in decoded query pairs.
pub fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Splits a comma-separated parameter, trimming entries and dropping blanks.
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}
