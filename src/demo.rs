//! Fixed demo articles filtered in memory, for running the UI without
//! upstream credentials.

use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::filter::{first_value, split_list, ALL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoArticle {
    pub id: String,
    pub title: String,
    pub description: String,
    pub content: String,
    pub source: String,
    pub author: Option<String>,
    pub published_at: DateTime<Utc>,
    pub url: String,
    pub url_to_image: Option<String>,
    pub category: Option<String>,
    pub read_time: Option<u32>,
}

/// Raw query string of `GET /api/demo/articles`.
#[derive(Debug, Default, Clone)]
pub struct DemoParams {
    pub q: Option<String>,
    pub source: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub author: Option<String>,
}

impl DemoParams {
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        DemoParams {
            q: first_value(pairs, "q"),
            source: first_value(pairs, "source"),
            category: first_value(pairs, "category"),
            date: first_value(pairs, "date"),
            author: first_value(pairs, "author"),
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DemoQuery {
    pub query: String,
    pub sources: Vec<String>,
    pub categories: Vec<String>,
    pub date: String,
    pub authors: Vec<String>,
}

impl From<&DemoParams> for DemoQuery {
    fn from(params: &DemoParams) -> Self {
        let list = |value: &Option<String>| value.as_deref().map(split_list).unwrap_or_default();
        DemoQuery {
            query: params.q.clone().unwrap_or_default(),
            sources: list(&params.source),
            categories: list(&params.category),
            date: params.date.clone().unwrap_or_default(),
            authors: list(&params.author),
        }
    }
}

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Nullam euismod, nisl eget aliquam ultricies, nunc nisl aliquet nunc, quis aliquam nisl nunc quis nisl.";
const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=400&width=600";

static ARTICLES: Lazy<Vec<DemoArticle>> = Lazy::new(|| {
    [
        ("1", "Tech Giants Announce New AI Collaboration",
         "Major technology companies have joined forces to establish standards for artificial intelligence development and deployment.",
         "guardian", "Jane Smith", "2023-03-15T14:30:00Z", "technology", 5),
        ("2", "Global Markets React to Economic Policy Changes",
         "Stock markets worldwide show mixed reactions to the latest economic policy announcements from major central banks.",
         "nytimes", "John Doe", "2023-03-14T09:15:00Z", "business", 7),
        ("3", "New Study Reveals Benefits of Mediterranean Diet",
         "Research confirms that following a Mediterranean diet can significantly reduce the risk of heart disease and improve longevity.",
         "newsapi", "Sarah Johnson", "2023-03-13T16:45:00Z", "health", 4),
        ("4", "Climate Summit Concludes with New Global Commitments",
         "World leaders agree on ambitious targets to reduce carbon emissions and combat climate change at the latest international summit.",
         "guardian", "Michael Brown", "2023-03-12T11:20:00Z", "world", 6),
        ("5", "Breakthrough in Quantum Computing Announced",
         "Scientists achieve significant milestone in quantum computing, potentially revolutionizing data processing capabilities.",
         "nytimes", "John Doe", "2023-03-11T13:50:00Z", "science", 8),
        ("6", "Major Film Festival Announces Award Winners",
         "International film festival concludes with surprising award selections, celebrating diverse storytelling and innovative filmmaking.",
         "newsapi", "Sarah Johnson", "2023-03-10T19:05:00Z", "entertainment", 5),
        ("7", "Political Tensions Rise in Key Diplomatic Negotiations",
         "Ongoing diplomatic talks face challenges as nations struggle to reach consensus on critical international issues.",
         "guardian", "Michael Brown", "2023-03-09T08:30:00Z", "politics", 7),
        ("8", "Sports Championship Ends with Historic Upset Victory",
         "Underdog team defies expectations to win major sports championship, marking one of the biggest surprises in recent sports history.",
         "nytimes", "Jane Smith", "2023-03-08T22:15:00Z", "sports", 4),
    ]
    .into_iter()
    .filter_map(|(id, title, description, source, author, published, category, read_time)| {
        let published_at = DateTime::parse_from_rfc3339(published).ok()?.with_timezone(&Utc);
        Some(DemoArticle {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            content: LOREM.to_string(),
            source: source.to_string(),
            author: Some(author.to_string()),
            published_at,
            url: format!("https://example.com/article{}", id),
            url_to_image: Some(PLACEHOLDER_IMAGE.to_string()),
            category: Some(category.to_string()),
            read_time: Some(read_time),
        })
    })
    .collect()
});

pub fn articles() -> &'static [DemoArticle] {
    &ARTICLES
}

/// Applies every non-empty filter in `query` to the demo set.
pub fn filter_articles(query: &DemoQuery) -> Vec<DemoArticle> {
    let needle = query.query.to_lowercase();
    let day = NaiveDate::parse_from_str(query.date.trim(), "%Y-%m-%d").ok();

    articles()
        .iter()
        .filter(|article| {
            needle.is_empty()
                || article.title.to_lowercase().contains(&needle)
                || article.description.to_lowercase().contains(&needle)
                || article.content.to_lowercase().contains(&needle)
        })
        .filter(|article| unfiltered(&query.sources) || query.sources.contains(&article.source))
        .filter(|article| {
            unfiltered(&query.categories)
                || article
                    .category
                    .as_ref()
                    .is_some_and(|category| query.categories.contains(category))
        })
        .filter(|article| day.is_none_or(|day| article.published_at.date_naive() == day))
        .filter(|article| {
            query.authors.is_empty()
                || article
                    .author
                    .as_ref()
                    .is_some_and(|author| query.authors.contains(author))
        })
        .cloned()
        .collect()
}

fn unfiltered(values: &[String]) -> bool {
    values.is_empty() || values.iter().any(|value| value == ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(articles: &[DemoArticle]) -> Vec<&str> {
        articles.iter().map(|a| a.id.as_str()).collect()
    }

    #[test]
    fn all_eight_articles_load() {
        assert_eq!(articles().len(), 8);
        assert_eq!(filter_articles(&DemoQuery::default()).len(), 8);
    }

    #[test]
    fn keyword_matches_title_or_description() {
        let found = filter_articles(&DemoQuery { query: "QUANTUM".into(), ..DemoQuery::default() });
        assert_eq!(ids(&found), vec!["5"]);

        let found = filter_articles(&DemoQuery { query: "central banks".into(), ..DemoQuery::default() });
        assert_eq!(ids(&found), vec!["2"]);
    }

    #[test]
    fn all_sentinel_disables_source_and_category_filters() {
        let query = DemoQuery {
            sources: vec!["all".into()],
            categories: vec!["all".into()],
            ..DemoQuery::default()
        };
        assert_eq!(filter_articles(&query).len(), 8);
    }

    #[test]
    fn combines_source_category_and_author() {
        let query = DemoQuery {
            sources: vec!["guardian".into()],
            categories: vec!["world".into(), "politics".into()],
            authors: vec!["Michael Brown".into()],
            ..DemoQuery::default()
        };
        assert_eq!(ids(&filter_articles(&query)), vec!["4", "7"]);
    }

    #[test]
    fn date_matches_calendar_day() {
        let query = DemoQuery { date: "2023-03-14".into(), ..DemoQuery::default() };
        assert_eq!(ids(&filter_articles(&query)), vec!["2"]);

        let query = DemoQuery { date: "2023-04-01".into(), ..DemoQuery::default() };
        assert!(filter_articles(&query).is_empty());
    }

    #[test]
    fn params_split_into_lists() {
        let query = DemoQuery::from(&DemoParams {
            q: Some("ai".into()),
            source: Some("guardian,nytimes".into()),
            author: Some("John Doe, Jane Smith".into()),
            ..DemoParams::default()
        });
        assert_eq!(query.sources, vec!["guardian", "nytimes"]);
        assert_eq!(query.authors, vec!["John Doe", "Jane Smith"]);
        assert!(query.categories.is_empty());
    }
}
