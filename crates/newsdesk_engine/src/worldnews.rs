use newsdesk_core::{dedupe_by_key, source_name_from_url, Article, Query, Source};
use newsdesk_logging::{newsdesk_info, newsdesk_warn};
use serde::Deserialize;

use crate::fetch::{join_endpoint, map_reqwest_error};
use crate::{ArticleRepository, FailureKind, FetchError, FetchSettings};

const TEASER_CHARS: usize = 280;

#[derive(Debug, Clone)]
pub struct WorldNewsSettings {
    pub base_url: String,
    pub api_key: Option<String>,
    /// Query that stands in for "trending", the provider has no such feed.
    pub trending_query: String,
    pub page_size: u32,
    pub fetch: FetchSettings,
}

impl Default for WorldNewsSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.worldnewsapi.com".to_string(),
            api_key: None,
            trending_query: "AI Technology".to_string(),
            page_size: 20,
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    news: Vec<WorldNewsItem>,
}

#[derive(Debug, Deserialize)]
struct WorldNewsItem {
    id: Option<u64>,
    title: Option<String>,
    text: Option<String>,
    url: Option<String>,
    image: Option<String>,
    publish_date: Option<String>,
    #[serde(default)]
    authors: Vec<String>,
}

/// Live repository backed by the World News API search endpoint.
#[derive(Debug, Clone)]
pub struct WorldNewsRepository {
    settings: WorldNewsSettings,
}

impl WorldNewsRepository {
    pub fn new(settings: WorldNewsSettings) -> Self {
        Self { settings }
    }

    fn api_key(&self) -> Result<&str, FetchError> {
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                FetchError::new(
                    FailureKind::MissingApiKey,
                    "Missing API key: set NEWS_API_KEY to use the live news source.",
                )
            })
    }

    async fn search(&self, query: &Query) -> Result<Vec<Article>, FetchError> {
        let api_key = self.api_key()?;
        let mut endpoint = join_endpoint(&self.settings.base_url, "search-news").map_err(|err| {
            FetchError::new(FailureKind::Network, format!("invalid news api url: {err}"))
        })?;
        {
            let mut pairs = endpoint.query_pairs_mut();
            if let Query::Term(term) = query {
                pairs.append_pair("text", term);
            }
            pairs.append_pair("number", &self.settings.page_size.to_string());
        }

        let client = self.settings.fetch.build_client().map_err(map_reqwest_error)?;
        newsdesk_info!("news api search {:?}", query.as_str());
        let response = client
            .get(endpoint.as_str())
            .header("x-api-key", api_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            newsdesk_warn!("news api answered {}: {}", status, body);
            return Err(FetchError::http_status(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let parsed: SearchResponse = serde_json::from_slice(&body).map_err(|err| {
            FetchError::new(
                FailureKind::Decode,
                format!("Unexpected response from the news provider: {err}"),
            )
        })?;

        let articles = parsed.news.into_iter().filter_map(map_item).collect();
        Ok(dedupe_by_key(articles))
    }
}

#[async_trait::async_trait]
impl ArticleRepository for WorldNewsRepository {
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        let query = Query::parse(query)?;
        self.search(&query).await
    }

    async fn fetch_trending(&self) -> Result<Vec<Article>, FetchError> {
        let query = Query::parse(&self.settings.trending_query)?;
        self.search(&query).await
    }
}

/// Items without a title are dropped; everything else is optional.
fn map_item(item: WorldNewsItem) -> Option<Article> {
    let title = item.title.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())?;
    let url = item.url.unwrap_or_default();
    let text = item.text.filter(|t| !t.trim().is_empty());
    Some(Article {
        source: Source {
            id: item.id.map(|id| id.to_string()),
            name: source_name_from_url(&url),
        },
        author: item.authors.into_iter().find(|a| !a.trim().is_empty()),
        description: text.as_deref().map(teaser),
        content: text,
        title,
        url,
        url_to_image: item.image.filter(|i| !i.trim().is_empty()),
        published_at: item.publish_date.unwrap_or_default(),
    })
}

fn teaser(text: &str) -> String {
    let text = text.trim();
    if text.chars().count() <= TEASER_CHARS {
        return text.to_string();
    }
    let cut: String = text.chars().take(TEASER_CHARS).collect();
    format!("{}…", cut.trim_end())
}
