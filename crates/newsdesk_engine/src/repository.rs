use std::time::Duration;

use newsdesk_core::{dedupe_by_key, Article, Query};
use newsdesk_logging::newsdesk_info;

use crate::{FailureKind, FetchError};

const BUNDLED_ARTICLES: &str = include_str!("../fixtures/articles.json");
const BUNDLED_TRENDING: &str = include_str!("../fixtures/trending.json");

/// Source of article lists. The dashboard is written against this trait only.
///
/// Implementations validate the query before any IO, make a single attempt
/// per call and keep no cache.
#[async_trait::async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Articles for `query`; an empty query means the unfiltered default set.
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError>;

    async fn fetch_trending(&self) -> Result<Vec<Article>, FetchError>;
}

/// Static fixture data with an optional simulated latency.
#[derive(Debug, Clone)]
pub struct FixtureRepository {
    articles: Vec<Article>,
    trending: Vec<Article>,
    latency: Duration,
}

impl FixtureRepository {
    pub fn new(articles: Vec<Article>, trending: Vec<Article>) -> Self {
        Self {
            articles,
            trending,
            latency: Duration::ZERO,
        }
    }

    /// The fixture sets compiled into the binary.
    pub fn bundled() -> Result<Self, FetchError> {
        let articles = parse_fixture(BUNDLED_ARTICLES)?;
        let trending = parse_fixture(BUNDLED_TRENDING)?;
        Ok(Self::new(articles, trending))
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

fn parse_fixture(raw: &str) -> Result<Vec<Article>, FetchError> {
    serde_json::from_str(raw).map_err(|err| {
        FetchError::new(FailureKind::Decode, format!("invalid fixture data: {err}"))
    })
}

#[async_trait::async_trait]
impl ArticleRepository for FixtureRepository {
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        let query = Query::parse(query)?;
        self.simulate_latency().await;
        let matched: Vec<Article> = self
            .articles
            .iter()
            .filter(|article| query.matches(article))
            .cloned()
            .collect();
        newsdesk_info!(
            "fixture query {:?} matched {} of {} articles",
            query.as_str(),
            matched.len(),
            self.articles.len()
        );
        Ok(dedupe_by_key(matched))
    }

    async fn fetch_trending(&self) -> Result<Vec<Article>, FetchError> {
        self.simulate_latency().await;
        Ok(dedupe_by_key(self.trending.clone()))
    }
}
