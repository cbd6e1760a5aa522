use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use newsdesk_core::{Article, SummaryInput};
use newsdesk_engine::{
    ArticleRepository, EngineEvent, EngineHandle, FailureKind, FetchError, FixtureRepository,
    Summarizer, SummaryError,
};

const WAIT: Duration = Duration::from_secs(5);

/// Summarizer that echoes the title, counting calls.
#[derive(Default)]
struct EchoSummarizer {
    calls: AtomicUsize,
}

#[async_trait::async_trait]
impl Summarizer for EchoSummarizer {
    async fn summarize(&self, input: &SummaryInput) -> Result<String, SummaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(format!("summary of {}", input.title))
    }
}

/// Repository whose main fetches take as long as the query says, in ms.
struct SlowRepository;

#[async_trait::async_trait]
impl ArticleRepository for SlowRepository {
    async fn fetch_articles(&self, query: &str) -> Result<Vec<Article>, FetchError> {
        let millis: u64 = query.parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(millis)).await;
        Ok(Vec::new())
    }

    async fn fetch_trending(&self) -> Result<Vec<Article>, FetchError> {
        Ok(Vec::new())
    }
}

fn fixture_engine() -> (EngineHandle, Arc<EchoSummarizer>) {
    let summarizer = Arc::new(EchoSummarizer::default());
    let repository = Arc::new(FixtureRepository::bundled().expect("fixtures"));
    (EngineHandle::new(repository, summarizer.clone()), summarizer)
}

#[test]
fn fetches_report_back_with_their_request_ids() {
    let (engine, _) = fixture_engine();
    engine.fetch_trending(1);
    let event = engine.recv_timeout(WAIT).expect("trending event");
    match event {
        EngineEvent::TrendingFetched { request, result } => {
            assert_eq!(request, 1);
            assert_eq!(result.expect("trending ok").len(), 5);
        }
        other => panic!("unexpected event {other:?}"),
    }

    engine.fetch_articles(2, "ai");
    match engine.recv_timeout(WAIT).expect("articles event") {
        EngineEvent::ArticlesFetched { request, result } => {
            assert_eq!(request, 2);
            assert_eq!(result.unwrap_err().kind, FailureKind::Validation);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn summaries_are_routed_by_card_key() {
    let (engine, summarizer) = fixture_engine();
    engine.summarize(
        "https://news.example.com/a",
        7,
        SummaryInput {
            title: "A".to_string(),
            description: None,
            content: None,
        },
    );
    match engine.recv_timeout(WAIT).expect("summary event") {
        EngineEvent::SummaryFinished {
            key,
            request,
            result,
        } => {
            assert_eq!(key, "https://news.example.com/a");
            assert_eq!(request, 7);
            assert_eq!(result, Ok("summary of A".to_string()));
        }
        other => panic!("unexpected event {other:?}"),
    }
    assert_eq!(summarizer.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn cancelled_requests_report_nothing() {
    let engine = EngineHandle::new(
        Arc::new(SlowRepository),
        Arc::new(EchoSummarizer::default()),
    );
    engine.fetch_articles(1, "1500");
    engine.fetch_articles(2, "10");
    engine.cancel(1);

    match engine.recv_timeout(WAIT).expect("second fetch") {
        EngineEvent::ArticlesFetched { request, .. } => assert_eq!(request, 2),
        other => panic!("unexpected event {other:?}"),
    }
    // Past the point where request 1 would have finished.
    assert!(engine.recv_timeout(Duration::from_millis(2500)).is_none());
}
