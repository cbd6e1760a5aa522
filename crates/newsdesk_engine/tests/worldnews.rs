use std::time::Duration;

use newsdesk_engine::{
    ArticleRepository, FailureKind, FetchSettings, WorldNewsRepository, WorldNewsSettings,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn repository(server: &MockServer, api_key: Option<&str>) -> WorldNewsRepository {
    WorldNewsRepository::new(WorldNewsSettings {
        base_url: server.uri(),
        api_key: api_key.map(ToOwned::to_owned),
        trending_query: "AI Technology".to_string(),
        page_size: 10,
        fetch: FetchSettings {
            connect_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_millis(500),
        },
    })
}

fn sample_body() -> serde_json::Value {
    json!({
        "offset": 0,
        "number": 10,
        "available": 2,
        "news": [
            {
                "id": 101,
                "title": "Robot chefs open first restaurant",
                "text": "A kitchen staffed by robotic arms served its first guests on Monday.",
                "url": "https://www.example-news.com/robot-chefs",
                "image": "https://cdn.example-news.com/chefs.jpg",
                "publish_date": "2024-10-01 09:15:00",
                "authors": ["", "Ada Lovelace"]
            },
            {
                "id": 102,
                "title": "Robot chefs open first restaurant (syndicated)",
                "text": "",
                "url": "https://www.example-news.com/robot-chefs",
                "image": "",
                "publish_date": null,
                "authors": []
            }
        ]
    })
}

#[tokio::test]
async fn maps_provider_items_to_articles() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-news"))
        .and(query_param("text", "robot"))
        .and(query_param("number", "10"))
        .and(header("x-api-key", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&server)
        .await;

    let articles = repository(&server, Some("secret"))
        .fetch_articles("  robot ")
        .await
        .expect("fetch ok");

    assert_eq!(articles.len(), 1, "duplicate url collapsed");
    let first = &articles[0];
    assert_eq!(first.title, "Robot chefs open first restaurant");
    assert_eq!(first.source.id.as_deref(), Some("101"));
    assert_eq!(first.source.name, "example-news.com");
    assert_eq!(first.author.as_deref(), Some("Ada Lovelace"));
    assert_eq!(
        first.content.as_deref(),
        Some("A kitchen staffed by robotic arms served its first guests on Monday.")
    );
    assert_eq!(first.description, first.content);
    assert_eq!(
        first.url_to_image.as_deref(),
        Some("https://cdn.example-news.com/chefs.jpg")
    );
    assert_eq!(first.published_at, "2024-10-01 09:15:00");
}

#[tokio::test]
async fn default_query_omits_text_parameter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-news"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "news": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let articles = repository(&server, Some("secret"))
        .fetch_articles("")
        .await
        .expect("fetch ok");
    assert!(articles.is_empty());

    let requests = server.received_requests().await.expect("recording on");
    assert!(requests[0]
        .url
        .query_pairs()
        .all(|(name, _)| name != "text"));
}

#[tokio::test]
async fn short_query_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(0)
        .mount(&server)
        .await;

    let err = repository(&server, Some("secret"))
        .fetch_articles("ai")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Validation);
    assert_eq!(err.to_string(), "Search term must be at least 3 characters long.");
}

#[tokio::test]
async fn missing_key_fails_without_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = repository(&server, None)
        .fetch_articles("robot")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::MissingApiKey);
}

#[tokio::test]
async fn rate_limit_and_status_errors_are_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("text", "quota"))
        .respond_with(ResponseTemplate::new(429).set_body_string("slow down"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("text", "broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let repo = repository(&server, Some("secret"));
    assert_eq!(
        repo.fetch_articles("quota").await.unwrap_err().kind,
        FailureKind::RateLimited
    );
    let err = repo.fetch_articles("broken").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "API request failed with status 500.");
}

#[tokio::test]
async fn malformed_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = repository(&server, Some("secret"))
        .fetch_articles("robot")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn slow_provider_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_secs(2))
                .set_body_json(json!({ "news": [] })),
        )
        .mount(&server)
        .await;

    let err = repository(&server, Some("secret"))
        .fetch_articles("robot")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn trending_uses_configured_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search-news"))
        .and(query_param("text", "AI Technology"))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_body()))
        .expect(1)
        .mount(&server)
        .await;

    let trending = repository(&server, Some("secret"))
        .fetch_trending()
        .await
        .expect("trending ok");
    assert_eq!(trending.len(), 1);
}
