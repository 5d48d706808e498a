use std::time::Duration;

use pretty_assertions::assert_eq;
use results_core::build_search_url;
use results_engine::{ClientSettings, FailureKind, ReqwestSearchApi, SearchApi};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BODY: &str = r#"{
    "all_results": [
        {"title": "Rust", "link": "https://www.rust-lang.org/", "snippet": "A language", "source": "bing"},
        {"title": "News", "link": "https://www.bbc.com/news", "snippet": "Headlines", "source": "bing"}
    ],
    "count": 2,
    "time": 1.25,
    "ai_summary": "Rust things.",
    "engines": {"requested": ["bing"], "successful": ["bing"], "failed": []}
}"#;

fn api() -> ReqwestSearchApi {
    ReqwestSearchApi::new(ClientSettings::default()).expect("client")
}

#[tokio::test]
async fn search_decodes_response_and_sends_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .and(query_param("q", "rust lang"))
        .and(query_param("page", "2"))
        .and(query_param("engines", "bing"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let url = build_search_url(&server.uri(), "rust lang", 2, &["bing".to_string()]);
    let response = api().search(&url).await.expect("search ok");

    assert_eq!(response.count, 2);
    assert_eq!(response.time, 1.25);
    assert_eq!(response.all_results[1].link, "https://www.bbc.com/news");
    assert_eq!(response.ai_summary.as_deref(), Some("Rust things."));
}

#[tokio::test]
async fn search_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let url = build_search_url(&server.uri(), "rust", 1, &[]);
    let err = api().search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
}

#[tokio::test]
async fn search_fails_on_invalid_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>oops</html>", "text/html"))
        .mount(&server)
        .await;

    let url = build_search_url(&server.uri(), "rust", 1, &[]);
    let err = api().search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn relative_url_is_rejected() {
    let err = api()
        .search("/api/search?q=rust&page=1")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // Port 9 (discard) on localhost is expected to refuse connections.
    let err = api()
        .search("http://127.0.0.1:9/api/search?q=rust&page=1")
        .await
        .unwrap_err();
    assert!(matches!(
        err.kind,
        FailureKind::Network | FailureKind::Timeout
    ));
}

#[tokio::test]
async fn optional_timeout_is_applied() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(BODY, "application/json")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let settings = ClientSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..ClientSettings::default()
    };
    let api = ReqwestSearchApi::new(settings).expect("client");
    let url = build_search_url(&server.uri(), "rust", 1, &[]);

    let err = api.search(&url).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn large_bodies_are_accepted_by_default() {
    let hits: Vec<String> = (0..800)
        .map(|i| {
            format!(
                r#"{{"title":"Result {i}","link":"https://example.com/{i}","snippet":"{pad}","source":"bing"}}"#,
                pad = "x".repeat(3000)
            )
        })
        .collect();
    let body = format!(
        r#"{{"all_results":[{}],"count":800,"time":0.9}}"#,
        hits.join(",")
    );
    assert!(body.len() > 2 * 1024 * 1024);

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "application/json"))
        .mount(&server)
        .await;

    let url = build_search_url(&server.uri(), "rust", 1, &[]);
    let response = api().search(&url).await.expect("large body accepted");
    assert_eq!(response.all_results.len(), 800);
}

#[tokio::test]
async fn configured_size_cap_rejects_larger_bodies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/search"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BODY, "application/json"))
        .mount(&server)
        .await;

    let settings = ClientSettings {
        max_bytes: Some(16),
        ..ClientSettings::default()
    };
    let api = ReqwestSearchApi::new(settings).expect("client");
    let url = build_search_url(&server.uri(), "rust", 1, &[]);

    let err = api.search(&url).await.unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 16, .. }));
}
