//! Tests for the HTTP client module

use super::*;
use crate::config::HttpConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client() -> HttpClient {
    HttpClient::with_config(HttpClientConfig::default()).unwrap()
}

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert!(config.timeout.is_none());
    assert!(config.user_agent.starts_with("blog-feed/"));
}

#[test]
fn test_config_from_site() {
    let site = HttpConfig {
        timeout_secs: Some(7),
        user_agent: Some("my-blog/2.0".to_string()),
    };
    let config = HttpClientConfig::from_site(&site);
    assert_eq!(config.timeout, Some(Duration::from_secs(7)));
    assert_eq!(config.user_agent, "my-blog/2.0");

    let config = HttpClientConfig::from_site(&HttpConfig::default());
    assert!(config.timeout.is_none());
    assert!(config.user_agent.starts_with("blog-feed/"));
}

#[test]
fn test_request_config_keeps_query_order() {
    let config = RequestConfig::new().query("pageSize", "5").query("ref", "abc");

    assert_eq!(
        config.query,
        vec![
            ("pageSize".to_string(), "5".to_string()),
            ("ref".to_string(), "abc".to_string())
        ]
    );
}

#[tokio::test]
async fn test_query_params_and_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/search"))
        .and(query_param("q", "[[at(document.type, \"post\")]]"))
        .and(query_param("pageSize", "5"))
        .and(header("user-agent", "my-blog/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let site = HttpConfig {
        timeout_secs: None,
        user_agent: Some("my-blog/2.0".to_string()),
    };
    let client = HttpClient::with_config(HttpClientConfig::from_site(&site)).unwrap();
    let config = RequestConfig::new()
        .query("q", "[[at(document.type, \"post\")]]")
        .query("pageSize", "5");

    let url = format!("{}/documents/search", mock_server.uri());
    let body = client.get_text_with_config(&url, config).await.unwrap();
    assert_eq!(body, "{}");
}

#[tokio::test]
async fn test_query_params_extend_existing_url_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/documents/search"))
        .and(query_param("page", "2"))
        .and(query_param("access_token", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_string("page two"))
        .mount(&mock_server)
        .await;

    let url = format!("{}/documents/search?page=2", mock_server.uri());
    let body = client()
        .get_text_with_config(&url, RequestConfig::new().query("access_token", "secret"))
        .await
        .unwrap();
    assert_eq!(body, "page two");
}

#[tokio::test]
async fn test_error_status_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/flaky", mock_server.uri());
    let err = client()
        .get_with_config(&url, RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "busy");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_client_error_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let url = format!("{}/missing", mock_server.uri());
    let err = client()
        .get_text_with_config(&url, RequestConfig::new())
        .await
        .unwrap_err();
    assert!(err.is_fetch_failure());
    assert!(matches!(err, Error::HttpStatus { status: 404, .. }));
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig {
        timeout: Some(Duration::from_millis(50)),
        ..HttpClientConfig::default()
    };
    let client = HttpClient::with_config(config).unwrap();

    let url = format!("{}/slow", mock_server.uri());
    let err = client
        .get_with_config(&url, RequestConfig::new())
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Timeout { timeout_ms: 50 }));
}
