//! Wire-format tests for the World News API client against a local
//! mock server.

use mockito::Matcher;
use newslens::client::{ApiError, NewsApi, WorldNewsClient};
use newslens::config::Config;
use newslens::models::SearchContext;

fn client_for(server: &mockito::ServerGuard) -> WorldNewsClient {
    let config = Config {
        api_key: Some("test-key".to_string()),
        base_url: server.url(),
        timeout_secs: 5,
    };
    WorldNewsClient::new(&config)
}

#[tokio::test]
async fn sends_exact_phrase_and_fixed_page_size() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search-news")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("api-key".into(), "test-key".into()),
            Matcher::UrlEncoded("text".into(), "\"climate\"".into()),
            Matcher::UrlEncoded("text-match-indexes".into(), "title,content".into()),
            Matcher::UrlEncoded("number".into(), "5".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "news": [
                    {"title": "A", "publish_date": "2024-03-01 10:00:00"},
                    {"title": "B"}
                ],
                "available": 12
            }"#,
        )
        .create_async()
        .await;

    let payload = client_for(&server)
        .fetch(&SearchContext::new("climate"), 0)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(payload.available, Some(12));
    assert_eq!(payload.news.as_ref().map(Vec::len), Some(2));
}

#[tokio::test]
async fn sends_lowercased_filters_and_offset() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search-news")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("language".into(), "en".into()),
            Matcher::UrlEncoded("source-country".into(), "us".into()),
            Matcher::UrlEncoded("offset".into(), "10".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"news": [], "available": 0}"#)
        .create_async()
        .await;

    let ctx = SearchContext::new("rates").language("EN").country("US");
    let payload = client_for(&server).fetch(&ctx, 10).await.unwrap();

    mock.assert_async().await;
    assert_eq!(payload.available, Some(0));
    assert_eq!(payload.news.as_ref().map(Vec::len), Some(0));
}

#[tokio::test]
async fn non_success_status_is_an_error_not_a_panic() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search-news")
        .match_query(Matcher::Any)
        .with_status(402)
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch(&SearchContext::new("climate"), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status(402)));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search-news")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json")
        .create_async()
        .await;

    let err = client_for(&server)
        .fetch(&SearchContext::new("climate"), 0)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn payload_without_news_key_deserializes_to_none() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/search-news")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"available": 3}"#)
        .create_async()
        .await;

    let payload = client_for(&server)
        .fetch(&SearchContext::new("climate"), 0)
        .await
        .unwrap();

    assert!(payload.news.is_none());
    assert_eq!(payload.available, Some(3));
}
