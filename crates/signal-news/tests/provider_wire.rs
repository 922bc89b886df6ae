//! Wire-format tests against a local HTTP stub
//!
//! Each test binds an ephemeral listener, serves one canned response, and
//! points a real client at it, so the query parameters each provider sends
//! and the decoding of each provider's response shape are exercised
//! end-to-end without leaving the host.

use signal_news::providers::{GNewsProvider, NewsApiProvider};
use signal_news::{ArticleFetcher, NewsError, NewsProvider};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Serve one canned response and hand back the base URL plus the raw
/// request head the client sent.
async fn stub_server(content_type: &str, body: &str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: {content_type}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
        body.len(),
    );

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut buf = [0u8; 1024];
        // GET requests carry no body, so the head ends the request
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = tx.send(String::from_utf8_lossy(&head).into_owned());
    });

    (format!("http://{addr}"), rx)
}

#[tokio::test]
async fn test_gnews_request_and_response_shape() {
    let body = r#"{"totalArticles": 1, "articles": [{
        "title": "TSMC expands capacity",
        "url": "https://example.com/tsmc",
        "description": "Fabs are growing",
        "publishedAt": "2024-11-07T08:30:00Z",
        "source": {"name": "Reuters"}
    }]}"#;
    let (base_url, head) = stub_server("application/json", body).await;

    let provider = GNewsProvider::new("test-key", Duration::from_secs(2), 60)
        .unwrap()
        .with_base_url(base_url);
    let articles = provider.fetch("TSMC", 5).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].title, "TSMC expands capacity");
    assert_eq!(articles[0].source, "Reuters");
    assert!(articles[0].published_at.is_some());

    let head = head.await.unwrap();
    assert!(head.contains("q=TSMC"));
    assert!(head.contains("lang=en"));
    assert!(head.contains("max=5"));
    assert!(head.contains("apikey=test-key"));
}

#[tokio::test]
async fn test_newsapi_request_and_response_shape() {
    let body = r#"{"status": "ok", "totalResults": 1, "articles": [{
        "source": {"id": null, "name": "Bloomberg"},
        "title": "Supplier signs new contract",
        "url": "https://example.com/supplier",
        "publishedAt": "2024-11-07T08:30:00Z",
        "urlToImage": "https://example.com/img.png"
    }]}"#;
    let (base_url, head) = stub_server("application/json", body).await;

    let provider = NewsApiProvider::new("test-key", Duration::from_secs(2), 60)
        .unwrap()
        .with_base_url(base_url);
    let articles = provider.fetch("Supplier Corp", 3).await.unwrap();

    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].source, "Bloomberg");

    let head = head.await.unwrap();
    assert!(head.contains("q=Supplier%20Corp") || head.contains("q=Supplier+Corp"));
    assert!(head.contains("sortBy=publishedAt"));
    assert!(head.contains("language=en"));
    assert!(head.contains("pageSize=3"));
    assert!(head.contains("apiKey=test-key"));
}

#[tokio::test]
async fn test_newsapi_error_status_is_an_api_error() {
    let body = r#"{"status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid"}"#;
    let (base_url, _head) = stub_server("application/json", body).await;

    let provider = NewsApiProvider::new("bad-key", Duration::from_secs(2), 60)
        .unwrap()
        .with_base_url(base_url);
    let err = provider.fetch("TSMC", 3).await.unwrap_err();

    match err {
        NewsError::Api { provider, message } => {
            assert_eq!(provider, "newsapi");
            assert!(message.contains("invalid"));
        }
        other => panic!("expected api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_article_fetch_sends_browser_user_agent() {
    let html = "<html><head><title>Story</title></head><body><p>Body text.</p></body></html>";
    let (base_url, head) = stub_server("text/html", html).await;

    let fetcher = ArticleFetcher::with_timeout(Duration::from_secs(2));
    let content = fetcher.fetch(&format!("{base_url}/story")).await.unwrap();

    assert_eq!(content.title.as_deref(), Some("Story"));
    assert!(content.body.contains("Body text."));

    let head = head.await.unwrap();
    assert!(head.contains("user-agent: Mozilla/5.0"));
}
