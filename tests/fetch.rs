use askpage::errors::Error;
use askpage::scrape::{ContentFetcher, HttpFetcher};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::time::Duration;

const PAGE: &str = r#"<html>
<head><title>Fixture</title><style>body { color: red }</style></head>
<body>
  <h1>Ferris   the crab</h1>
  <script>var hidden = "secret";</script>
  <p>loves
     tide pools</p>
</body>
</html>"#;

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn fetcher(max_chars: usize) -> HttpFetcher {
    HttpFetcher::new(Duration::from_secs(5), max_chars).unwrap()
}

#[tokio::test]
async fn fetch_extracts_visible_text() {
    let app = Router::new().route("/page", get(|| async { Html(PAGE) }));
    let base = serve(app).await;

    let text = fetcher(5000).fetch(&format!("{}/page", base)).await.unwrap();

    assert_eq!(text, "Ferris the crab loves tide pools");
    assert!(!text.contains("secret"));
    assert!(!text.contains("color"));
}

#[tokio::test]
async fn fetched_text_never_exceeds_the_cap() {
    let big_body = format!("<body><p>{}</p></body>", "lorem ipsum ".repeat(1000));
    let app = Router::new().route("/big", get(move || async move { Html(big_body) }));
    let base = serve(app).await;

    let text = fetcher(5000).fetch(&format!("{}/big", base)).await.unwrap();

    assert!(text.chars().count() <= 5000);
}

#[tokio::test]
async fn non_success_status_is_a_fetch_error() {
    let app = Router::new().route("/page", get(|| async { Html(PAGE) }));
    let base = serve(app).await;

    let err = fetcher(5000)
        .fetch(&format!("{}/missing", base))
        .await
        .unwrap_err();

    match err {
        Error::Fetch(message) => assert!(message.contains("404")),
        other => panic!("expected a fetch error, got {:?}", other),
    }
}

#[tokio::test]
async fn unreachable_host_is_a_fetch_error() {
    // bind and immediately drop a listener so the port refuses connections
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = fetcher(5000)
        .fetch(&format!("http://{}/page", addr))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Fetch(_)));
}

#[tokio::test]
async fn invalid_url_is_a_fetch_error() {
    let err = fetcher(5000).fetch("not a url").await.unwrap_err();
    match err {
        Error::Fetch(message) => assert!(message.contains("invalid url")),
        other => panic!("expected a fetch error, got {:?}", other),
    }
}
