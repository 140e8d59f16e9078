use bbref_api::{Client, ClientConfig, Error, DEFAULT_USER_AGENT};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn fetch_page_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/players/a/adamsba01.shtml"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html><h1>Babe Adams</h1></html>"))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let url = format!("{}/players/a/adamsba01.shtml", mock_server.uri());
    let body = client.fetch_page(&url).await.unwrap();
    assert!(body.contains("Babe Adams"));
}

#[tokio::test]
async fn fetch_page_sends_browser_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .and(header("accept-language", "en-US,en;q=0.7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let body = client
        .fetch_page(&format!("{}/page", mock_server.uri()))
        .await
        .unwrap();
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn fetch_page_custom_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", "pitch162-test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_config(ClientConfig {
        user_agent: "pitch162-test".to_string(),
        ..ClientConfig::default()
    })
    .unwrap();
    assert!(client
        .fetch_page(&format!("{}/page", mock_server.uri()))
        .await
        .is_ok());
}

#[tokio::test]
async fn fetch_page_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let err = client
        .fetch_page(&format!("{}/missing", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 404 }));
}

#[tokio::test]
async fn fetch_page_non_200_success_status_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = Client::new().unwrap();
    let err = client
        .fetch_page(&format!("{}/empty", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 204 }));
}

#[tokio::test]
async fn fetch_page_connection_refused() {
    let mock_server = MockServer::start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = Client::new().unwrap();
    let err = client.fetch_page(&format!("{}/gone", uri)).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}
