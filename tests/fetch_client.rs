mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{client_for, peru};
use country_list::client::{CountryClient, FetchError, FetchErrorKind};
use country_list::country::Country;
use reqwest::{StatusCode, Url};
use std::time::Duration;

#[tokio::test]
async fn fetch_parses_country_array() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"name":"Peru","region":"Americas","code":"PE","capital":"Lima"}]"#,
        ))
        .await;

    let countries = client_for(&backend).fetch().await.unwrap();
    assert_eq!(countries, vec![peru()]);
}

#[tokio::test]
async fn fetch_sends_a_plain_get_to_the_configured_path() {
    let backend = MockBackend::start().await;
    client_for(&backend).fetch().await.unwrap();

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path, "/countries.json");
    assert!(requests[0]
        .headers
        .iter()
        .all(|(name, _)| name != "authorization"));
}

#[tokio::test]
async fn missing_fields_become_none_and_unknown_fields_are_ignored() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"[{"name":"Test","capital":null},{"code":"FR","population":67000000},{}]"#,
        ))
        .await;

    let countries = client_for(&backend).fetch().await.unwrap();
    assert_eq!(countries.len(), 3);
    assert_eq!(
        countries[0],
        Country {
            name: Some("Test".into()),
            ..Country::default()
        }
    );
    assert_eq!(countries[1].code.as_deref(), Some("FR"));
    assert_eq!(countries[2], Country::default());
}

#[tokio::test]
async fn server_error_is_a_protocol_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::error(500, "internal"))
        .await;

    let err = client_for(&backend).fetch().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Protocol);
    assert!(matches!(
        err,
        FetchError::Protocol {
            status: StatusCode::INTERNAL_SERVER_ERROR
        }
    ));
}

#[tokio::test]
async fn malformed_body_is_a_parse_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"[{"name": "Peru""#))
        .await;

    let err = client_for(&backend).fetch().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[tokio::test]
async fn object_instead_of_array_is_a_parse_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(r#"{"countries": []}"#))
        .await;

    let err = client_for(&backend).fetch().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Parse);
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = CountryClient::new(
        Url::parse(&format!("http://127.0.0.1:{}/countries.json", port)).unwrap(),
        Duration::from_secs(2),
        Duration::from_secs(1),
    )
    .unwrap();

    let err = client.fetch().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Transport);
    assert!(err.to_string().contains("127.0.0.1"));
}

#[tokio::test]
async fn slow_response_times_out_as_transport_error() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json("[]").with_delay(2_000))
        .await;
    let client = CountryClient::new(
        Url::parse(&backend.countries_url()).unwrap(),
        Duration::from_millis(200),
        Duration::from_secs(1),
    )
    .unwrap();

    let err = client.fetch().await.unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::Transport);
}
