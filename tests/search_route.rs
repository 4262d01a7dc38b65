//! Testes de integração do endpoint GET /games/search
//!
//! As APIs da Twitch e da IGDB são simuladas com httpmock; o router é
//! exercitado com `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use httpmock::prelude::*;
use httpmock::Mock;
use serde_json::{json, Value};
use tower::ServiceExt;

use igdb_search_gateway::config::{IgdbSettings, ServerSettings, Settings};
use igdb_search_gateway::{build_router, AppState};

const TOKEN_PATH: &str = "/oauth2/token";
const GAMES_PATH: &str = "/v4/games";

fn test_settings(server: &MockServer, client_id: &str, client_secret: &str) -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        igdb: IgdbSettings {
            client_id: client_id.to_string(),
            client_secret: client_secret.to_string(),
            token_url: server.url(TOKEN_PATH),
            api_url: server.url(GAMES_PATH),
            timeout_secs: Some(5),
        },
    }
}

async fn send(settings: Settings, uri: &str) -> Response<Body> {
    let state = Arc::new(AppState::new(settings).unwrap());
    build_router(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn content_type(response: &Response<Body>) -> String {
    response
        .headers()
        .get("content-type")
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

async fn mock_token_ok(server: &MockServer) -> Mock<'_> {
    server.mock_async(|when, then| {
        when.method(POST)
            .path(TOKEN_PATH)
            .body_contains("grant_type=client_credentials");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"access_token":"abc","token_type":"bearer","expires_in":3600}"#);
    }).await
}

#[tokio::test]
async fn missing_query_returns_400_without_upstream_calls() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token_ok(&server).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(content_type(&response).starts_with("text/plain"));
    assert_eq!(body_string(response).await, "Query parameter 'q' is required");
    assert_eq!(token_mock.hits_async().await, 0);
}

#[tokio::test]
async fn empty_query_returns_400_without_upstream_calls() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token_ok(&server).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(token_mock.hits_async().await, 0);
}

#[tokio::test]
async fn search_returns_matching_record_field_for_field() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token_ok(&server).await;
    let games_mock = server.mock_async(|when, then| {
        when.method(POST)
            .path(GAMES_PATH)
            .header("Client-ID", "test-id")
            .header("Authorization", "Bearer abc")
            .body(r#"search "Zelda"; fields name, first_release_date, summary;"#);
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"id":1025,"name":"The Legend of Zelda","first_release_date":509328000,"summary":"Link's first quest."}]"#);
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(content_type(&response), "application/json");

    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        json!([{
            "id": 1025,
            "name": "The Legend of Zelda",
            "first_release_date": 509328000,
            "summary": "Link's first quest."
        }])
    );

    token_mock.assert_async().await;
    games_mock.assert_async().await;
}

#[tokio::test]
async fn url_encoded_query_is_decoded_before_interpolation() {
    let server = MockServer::start_async().await;
    mock_token_ok(&server).await;
    let games_mock = server.mock_async(|when, then| {
        when.method(POST)
            .path(GAMES_PATH)
            .body(r#"search "super mario"; fields name, first_release_date, summary;"#);
        then.status(200).body("[]");
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=super%20mario").await;

    assert_eq!(response.status(), StatusCode::OK);
    games_mock.assert_async().await;
}

#[tokio::test]
async fn empty_result_returns_200_with_empty_array() {
    let server = MockServer::start_async().await;
    mock_token_ok(&server).await;
    server.mock_async(|when, then| {
        when.method(POST).path(GAMES_PATH);
        then.status(200).body("[]");
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=zzzz").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
}

#[tokio::test]
async fn missing_credentials_return_500_without_upstream_calls() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token_ok(&server).await;

    let response = send(test_settings(&server, "test-id", ""), "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error fetching OAuth token: "), "body: {}", body);
    assert!(body.contains("IGDB Client ID or Client Secret is not set"), "body: {}", body);
    assert_eq!(token_mock.hits_async().await, 0);
}

#[tokio::test]
async fn malformed_token_response_returns_500_and_skips_search() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(POST).path(TOKEN_PATH);
        then.status(500).body("<html>upstream exploded</html>");
    }).await;
    let games_mock = server.mock_async(|when, then| {
        when.method(POST).path(GAMES_PATH);
        then.status(200).body("[]");
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type(&response).starts_with("text/plain"));
    let body = body_string(response).await;
    assert!(body.starts_with("Error fetching OAuth token: "), "body: {}", body);
    assert!(body.contains("status 500"), "body: {}", body);
    assert_eq!(games_mock.hits_async().await, 0);
}

#[tokio::test]
async fn unreachable_token_endpoint_returns_500() {
    let server = MockServer::start_async().await;
    let mut settings = test_settings(&server, "test-id", "test-secret");
    settings.igdb.token_url = "http://127.0.0.1:1/oauth2/token".to_string();

    let response = send(settings, "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error fetching OAuth token: HTTP request failed"), "body: {}", body);
}

#[tokio::test]
async fn catalog_error_object_returns_500_with_games_prefix() {
    let server = MockServer::start_async().await;
    mock_token_ok(&server).await;
    server.mock_async(|when, then| {
        when.method(POST).path(GAMES_PATH);
        then.status(401).body(r#"{"message":"Authorization Failure"}"#);
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_string(response).await;
    assert!(body.starts_with("Error fetching games: "), "body: {}", body);
    assert!(body.contains("status 401"), "body: {}", body);
}

#[tokio::test]
async fn repeated_query_key_uses_first_value() {
    let server = MockServer::start_async().await;
    mock_token_ok(&server).await;
    let games_mock = server.mock_async(|when, then| {
        when.method(POST)
            .path(GAMES_PATH)
            .body(r#"search "Zelda"; fields name, first_release_date, summary;"#);
        then.status(200).body("[]");
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=Zelda&q=Mario").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "[]");
    games_mock.assert_async().await;
}

#[tokio::test]
async fn null_catalog_fields_are_returned_as_defaults() {
    let server = MockServer::start_async().await;
    mock_token_ok(&server).await;
    server.mock_async(|when, then| {
        when.method(POST).path(GAMES_PATH);
        then.status(200)
            .body(r#"[{"id":1,"name":"Foo","first_release_date":null,"summary":null}]"#);
    }).await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/games/search?q=Foo").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        json!([{"id": 1, "name": "Foo", "first_release_date": 0, "summary": ""}])
    );
}

#[tokio::test]
async fn unreachable_catalog_endpoint_returns_500() {
    let server = MockServer::start_async().await;
    let token_mock = mock_token_ok(&server).await;
    let mut settings = test_settings(&server, "test-id", "test-secret");
    settings.igdb.api_url = "http://127.0.0.1:1/v4/games".to_string();

    let response = send(settings, "/games/search?q=Zelda").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(content_type(&response).starts_with("text/plain"));
    let body = body_string(response).await;
    assert!(body.starts_with("Error fetching games: HTTP request failed"), "body: {}", body);
    token_mock.assert_async().await;
}

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let server = MockServer::start_async().await;

    let response = send(test_settings(&server, "test-id", "test-secret"), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "igdb-search-gateway");
}
