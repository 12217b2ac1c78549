use axum::{
    Json, Router,
    body::Bytes,
    http::{HeaderMap, Method as HttpMethod, StatusCode},
    routing::{any, get},
};
use discord_client::{ApiResponse, ClientError, DiscordClient, Method};
use serde_json::{Value, json};
use tokio::net::TcpListener;

const TOKEN: &str = "MTAx.GhIj.secret-part";

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn me(headers: HeaderMap) -> (StatusCode, Json<Value>) {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TOKEN);

    if authorized {
        (
            StatusCode::OK,
            Json(json!({
                "id": "101",
                "username": "switchboard",
                "global_name": "Switchboard",
                "avatar": null
            })),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"message": "401: Unauthorized", "code": 0})),
        )
    }
}

/// Reflects the method, content type and body back as JSON
async fn echo(method: HttpMethod, headers: HeaderMap, body: Bytes) -> Json<Value> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Option<Value> = serde_json::from_slice(&body).ok();

    Json(json!({
        "method": method.as_str(),
        "content_type": content_type,
        "body": body,
    }))
}

async fn start_test_server() -> TestServer {
    let app = Router::new()
        .route("/api/v9/users/@me", get(me))
        .route("/api/v9/echo", any(echo))
        .route("/api/v9/plain", get(|| async { "rate limited, try later" }));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind listener");
    let addr = listener.local_addr().expect("Failed to read bound addr");
    let base_url = format!("http://{addr}/api/v9/");

    let handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("test server exited unexpectedly");
    });

    TestServer { base_url, handle }
}

#[tokio::test]
async fn test_current_user_with_leading_slash_path() {
    let server = start_test_server().await;
    let client = DiscordClient::new(&server.base_url, TOKEN).unwrap();

    let user = client.current_user().await.expect("current user");
    assert_eq!(user.id, "101");
    assert_eq!(user.display_name(), "Switchboard");

    let response = client
        .api_request("/users/@me", Method::GET, None)
        .await
        .unwrap();
    assert_eq!(response.as_json().unwrap()["username"], "switchboard");
}

#[tokio::test]
async fn test_bad_token_reports_api_error() {
    let server = start_test_server().await;
    let client = DiscordClient::new(&server.base_url, "wrong").unwrap();

    match client.current_user().await {
        Err(ClientError::Api { status, message }) => {
            assert_eq!(status, 401);
            assert_eq!(message, "401: Unauthorized");
        }
        other => panic!("expected API error, got {other:?}"),
    }

    // the raw call still hands back the body
    let response = client
        .api_request("users/@me", Method::GET, None)
        .await
        .unwrap();
    assert_eq!(response.error_message(), "401: Unauthorized");
}

#[tokio::test]
async fn test_method_and_json_body_sent() {
    let server = start_test_server().await;
    let client = DiscordClient::new(&server.base_url, TOKEN).unwrap();
    let payload = json!({"content": "hello"});

    let response = client
        .api_request("echo", Method::PATCH, Some(&payload))
        .await
        .unwrap();
    let echoed = response.as_json().unwrap();
    assert_eq!(echoed["method"], "PATCH");
    assert_eq!(echoed["content_type"], "application/json");
    assert_eq!(echoed["body"], payload);

    let response = client.api_request("echo", Method::GET, None).await.unwrap();
    let echoed = response.as_json().unwrap();
    assert_eq!(echoed["method"], "GET");
    assert_eq!(echoed["content_type"], Value::Null);
}

#[tokio::test]
async fn test_text_fallback() {
    let server = start_test_server().await;
    let client = DiscordClient::new(&server.base_url, TOKEN).unwrap();

    let response = client.api_request("plain", Method::GET, None).await.unwrap();
    assert_eq!(
        response,
        ApiResponse::Text("rate limited, try later".to_string())
    );
}
