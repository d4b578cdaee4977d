//! tests/common/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

#![allow(dead_code)]

use std::collections::HashMap;

use axum::serve;
use tokio::net::TcpListener as TokioTcpListener;
use tweeter::{create_app, AppState, EnvironmentVariables};

pub const ADMIN_PASSWORD: &str = "pepegaman123";

/// Spawns the app with the default test configuration
pub fn spawn_app() -> String {
    spawn_app_with(&[])
}

/// Spawns the app on a random unused port and returns its base URL.
/// `overrides` are applied on top of the test configuration.
pub fn spawn_app_with(overrides: &[(&str, &str)]) -> String {
    let mut vars: HashMap<String, String> = HashMap::from([
        ("ENVIRONMENT".to_string(), "test".to_string()),
        ("ADMIN_PASSWORD".to_string(), ADMIN_PASSWORD.to_string()),
        ("BCRYPT_COST".to_string(), "4".to_string()),
        (
            "ASSETS_DIR".to_string(),
            concat!(env!("CARGO_MANIFEST_DIR"), "/assets").to_string(),
        ),
    ]);
    for (key, value) in overrides {
        vars.insert(key.to_string(), value.to_string());
    }

    // * Build the application exactly as main() does.
    let env: EnvironmentVariables =
        EnvironmentVariables::from_map(&vars).expect("Invalid test configuration");
    let state: AppState = AppState::new(env);
    state.seed_admin().expect("Failed to seed admin");
    let app: axum::Router = create_app(state);

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener =
        std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener =
        TokioTcpListener::from_std(std_listener).expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app).await.expect("Server failed");
    });

    format!("http://{}", addr)
}

/// Browser-like client: keeps cookies and follows redirects
pub fn browser() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to build client")
}

/// Client that stops at redirects so Location and Set-Cookie can be inspected
pub fn raw_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .expect("Failed to build client")
}

pub async fn register(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/register", base_url))
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .expect("Failed to register")
}

pub async fn login(
    client: &reqwest::Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/login", base_url))
        .form(&[("username", username), ("password", password)])
        .send()
        .await
        .expect("Failed to log in")
}

pub async fn create_post(
    client: &reqwest::Client,
    base_url: &str,
    contents: &str,
) -> reqwest::Response {
    client
        .post(format!("{}/create_post", base_url))
        .form(&[("contents", contents)])
        .send()
        .await
        .expect("Failed to create post")
}

/// Logs in without following the redirect and returns the `name=value` session cookie
pub async fn session_cookie(base_url: &str, username: &str, password: &str) -> String {
    let resp: reqwest::Response = login(&raw_client(), base_url, username, password).await;
    assert_eq!(resp.status(), reqwest::StatusCode::SEE_OTHER);

    let header: &str = resp
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .expect("No session cookie set")
        .to_str()
        .unwrap();
    header.split(';').next().unwrap().to_string()
}
