//! tests/auth.rs
//! Registration, login and logout through the signed session cookie.

mod common;

use reqwest::StatusCode;

#[tokio::test]
async fn register_signs_the_user_in() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::browser();

    let resp: reqwest::Response = common::register(&client, &base_url, "alice", "wonderland").await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/");
    let body: String = resp.text().await.unwrap();
    assert!(body.contains("Signed in as"));
    assert!(body.contains("alice"));
}

#[tokio::test]
async fn duplicate_registration_is_rejected() {
    let base_url: String = common::spawn_app();
    common::register(&common::browser(), &base_url, "alice", "one").await;

    let resp: reqwest::Response =
        common::register(&common::browser(), &base_url, "alice", "two").await;

    assert_eq!(resp.url().path(), "/register");
    let body: String = resp.text().await.unwrap();
    assert!(body.contains("failed to add user: user with name alice already exists"));
}

#[tokio::test]
async fn empty_credentials_are_rejected() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::register(&common::browser(), &base_url, "  ", "pw").await;

    assert_eq!(resp.url().path(), "/register");
    assert!(resp.text().await.unwrap().contains("username and password are required"));
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::browser();

    let resp: reqwest::Response = common::login(&client, &base_url, "admin", "nope").await;

    assert_eq!(resp.url().path(), "/login");
    assert_eq!(resp.url().query(), Some("err=incorrect%20username%2Fpassword"));
    let body: String = resp.text().await.unwrap();
    assert!(body.contains("incorrect username/password"));
    assert!(!body.contains("Signed in as"));
}

#[tokio::test]
async fn login_with_unknown_user_fails() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response =
        common::login(&common::browser(), &base_url, "ghost", "boo").await;

    assert_eq!(resp.url().path(), "/login");
}

#[tokio::test]
async fn session_cookie_is_http_only() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response =
        common::login(&common::raw_client(), &base_url, "admin", common::ADMIN_PASSWORD).await;

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let cookie: &str = resp
        .headers()
        .get(reqwest::header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("user="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("SameSite=Lax"));
    assert!(cookie.contains("Path=/"));
}

#[tokio::test]
async fn logged_in_users_skip_the_forms() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::browser();
    common::login(&client, &base_url, "admin", common::ADMIN_PASSWORD).await;

    for page in ["/login", "/register"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, page))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.url().path(), "/");
    }
}

#[tokio::test]
async fn logout_clears_the_session() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::browser();
    common::register(&client, &base_url, "bob", "builder").await;

    let resp: reqwest::Response = client
        .post(format!("{}/logout", base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.url().path(), "/");
    let body: String = resp.text().await.unwrap();
    assert!(!body.contains("Signed in as"));
    assert!(body.contains(r#"href="/login""#));
}

#[tokio::test]
async fn unsigned_cookie_is_anonymous() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = common::raw_client()
        .get(format!("{}/settings", base_url))
        .header(reqwest::header::COOKIE, "user=admin")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[reqwest::header::LOCATION], "/login");
}

#[tokio::test]
async fn login_matches_how_register_stored_the_name() {
    let base_url: String = common::spawn_app();
    common::register(&common::browser(), &base_url, " bob ", "builder").await;

    let resp: reqwest::Response =
        common::login(&common::browser(), &base_url, " bob ", "builder").await;

    assert_eq!(resp.url().path(), "/");
    let body: String = resp.text().await.unwrap();
    assert!(body.contains("Signed in as"));
}
