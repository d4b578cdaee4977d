//! tests/global_errors/404.rs
//! Ensures that hitting an unknown route returns an HTML 404 page.

use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        resp.headers()[reqwest::header::CONTENT_TYPE],
        "text/html; charset=utf-8"
    );

    let body: String = resp.text().await.unwrap();
    assert!(body.contains("404 Not Found"));
    assert!(body.contains("page not found"));
}

#[tokio::test]
async fn returns_404_for_missing_asset() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/assets/missing.css", base_url))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.text().await.unwrap().contains("404 Not Found"));
}

#[tokio::test]
async fn error_page_keeps_signed_in_navigation() {
    let base_url: String = common::spawn_app();
    let client: reqwest::Client = common::browser();
    common::register(&client, &base_url, "lost", "pw").await;

    for path in ["/does-not-exist", "/profile/x"] {
        let resp: reqwest::Response = client
            .get(format!("{}{}", base_url, path))
            .send()
            .await
            .unwrap();

        assert!(resp.status().is_client_error());
        let body: String = resp.text().await.unwrap();
        assert!(body.contains("Signed in as"));
        assert!(!body.contains(r#"href="/register""#));
    }
}
