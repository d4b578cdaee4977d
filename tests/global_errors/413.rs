//! tests/global_errors/413.rs
//! Ensures that a form larger than MAX_REQUEST_BODY_SIZE triggers 413.

use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_413_when_form_exceeds_limit() {
    let base_url: String = common::spawn_app_with(&[("MAX_REQUEST_BODY_SIZE", "1024")]);
    let client: reqwest::Client = common::browser();
    common::register(&client, &base_url, "verbose", "pw").await;

    let oversized: String = "x".repeat(4096);
    let resp: reqwest::Response = common::create_post(&client, &base_url, &oversized).await;

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    assert!(resp.text().await.unwrap().contains("413 Payload Too Large"));
}
