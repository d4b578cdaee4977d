//! tests/global_errors/405.rs
//! Wrong methods on known routes keep their status but get the HTML page.

use reqwest::StatusCode;

use crate::common;

#[tokio::test]
async fn returns_405_for_get_logout() {
    let base_url: String = common::spawn_app();

    let resp: reqwest::Response = reqwest::get(format!("{}/logout", base_url)).await.unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(resp.headers().contains_key(reqwest::header::ALLOW));
    assert!(resp.text().await.unwrap().contains("405 Method Not Allowed"));
}
