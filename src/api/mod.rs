/*
* HTTP surface: feature routers (handler + routes per feature) and middleware.
*/

use serde::Deserialize;

pub mod admin;
pub mod auth;
pub mod middleware;
pub mod posts;
pub mod profile;

/// Messages carried across redirects in the query string
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub err: Option<String>,
    pub success: Option<String>,
}
