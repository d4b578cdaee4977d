// Timeline and post creation routes

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::index))
        .route("/create_post", get(handler::create_post_page).post(handler::create_post))
}
