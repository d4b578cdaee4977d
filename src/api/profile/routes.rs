// Profile and account settings routes

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

pub fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile/{user_id}", get(handler::profile))
        .route("/settings", get(handler::settings_page).post(handler::update_settings))
}
