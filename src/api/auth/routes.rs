use axum::{routing::{get, post}, Router};
use crate::config::state::AppState;
use super::handler;

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", get(handler::register_page).post(handler::register))
        .route("/login", get(handler::login_page).post(handler::login))
        .route("/logout", post(handler::logout))
}
