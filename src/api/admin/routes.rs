// Admin route definitions, all behind the admin guard

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};

use crate::api::middleware::require_admin;
use crate::config::state::AppState;
use super::handler;

/// Creates the admin router; `route_layer` keeps unknown paths a 404
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin", get(handler::dashboard))
        .route("/admin/users", get(handler::list_users).post(handler::update_user))
        .route("/admin/posts", post(handler::delete_post))
        .route_layer(from_fn(require_admin))
}
