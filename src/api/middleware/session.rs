use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
    Extension,
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    SignedCookieJar,
};

use crate::config::state::AppState;
use crate::database::User;
use crate::utils::PageError;

/// Name of the signed cookie that carries the username
pub const SESSION_COOKIE: &str = "user";

/// Session context stored in request extensions; `None` for anonymous visitors
#[derive(Debug, Clone, Default)]
pub struct Session(pub Option<User>);

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.0.as_ref()
    }
}

/// Builds the session cookie for `username`
pub fn session_cookie(state: &AppState, username: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, username.to_owned()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.environment.cookie_secure)
        .build()
}

/// Removal cookie matching the attributes `session_cookie` sets
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Middleware that resolves the signed cookie into a `Session`.
/// Forged or stale cookies fall back to an anonymous session.
pub async fn session_middleware(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, PageError> {
    let user: Option<User> = match jar.get(SESSION_COOKIE) {
        Some(cookie) => {
            let found = state.store.lock()?.get_user_by_name(cookie.value()).ok();
            if found.is_none() {
                tracing::debug!("Session cookie names unknown user '{}'", cookie.value());
            }
            found
        }
        None => None,
    };

    request.extensions_mut().insert(Session(user));

    Ok(next.run(request).await)
}

/// Middleware that only lets admins through. Must run after `session_middleware`.
pub async fn require_admin(
    Extension(session): Extension<Session>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    match session.user() {
        Some(user) if user.is_admin() => Ok(next.run(request).await),
        Some(user) => {
            tracing::warn!("User '{}' denied access to {}", user.name(), request.uri().path());
            Err(StatusCode::UNAUTHORIZED)
        }
        None => Err(StatusCode::UNAUTHORIZED),
    }
}
