use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;
use tracing::{info, instrument, warn};
use urlencoding::encode;

use crate::api::middleware::session::{removal_cookie, session_cookie, Session};
use crate::api::FlashQuery;
use crate::config::state::AppState;
use crate::database::{hash_password, verify_password, StoreError, User, UserRole};
use crate::utils::PageError;
use crate::views::pages;

// =============================================================================
// DTOs
// =============================================================================

#[derive(Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

fn redirect_with_error(path: &str, message: &str) -> Redirect {
    Redirect::to(&format!("{}?err={}", path, encode(message)))
}

// =============================================================================
// HANDLERS
// =============================================================================

pub async fn register_page(
    Extension(session): Extension<Session>,
    Query(flash): Query<FlashQuery>,
) -> Response {
    if session.user().is_some() {
        return Redirect::to("/").into_response();
    }
    Html(pages::register(flash.err.as_deref()).into_string()).into_response()
}

/// Creates a regular account and signs it in
#[instrument(skip_all, fields(username = %form.username))]
pub async fn register(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    jar: SignedCookieJar,
    Form(form): Form<Credentials>,
) -> Result<(SignedCookieJar, Redirect), PageError> {
    if session.user().is_some() {
        return Ok((jar, Redirect::to("/")));
    }

    let username: &str = form.username.trim();
    if username.is_empty() || form.password.is_empty() {
        return Ok((
            jar,
            redirect_with_error("/register", "username and password are required"),
        ));
    }

    let password_hash: String =
        hash_password(&form.password, state.environment.bcrypt_cost).await?;
    let user: User = User::with_hash(username, password_hash, UserRole::User, false);

    let added: Result<User, StoreError> = state.store.lock()?.add_user(user);
    match added {
        Ok(user) => {
            info!("Registered user '{}' with id {}", user.name(), user.id());
            let jar = jar.add(session_cookie(&state, user.name()));
            Ok((jar, Redirect::to("/")))
        }
        Err(err @ StoreError::DuplicateUser(_)) => {
            warn!("Registration rejected: {}", err);
            let message: String = format!("failed to add user: {}", err);
            Ok((jar, redirect_with_error("/register", &message)))
        }
        Err(err) => Err(err.into()),
    }
}

pub async fn login_page(
    Extension(session): Extension<Session>,
    Query(flash): Query<FlashQuery>,
) -> Response {
    if session.user().is_some() {
        return Redirect::to("/").into_response();
    }
    Html(pages::login(flash.err.as_deref()).into_string()).into_response()
}

#[instrument(skip_all, fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    jar: SignedCookieJar,
    Form(form): Form<Credentials>,
) -> Result<(SignedCookieJar, Redirect), PageError> {
    if session.user().is_some() {
        return Ok((jar, Redirect::to("/")));
    }

    // same normalization as register
    let user: Option<User> = state
        .store
        .lock()?
        .get_user_by_name(form.username.trim())
        .ok();

    let authenticated: bool = match &user {
        Some(user) => verify_password(&form.password, user.password_hash()).await?,
        None => false,
    };

    match user {
        Some(user) if authenticated => {
            info!("User '{}' logged in", user.name());
            let jar = jar.add(session_cookie(&state, user.name()));
            Ok((jar, Redirect::to("/")))
        }
        _ => {
            warn!("Failed login attempt");
            Ok((jar, redirect_with_error("/login", "incorrect username/password")))
        }
    }
}

pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Redirect) {
    (jar.remove(removal_cookie()), Redirect::to("/"))
}
