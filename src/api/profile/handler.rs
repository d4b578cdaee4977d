// Profile page and account settings

use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use tracing::{info, instrument, warn};
use urlencoding::encode;

use crate::api::middleware::Session;
use crate::api::FlashQuery;
use crate::config::state::AppState;
use crate::database::{hash_password, verify_password, Post, StoreError, User};
use crate::utils::PageError;
use crate::views::pages;

#[derive(Deserialize)]
pub struct SettingsForm {
    #[serde(default)]
    pub currpass: String,
    #[serde(default)]
    pub newpass: String,
    #[serde(default)]
    pub bio: String,
}

/// Public profile: name, badge, bio and that user's posts
#[instrument(skip_all)]
pub async fn profile(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    user_id: Result<Path<u64>, PathRejection>,
) -> Result<Html<String>, PageError> {
    let Path(user_id) = user_id.map_err(|rejection| PageError::bad_request(rejection.body_text()))?;

    let (user, mut posts) = {
        let store = state.store.lock()?;
        let user: User = store
            .get_user_by_id(user_id)
            .map_err(|_| PageError::not_found(format!("no user with id {}", user_id)))?;
        let posts: Vec<Post> = store
            .get_posts()?
            .into_iter()
            .filter(|post| post.author_id() == user_id)
            .collect();
        (user, posts)
    };
    posts.reverse();

    Ok(Html(pages::profile(session.user(), &user, &posts).into_string()))
}

pub async fn settings_page(
    Extension(session): Extension<Session>,
    Query(flash): Query<FlashQuery>,
) -> Response {
    match session.user() {
        Some(user) => Html(
            pages::settings(user, flash.err.as_deref(), flash.success.as_deref()).into_string(),
        )
        .into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

/// Saves the bio and, when `newpass` is filled in, rotates the password.
/// bcrypt runs without the store lock; the record is re-read under the lock
/// so only the bio and hash change and concurrent admin edits survive.
#[instrument(skip_all)]
pub async fn update_settings(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<SettingsForm>,
) -> Result<Redirect, PageError> {
    let Some(current) = session.user() else {
        return Ok(Redirect::to("/login"));
    };

    let new_hash: Option<String> = if form.newpass.is_empty() {
        None
    } else {
        let stored_hash: String = state
            .store
            .lock()?
            .get_user_by_name(current.name())?
            .password_hash()
            .to_owned();

        if !verify_password(&form.currpass, &stored_hash).await? {
            let err = StoreError::IncorrectPassword;
            warn!("User '{}' failed password change: {}", current.name(), err);
            return Ok(Redirect::to(&format!(
                "/settings?err={}",
                encode(&err.to_string())
            )));
        }
        Some(hash_password(&form.newpass, state.environment.bcrypt_cost).await?)
    };

    {
        let mut store = state.store.lock()?;
        let mut user: User = store.get_user_by_name(current.name())?;
        user.set_bio(&form.bio);
        if let Some(hash) = new_hash {
            user.set_password_hash(hash);
            info!("User '{}' changed their password", user.name());
        }
        store.update_user(user)?;
    }

    Ok(Redirect::to(&format!(
        "/settings?success={}",
        encode("Successfully updated settings")
    )))
}
