// Admin handlers: dashboard, verified badges and post moderation

use std::collections::HashMap;

use axum::{
    extract::State,
    response::{Html, Redirect},
    Extension, Form,
};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::api::middleware::Session;
use crate::config::state::AppState;
use crate::database::User;
use crate::utils::PageError;
use crate::views::pages;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum UserCmd {
    GrantBlue,
    RemoveBlue,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUser {
    pub id: u64,
    pub cmd: UserCmd,
}

#[derive(Debug, Deserialize)]
pub struct DeletePost {
    pub id: u64,
}

/// `require_admin` guarantees a signed-in admin
fn admin(session: &Session) -> Result<&User, PageError> {
    session
        .user()
        .ok_or_else(|| PageError::new(axum::http::StatusCode::UNAUTHORIZED, ""))
}

#[instrument(skip_all)]
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, PageError> {
    let current: &User = admin(&session)?;

    let (num_users, mut posts, authors) = {
        let store = state.store.lock()?;
        let authors: HashMap<u64, User> = store
            .get_users()?
            .into_iter()
            .map(|user| (user.id(), user))
            .collect();
        (store.num_users(), store.get_posts()?, authors)
    };
    posts.reverse();

    Ok(Html(pages::admin_index(current, num_users, &posts, &authors).into_string()))
}

#[instrument(skip_all)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, PageError> {
    let current: &User = admin(&session)?;
    let users: Vec<User> = state.store.lock()?.get_users()?;

    Ok(Html(pages::admin_users(current, &users).into_string()))
}

/// Grants or removes the verified badge
#[instrument(skip_all, fields(id = form.id, cmd = ?form.cmd))]
pub async fn update_user(
    State(state): State<AppState>,
    Form(form): Form<UpdateUser>,
) -> Result<Redirect, PageError> {
    let mut store = state.store.lock()?;
    let mut user: User = store
        .get_user_by_id(form.id)
        .map_err(|_| PageError::bad_request(format!("no user with id {}", form.id)))?;

    user.set_blue(form.cmd == UserCmd::GrantBlue);
    info!("Badge for '{}' set to {}", user.name(), user.blue());
    store.update_user(user)?;

    Ok(Redirect::to("/admin/users"))
}

#[instrument(skip_all, fields(id = form.id))]
pub async fn delete_post(
    State(state): State<AppState>,
    Form(form): Form<DeletePost>,
) -> Result<Redirect, PageError> {
    state
        .store
        .lock()?
        .delete_post_by_id(form.id)
        .map_err(|err| PageError::bad_request(err.to_string()))?;
    info!("Post {} deleted by moderation", form.id);

    Ok(Redirect::to("/admin"))
}
