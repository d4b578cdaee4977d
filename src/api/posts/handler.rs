// Timeline and post handlers

use std::collections::HashMap;

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use serde::Deserialize;
use tracing::{info, instrument};
use urlencoding::encode;

use crate::api::middleware::Session;
use crate::api::FlashQuery;
use crate::config::state::AppState;
use crate::database::{Post, User};
use crate::utils::PageError;
use crate::views::pages;

#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub contents: String,
}

/// Renders every post, newest first
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
) -> Result<Html<String>, PageError> {
    let (mut posts, authors) = {
        let store = state.store.lock()?;
        let authors: HashMap<u64, User> = store
            .get_users()?
            .into_iter()
            .map(|user| (user.id(), user))
            .collect();
        (store.get_posts()?, authors)
    };
    posts.reverse();

    Ok(Html(pages::index(session.user(), &posts, &authors).into_string()))
}

pub async fn create_post_page(
    Extension(session): Extension<Session>,
    Query(flash): Query<FlashQuery>,
) -> Response {
    match session.user() {
        Some(user) => Html(pages::create_post(user, flash.err.as_deref()).into_string()).into_response(),
        None => Redirect::to("/login").into_response(),
    }
}

#[instrument(skip_all)]
pub async fn create_post(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    Form(form): Form<CreatePost>,
) -> Result<Redirect, PageError> {
    let Some(author) = session.user() else {
        return Ok(Redirect::to("/login"));
    };

    if form.contents.trim().is_empty() {
        return Ok(Redirect::to(&format!(
            "/create_post?err={}",
            encode("post cannot be empty")
        )));
    }

    let post: Post = state.store.lock()?.add_post(Post::new(author, &form.contents))?;
    info!("User '{}' created post {}", author.name(), post.id());

    Ok(Redirect::to("/"))
}
