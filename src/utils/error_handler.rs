// Error types and global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
// Axum uses http_body_util for length-limiting
use http_body_util::LengthLimitError;
use tracing::error;

use crate::database::StoreError;
use crate::views::pages::error_page;

/// Message of a `PageError`, kept in the response extensions so the
/// response wrapper can re-render the page for the signed-in user
#[derive(Debug, Clone)]
pub struct ErrorMessage(pub String);

/// Handler error rendered as an HTML error page
#[derive(Debug)]
pub struct PageError {
    pub status: StatusCode,
    pub message: String,
}

impl PageError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }
}

impl From<StoreError> for PageError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound | StoreError::PostNotFound(_) => {
                Self::not_found(err.to_string())
            }
            StoreError::DuplicateUser(_) | StoreError::IncorrectPassword => {
                Self::bad_request(err.to_string())
            }
            StoreError::PasswordHash(_) | StoreError::PasswordWorker(_) | StoreError::LockPoisoned => {
                error!("Store failure: {}", err);
                // details stay in the log
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "")
            }
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let mut response: Response =
            (self.status, Html(error_page(None, self.status, &self.message).into_string()))
                .into_response();
        response.extensions_mut().insert(ErrorMessage(self.message));
        response
    }
}

/// Maps various layer error types to appropriate HTTP responses
pub async fn handle_global_error(err: BoxError) -> PageError {
    // 413 if the body was too large
    if find_cause::<LengthLimitError>(&*err).is_some() {
        return PageError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large");
    }

    // 408 if the request took too long
    if err.is::<Elapsed>() {
        return PageError::new(StatusCode::REQUEST_TIMEOUT, "Request timed out");
    }

    // Otherwise, 500
    error!("Unhandled layer error: {}", err);
    PageError::new(StatusCode::INTERNAL_SERVER_ERROR, "")
}

/// Helper function to find specific error type in error chain
pub fn find_cause<'a, T: Error + 'static>(err: &'a (dyn Error + 'static)) -> Option<&'a T> {
    let mut source: Option<&(dyn Error + 'static)> = Some(err);

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
