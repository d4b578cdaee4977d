// Unified error responses: every 4xx/5xx leaves the server as an HTML page

use axum::{
    body::Body,
    http::{header, Request, Response},
    middleware::Next,
};
use tracing::{debug, warn};

use crate::api::middleware::Session;
use crate::utils::error_handler::ErrorMessage;
use crate::views::pages::error_page;

/// Middleware that renders every error response (handler errors, fallback
/// 404, 405, extractor rejections, guard 401s) as the standard error page,
/// with the navigation of the current session. Must run inside
/// `session_middleware`.
pub async fn error_page_wrapper(req: Request<Body>, next: Next) -> Response<Body> {
    let method = req.method().clone();
    let path: String = req.uri().path().to_owned();
    let session: Session = req.extensions().get::<Session>().cloned().unwrap_or_default();

    let response: Response<Body> = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    if status.is_server_error() {
        warn!("{} {} -> {}", method, path, status);
    } else {
        debug!("{} {} -> {}", method, path, status);
    }

    let (mut parts, _) = response.into_parts();
    let message: String = parts
        .extensions
        .remove::<ErrorMessage>()
        .map(|ErrorMessage(message)| message)
        .unwrap_or_default();

    // keep cookies, Allow and the like that the inner response set
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        header::HeaderValue::from_static("text/html; charset=utf-8"),
    );

    let page: String = error_page(session.user(), status, &message).into_string();
    Response::from_parts(parts, Body::from(page))
}
