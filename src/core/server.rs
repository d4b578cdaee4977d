// Application server configuration and setup

use std::time::Duration;
use axum::{
    Router,
    middleware::{from_fn, from_fn_with_state},
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::Result;

use crate::api::{
    admin::admin_routes,
    auth::auth_routes,
    middleware::session_middleware,
    posts::post_routes,
    profile::profile_routes,
};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::utils::{
    error_handler::{handle_global_error, PageError},
    response_handler::error_page_wrapper,
};

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let env: &EnvironmentVariables = &state.environment;

    Router::new()
        .merge(post_routes())
        .merge(auth_routes())
        .merge(profile_routes())
        // Add new routes here
        .merge(admin_routes())
        .nest_service("/assets", ServeDir::new(&*env.assets_dir))
        .fallback(fallback_handler)
        // inside the session layer so error pages know who is signed in
        .layer(from_fn(error_page_wrapper))
        .layer(from_fn_with_state(state.clone(), session_middleware))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state)
}

async fn fallback_handler() -> PageError {
    PageError::not_found("page not found")
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = format!("{}:{}", env.host, env.port);
            TcpListener::bind(&addr).await?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
