// Start of file: src/main.rs

use tokio::net::TcpListener;

use tweeter::config::{environment::EnvironmentVariables, state::AppState};
use tweeter::core::{logging::init_tracing, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // set up logging
    init_tracing();

    let env: EnvironmentVariables = EnvironmentVariables::instance().clone();
    let state: AppState = AppState::new(env);
    state.seed_admin()?;

    let listener: TcpListener = server::setup_listener(&state.environment).await?;
    tracing::info!("Tweeter listening on: {}", listener.local_addr()?);

    axum::serve(listener, server::create_app(state))
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    Ok(())
}

// End of file: src/main.rs
