// Library root for Tweeter, a small server-rendered micro-blogging app

pub mod api;
pub mod config;
pub mod core;
pub mod database;
pub mod utils;
pub mod views;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::create_app;
pub use crate::database::{AppStore, MemoryStore, SharedStore, StoreError};
