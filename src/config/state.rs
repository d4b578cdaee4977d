// Application state shared by every handler

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use tracing::info;

use crate::config::environment::EnvironmentVariables;
use crate::database::{MemoryStore, SharedStore, StoreError, User, UserRole};

#[derive(Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub store: SharedStore,
    pub cookie_key: Key,
}

impl AppState {
    /// Creates a new AppState backed by an empty in-memory store
    pub fn new(environment: EnvironmentVariables) -> Self {
        let cookie_key: Key = match &environment.cookie_secret {
            Some(secret) => Key::from(secret.as_bytes()),
            None => Key::generate(),
        };

        Self {
            environment: Arc::new(environment),
            store: SharedStore::new(MemoryStore::new()),
            cookie_key,
        }
    }

    /// Inserts the configured admin account (verified, role Admin)
    pub fn seed_admin(&self) -> Result<User, StoreError> {
        let env: &EnvironmentVariables = &self.environment;
        let admin: User = User::new(
            &env.admin_username,
            &env.admin_password,
            UserRole::Admin,
            true,
            env.bcrypt_cost,
        )?;

        let admin: User = self.store.lock()?.add_user(admin)?;
        info!("Seeded admin account '{}' with id {}", admin.name(), admin.id());
        Ok(admin)
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("environment", &self.environment)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
