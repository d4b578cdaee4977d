// Start of file: /src/config/environment.rs

// * Environment configuration with a singleton pattern
// * and zero-copy defaults.

use std::{borrow::Cow, collections::HashMap};
// * anyhow for convenient error handling
use anyhow::{bail, Context, Result};
// * once_cell for lazy static initialization
use once_cell::sync::Lazy;
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_ASSETS_DIR: &str = "assets";
const DEFAULT_ADMIN_USERNAME: &str = "admin";
const DEFAULT_PORT: u16 = 1447;
const DEFAULT_MAX_BODY_SIZE: usize = 65_536; // 64KB, forms only
const DEFAULT_TIMEOUT: u64 = 5; // 5 seconds
const MIN_COOKIE_SECRET_LEN: usize = 64;

// * A struct containing all environment variables used by the app
#[derive(Clone)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub assets_dir: Cow<'static, str>,
    pub admin_username: Cow<'static, str>,
    pub admin_password: String,
    pub cookie_secret: Option<String>,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
}

impl EnvironmentVariables {
    // * Loads environment variables from the process.
    // * Only reads .env if ENVIRONMENT != "production".
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        // * Collect all environment vars from the system and .env
        let vars: HashMap<String, String> = std::env::vars()
            .chain(dotenv::vars())
            .collect();

        Self::from_map(&vars)
    }

    // * Builds the configuration from an explicit key/value map,
    // * providing defaults if missing
    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);

        let cookie_secret: Option<String> = get_var("COOKIE_SECRET").map(str::to_owned);
        if let Some(secret) = &cookie_secret {
            if secret.len() < MIN_COOKIE_SECRET_LEN {
                bail!("COOKIE_SECRET must be at least {MIN_COOKIE_SECRET_LEN} bytes");
            }
        } else {
            warn!("Missing COOKIE_SECRET, sessions will not survive a restart");
        }

        let bcrypt_cost: u32 = get_var("BCRYPT_COST")
            .map(|s| s.parse().context("Invalid BCRYPT_COST"))
            .transpose()?
            .unwrap_or(bcrypt::DEFAULT_COST);
        if !(4..=31).contains(&bcrypt_cost) {
            bail!("BCRYPT_COST must be between 4 and 31, got {bcrypt_cost}");
        }

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    Cow::Borrowed(DEFAULT_ENVIRONMENT)
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_HOST)),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            assets_dir: get_var("ASSETS_DIR")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_ASSETS_DIR)),

            admin_username: get_var("ADMIN_USERNAME")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(Cow::Borrowed(DEFAULT_ADMIN_USERNAME)),

            admin_password: get_var("ADMIN_PASSWORD")
                .map(str::to_owned)
                .unwrap_or_else(|| {
                    let generated: String = uuid::Uuid::new_v4().simple().to_string();
                    warn!("Missing ADMIN_PASSWORD, generated one for this run: {generated}");
                    generated
                }),

            cookie_secret,

            cookie_secure: get_var("COOKIE_SECURE")
                .map(|s| s.parse().context("Invalid COOKIE_SECURE (expected true/false)"))
                .transpose()?
                .unwrap_or(false),

            bcrypt_cost,
        })
    }

    // * Returns a reference to the lazily-initialized environment configuration
    pub fn instance() -> &'static Self {
        static INSTANCE: Lazy<Result<EnvironmentVariables, anyhow::Error>> = Lazy::new(|| {
            let config: EnvironmentVariables = EnvironmentVariables::load()?;

            if cfg!(debug_assertions) {
                tracing::debug!("Loaded environment configuration: {:#?}", config);
            }

            Ok(config)
        });

        // ! Panics if loading fails
        INSTANCE.as_ref().expect("Failed to load environment configuration")
    }
}

// ! Secrets are redacted so the configuration can be logged
impl std::fmt::Debug for EnvironmentVariables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentVariables")
            .field("environment", &self.environment)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("max_request_body_size", &self.max_request_body_size)
            .field("default_timeout_seconds", &self.default_timeout_seconds)
            .field("assets_dir", &self.assets_dir)
            .field("admin_username", &self.admin_username)
            .field("admin_password", &"<redacted>")
            .field("cookie_secret", &self.cookie_secret.as_ref().map(|_| "<redacted>"))
            .field("cookie_secure", &self.cookie_secure)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .finish()
    }
}


// End of file: /src/config/environment.rs
