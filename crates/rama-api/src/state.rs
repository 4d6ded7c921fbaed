//! # Application State
//!
//! [`AppConfig`] is built once at process start from the environment and
//! is immutable afterwards. [`AppState`] pairs it with the active case
//! provider and is handed to route handlers through Axum's `State`
//! extractor. Handlers never read the environment.

use std::sync::Arc;

use rama_provider::{CaseProvider, ProviderSettings};
use thiserror::Error;

use crate::auth::SecretToken;

/// Default listen port.
pub const DEFAULT_PORT: u16 = 8080;

/// Configuration errors raised at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `API_KEY` is unset or empty. There is no fallback secret.
    #[error("API_KEY environment variable is required")]
    MissingApiKey,

    /// `PORT` is not a valid TCP port number.
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),

    /// Provider selection or external provider settings are invalid.
    #[error(transparent)]
    Provider(#[from] rama_provider::ConfigError),
}

/// Application configuration.
///
/// `Debug` output never includes the secret; see [`SecretToken`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (all interfaces).
    pub port: u16,
    /// Static bearer secret callers must present.
    pub api_key: SecretToken,
    /// Which case provider to run.
    pub provider: ProviderSettings,
}

impl AppConfig {
    /// Create a configuration with the default port and the mock provider.
    pub fn new(api_key: SecretToken) -> Self {
        Self {
            port: DEFAULT_PORT,
            api_key,
            provider: ProviderSettings::Mock,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `API_KEY` (required)
    /// - `PORT` (default: 8080)
    /// - `CASE_PROVIDER` (default: `mock`) and, for `external`, the
    ///   `PROVIDER_*` variables read by [`ProviderSettings`]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("API_KEY")
            .filter(|v| !v.is_empty())
            .map(SecretToken::new)
            .ok_or(ConfigError::MissingApiKey)?;

        let port = match lookup("PORT") {
            Some(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            _ => DEFAULT_PORT,
        };

        let provider = ProviderSettings::from_lookup(lookup)?;

        Ok(Self {
            port,
            api_key,
            provider,
        })
    }
}

/// Shared state for request handlers.
///
/// Cheap to clone: both fields are reference-counted and read-only.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub provider: Arc<dyn CaseProvider>,
}

impl AppState {
    /// Build state from configuration, instantiating the configured provider.
    pub fn new(config: AppConfig) -> Self {
        let provider = config.provider.build();
        Self::with_provider(config, provider)
    }

    /// Build state with an explicit provider, ignoring `config.provider`.
    pub fn with_provider(config: AppConfig, provider: Arc<dyn CaseProvider>) -> Self {
        Self {
            config: Arc::new(config),
            provider,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}
