//! Provider selection and external provider configuration.
//!
//! Everything is read once at startup. The `from_lookup` constructors take
//! the variable source as a closure: the API's `AppConfig::from_env` passes
//! `std::env::var`, tests pass a map.

use std::sync::Arc;

use url::Url;
use zeroize::Zeroizing;

use crate::{CaseProvider, ExternalCaseProvider, MockCaseProvider};

/// Default timeout for the external provider.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    MissingVar(&'static str),
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(&'static str, String),
    #[error("invalid value for {var}: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("unknown CASE_PROVIDER {0:?} (expected \"mock\" or \"external\")")]
    UnknownProvider(String),
}

/// Which provider implementation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProviderKind {
    #[default]
    Mock,
    External,
}

impl ProviderKind {
    /// Return the string representation of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::External => "external",
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "external" => Ok(Self::External),
            _ => Err(ConfigError::UnknownProvider(s.to_string())),
        }
    }
}

/// Connection settings for the external data provider.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct ProviderConfig {
    /// Base URL of the provider API.
    pub base_url: Url,
    /// Credential sent to the provider. Zeroized on drop.
    pub api_key: Zeroizing<String>,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ProviderConfig {
    /// Load configuration from a variable source (the process environment in
    /// production).
    ///
    /// Variables:
    /// - `PROVIDER_URL` (required)
    /// - `PROVIDER_API_KEY` (required)
    /// - `PROVIDER_TIMEOUT_SECS` (default: 30)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_url = non_empty(&lookup, "PROVIDER_URL")?;
        let base_url = Url::parse(&raw_url)
            .map_err(|e| ConfigError::InvalidUrl("PROVIDER_URL", e.to_string()))?;
        let api_key = Zeroizing::new(non_empty(&lookup, "PROVIDER_API_KEY")?);
        let timeout_secs = match lookup("PROVIDER_TIMEOUT_SECS") {
            Some(value) if !value.trim().is_empty() => {
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidNumber {
                        var: "PROVIDER_TIMEOUT_SECS",
                        value,
                    })?
            }
            _ => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            base_url,
            api_key,
            timeout_secs,
        })
    }
}

/// Resolved provider selection, ready to be turned into a trait object.
#[derive(Debug, Clone, Default)]
pub enum ProviderSettings {
    #[default]
    Mock,
    External(ProviderConfig),
}

impl ProviderSettings {
    /// Read `CASE_PROVIDER` and, when it is `external`, the `PROVIDER_*`
    /// variables from `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let kind = match lookup("CASE_PROVIDER") {
            Some(value) if !value.trim().is_empty() => value.parse()?,
            _ => ProviderKind::default(),
        };
        match kind {
            ProviderKind::Mock => Ok(Self::Mock),
            ProviderKind::External => Ok(Self::External(ProviderConfig::from_lookup(lookup)?)),
        }
    }

    /// The kind of provider these settings select.
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Mock => ProviderKind::Mock,
            Self::External(_) => ProviderKind::External,
        }
    }

    /// Instantiate the selected provider.
    pub fn build(&self) -> Arc<dyn CaseProvider> {
        match self {
            Self::Mock => Arc::new(MockCaseProvider::new()),
            Self::External(config) => Arc::new(ExternalCaseProvider::new(config.clone())),
        }
    }
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<String, ConfigError> {
    lookup(var)
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingVar(var))
}
