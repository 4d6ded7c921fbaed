//! External case provider.
//!
//! Placeholder for a third-party judicial data source (a commercial API or
//! a scraper service). It carries the connection settings the real client
//! will need but performs no network I/O: every lookup reports the provider
//! as unavailable, which the API layer turns into a 500 response.
//!
//! A real implementation replaces the body of [`ExternalCaseProvider::lookup`]
//! and must choose its own timeout and retry policy.

use rama_core::{CaseRecord, Radicado};

use crate::config::ProviderConfig;
use crate::error::ProviderError;
use crate::CaseProvider;

const PROVIDER_NAME: &str = "external";

/// External provider seam.
#[derive(Debug, Clone)]
pub struct ExternalCaseProvider {
    config: ProviderConfig,
}

impl ExternalCaseProvider {
    /// Create an external provider from configuration.
    pub fn new(config: ProviderConfig) -> Self {
        Self { config }
    }
}

impl CaseProvider for ExternalCaseProvider {
    fn lookup(&self, radicado: &Radicado) -> Result<CaseRecord, ProviderError> {
        tracing::warn!(
            radicado = %radicado,
            base_url = %self.config.base_url,
            timeout_secs = self.config.timeout_secs,
            "external provider lookup requested but no integration is available"
        );
        Err(ProviderError::Unavailable {
            provider: PROVIDER_NAME.to_string(),
            reason: format!(
                "no integration implemented for {} (timeout {}s)",
                self.config.base_url, self.config.timeout_secs
            ),
        })
    }

    fn provider_name(&self) -> &str {
        PROVIDER_NAME
    }
}
