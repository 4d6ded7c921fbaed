//! # rama-provider: Case Lookup Providers
//!
//! A provider turns a validated [`Radicado`] into a [`CaseRecord`]. The API
//! layer holds one behind an `Arc<dyn CaseProvider>` and never knows which
//! implementation is active.
//!
//! ## Implementations
//!
//! | Type                     | `provider_name()` | Behavior                                 |
//! |--------------------------|-------------------|------------------------------------------|
//! | [`MockCaseProvider`]     | `mock`            | Fixed placeholder record, today's date.  |
//! | [`ExternalCaseProvider`] | `external`        | Configured endpoint, no integration yet: every lookup fails with [`ProviderError::Unavailable`]. |
//!
//! ## Selection
//!
//! [`ProviderSettings::from_lookup`] reads `CASE_PROVIDER` (`mock` by default)
//! and, for `external`, the `PROVIDER_*` variables. [`ProviderSettings::build`]
//! returns the trait object.

pub mod config;
pub mod error;
pub mod external;
pub mod mock;

pub use config::{ConfigError, ProviderConfig, ProviderKind, ProviderSettings};
pub use error::ProviderError;
pub use external::ExternalCaseProvider;
pub use mock::MockCaseProvider;

use rama_core::{CaseRecord, Radicado};

/// Capability for looking up a case by its radicado.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// request handlers behind an `Arc`. The trait is object-safe to support
/// runtime provider selection (mock vs. external).
pub trait CaseProvider: Send + Sync {
    /// Return the case record for `radicado`.
    fn lookup(&self, radicado: &Radicado) -> Result<CaseRecord, ProviderError>;

    /// Return the short name of this implementation (e.g. `"mock"`).
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const VALID: &str = "12345678901234567890123";

    #[test]
    fn provider_trait_is_object_safe() {
        let provider: Box<dyn CaseProvider> = Box::new(MockCaseProvider::new());
        let radicado = Radicado::new(VALID).unwrap();
        let record = provider.lookup(&radicado).expect("mock lookup");
        assert_eq!(record.radicado, radicado);
        assert_eq!(provider.provider_name(), "mock");
    }

    #[test]
    fn provider_shared_across_threads() {
        let provider: Arc<dyn CaseProvider> = Arc::new(MockCaseProvider::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let provider = Arc::clone(&provider);
                std::thread::spawn(move || {
                    let radicado = Radicado::new(VALID).unwrap();
                    provider.lookup(&radicado).map(|r| r.source)
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), "mock");
        }
    }
}
