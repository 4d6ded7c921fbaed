//! Provider error types.

/// Errors from a case lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider cannot serve lookups (not reachable or not integrated).
    #[error("provider {provider} unavailable: {reason}")]
    Unavailable {
        /// Short name of the failing provider.
        provider: String,
        /// Human-readable description of the outage.
        reason: String,
    },

    /// The provider answered but the answer could not be turned into a record.
    #[error("provider {provider} returned an error: {reason}")]
    Upstream {
        /// Short name of the failing provider.
        provider: String,
        /// Human-readable description of the failure.
        reason: String,
    },
}
