#![deny(missing_docs)]

//! # rama-core: Domain Primitives for the Case Lookup Gateway
//!
//! Types shared by every other crate in the workspace. No I/O, no HTTP,
//! no async: only `serde`, `thiserror`, and `chrono` from the ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Validated newtype for the identifier.** A [`Radicado`] can only be
//!    obtained through [`Radicado::new`] or [`CaseQuery::validate`], so any
//!    function that accepts one is handed a 23-character value.
//!
//! 2. **Wire names live on the types.** [`CaseRecord`] and [`LastAction`]
//!    carry the Spanish JSON field names of the public contract via
//!    `#[serde(rename)]`; Rust code uses English field names.
//!
//! 3. **[`ValidationError`] messages are the client-facing messages.** The
//!    API layer forwards `to_string()` verbatim in 400 responses.

pub mod error;
pub mod radicado;
pub mod record;

pub use error::ValidationError;
pub use radicado::{CaseQuery, Radicado, RADICADO_LENGTH};
pub use record::{CaseRecord, LastAction};
