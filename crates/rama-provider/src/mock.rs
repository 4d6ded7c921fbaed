//! Mock case provider.
//!
//! Returns the same placeholder case for every radicado, dated today. Used
//! until a real data source is wired in, and by tests.

use chrono::{Local, NaiveDate};
use rama_core::{CaseRecord, LastAction, Radicado};

use crate::error::ProviderError;
use crate::CaseProvider;

/// Provenance tag written into every mock record.
pub const MOCK_SOURCE: &str = "mock";

const COURT: &str = "JUZGADO 005 LABORAL DE PEREIRA";
const PARTIES: &str = "JUAN PEREZ vs. EMPRESA X S.A.S.";
const LAST_ACTION_NOTE: &str = "Auto que libra mandamiento de pago y decreta embargo";
const DOCUMENT_LINK: &str = "https://procesos.ramajudicial.gov.co/documentos/ejemplo.pdf";
const STATUS: &str = "ACTIVO";

/// Deterministic-shape mock provider.
///
/// The record's `fecha` is the local calendar date at lookup time unless a
/// fixed date was supplied with [`MockCaseProvider::with_fixed_date`].
#[derive(Debug, Clone, Default)]
pub struct MockCaseProvider {
    fixed_date: Option<NaiveDate>,
}

impl MockCaseProvider {
    /// Create a mock provider that stamps records with today's date.
    pub fn new() -> Self {
        Self { fixed_date: None }
    }

    /// Create a mock provider that always stamps records with `date`.
    pub fn with_fixed_date(date: NaiveDate) -> Self {
        Self {
            fixed_date: Some(date),
        }
    }

    fn today(&self) -> NaiveDate {
        self.fixed_date.unwrap_or_else(|| Local::now().date_naive())
    }
}

impl CaseProvider for MockCaseProvider {
    fn lookup(&self, radicado: &Radicado) -> Result<CaseRecord, ProviderError> {
        tracing::debug!(radicado = %radicado, "building mock case record");
        Ok(CaseRecord {
            radicado: radicado.clone(),
            court: COURT.to_string(),
            parties: PARTIES.to_string(),
            last_action: LastAction {
                date: self.today(),
                note: LAST_ACTION_NOTE.to_string(),
                document_link: DOCUMENT_LINK.to_string(),
            },
            status: STATUS.to_string(),
            source: MOCK_SOURCE.to_string(),
        })
    }

    fn provider_name(&self) -> &str {
        MOCK_SOURCE
    }
}
