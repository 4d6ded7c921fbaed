//! # Case Records
//!
//! The value returned for a successful lookup. Records have no identity
//! beyond their fields; a new one is built for every request and dropped
//! after serialization.
//!
//! JSON field names are part of the public contract and are in Spanish:
//!
//! ```json
//! {
//!   "radicado": "12345678901234567890123",
//!   "juzgado": "...",
//!   "sujetos_procesales": "...",
//!   "ultima_actuacion": { "fecha": "2026-10-19", "anotacion": "...", "link_documento": "..." },
//!   "estado_actual": "ACTIVO",
//!   "fuente": "mock"
//! }
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::radicado::Radicado;

/// A judicial case as reported by a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CaseRecord {
    /// The identifier that was looked up, echoed back unchanged.
    #[cfg_attr(
        feature = "openapi",
        schema(value_type = String, example = "12345678901234567890123")
    )]
    pub radicado: Radicado,
    /// Court handling the case.
    #[serde(rename = "juzgado")]
    pub court: String,
    /// Opposing parties, free text.
    #[serde(rename = "sujetos_procesales")]
    pub parties: String,
    /// Most recent docket entry.
    #[serde(rename = "ultima_actuacion")]
    pub last_action: LastAction,
    /// Current state label (e.g. `ACTIVO`).
    #[serde(rename = "estado_actual")]
    pub status: String,
    /// Provenance tag naming the provider that produced the record.
    #[serde(rename = "fuente")]
    pub source: String,
}

/// Most recent docket entry of a case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LastAction {
    /// Calendar date of the entry, serialized as `YYYY-MM-DD`.
    #[serde(rename = "fecha")]
    pub date: NaiveDate,
    /// Text of the entry.
    #[serde(rename = "anotacion")]
    pub note: String,
    /// Link to the associated document.
    #[serde(rename = "link_documento")]
    pub document_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CaseRecord {
        CaseRecord {
            radicado: Radicado::new("12345678901234567890123").unwrap(),
            court: "JUZGADO 001 CIVIL".to_string(),
            parties: "A vs. B".to_string(),
            last_action: LastAction {
                date: NaiveDate::from_ymd_opt(2026, 10, 19).unwrap(),
                note: "Auto admisorio".to_string(),
                document_link: "https://example.test/doc.pdf".to_string(),
            },
            status: "ACTIVO".to_string(),
            source: "mock".to_string(),
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let json = serde_json::to_value(sample()).unwrap();
        let obj = json.as_object().unwrap();
        let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            [
                "estado_actual",
                "fuente",
                "juzgado",
                "radicado",
                "sujetos_procesales",
                "ultima_actuacion"
            ]
        );
        assert_eq!(json["ultima_actuacion"]["fecha"], "2026-10-19");
        assert_eq!(json["ultima_actuacion"]["anotacion"], "Auto admisorio");
        assert_eq!(
            json["ultima_actuacion"]["link_documento"],
            "https://example.test/doc.pdf"
        );
    }

    #[test]
    fn deserializes_from_wire_format() {
        let json = serde_json::to_string(&sample()).unwrap();
        let back: CaseRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sample());
    }
}
