//! # Radicado Identifier
//!
//! The radicado is the filing number the judiciary assigns to a case. The
//! gateway only checks its length: no checksum, no charset constraint. Any
//! 23-character string is a valid [`Radicado`].
//!
//! Length is counted in characters (Unicode scalar values), not bytes, so a
//! value containing accented letters is measured the way a user would count
//! it.

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;

/// Required number of characters in a radicado.
pub const RADICADO_LENGTH: usize = 23;

/// A case-filing identifier with a validated length.
///
/// Deserialization goes through [`Radicado::new`], so a `Radicado` read from
/// JSON obeys the same invariant as one built in code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Radicado(String);

impl Radicado {
    /// Create a radicado, validating its length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingRadicado`] for an empty string and
    /// [`ValidationError::InvalidLength`] when the value is not exactly
    /// [`RADICADO_LENGTH`] characters long.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let s = value.into();
        if s.is_empty() {
            return Err(ValidationError::MissingRadicado);
        }
        let actual = s.chars().count();
        if actual != RADICADO_LENGTH {
            return Err(ValidationError::InvalidLength { actual });
        }
        Ok(Self(s))
    }

    /// Access the radicado string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Radicado {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Radicado {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Radicado> for String {
    fn from(value: Radicado) -> Self {
        value.0
    }
}

/// Query parameters accepted by the case lookup endpoint.
///
/// When `radicado` appears more than once the first occurrence wins and the
/// rest are ignored, as are unrelated parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct CaseQuery {
    /// Case-filing identifier, exactly 23 characters.
    #[cfg_attr(feature = "openapi", param(example = "12345678901234567890123"))]
    pub radicado: Option<String>,
}

impl<'de> Deserialize<'de> for CaseQuery {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CaseQueryVisitor;

        impl<'de> Visitor<'de> for CaseQueryVisitor {
            type Value = CaseQuery;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("case lookup query parameters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<CaseQuery, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut radicado: Option<String> = None;
                while let Some(key) = map.next_key::<String>()? {
                    if key == "radicado" && radicado.is_none() {
                        radicado = Some(map.next_value()?);
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(CaseQuery { radicado })
            }
        }

        deserializer.deserialize_map(CaseQueryVisitor)
    }
}

impl CaseQuery {
    /// Validate the query and return the radicado it carries.
    ///
    /// An absent parameter and an empty one are both reported as
    /// [`ValidationError::MissingRadicado`].
    pub fn validate(&self) -> Result<Radicado, ValidationError> {
        match self.radicado.as_deref() {
            None | Some("") => Err(ValidationError::MissingRadicado),
            Some(value) => Radicado::new(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "12345678901234567890123";

    #[test]
    fn accepts_exactly_23_digits() {
        let r = Radicado::new(VALID).unwrap();
        assert_eq!(r.as_str(), VALID);
        assert_eq!(r.to_string(), VALID);
    }

    #[test]
    fn accepts_non_numeric_content() {
        assert!(Radicado::new("ABCDEFGHIJKLMNOPQRSTUVW").is_ok());
        assert!(Radicado::new("66001-31-05-005-2024-001").is_err());
        assert!(Radicado::new("66001-31-05-005-2024-01").is_ok());
    }

    #[test]
    fn rejects_short_value() {
        assert_eq!(
            Radicado::new("123"),
            Err(ValidationError::InvalidLength { actual: 3 })
        );
    }

    #[test]
    fn rejects_long_value() {
        let long = format!("{VALID}4");
        assert_eq!(
            Radicado::new(long),
            Err(ValidationError::InvalidLength { actual: 24 })
        );
    }

    #[test]
    fn rejects_empty_as_missing() {
        assert_eq!(Radicado::new(""), Err(ValidationError::MissingRadicado));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 22 ASCII digits + one two-byte character.
        let value = format!("{}ñ", &VALID[..22]);
        assert_eq!(value.len(), 24);
        assert!(Radicado::new(value).is_ok());
    }

    #[test]
    fn serializes_as_plain_string() {
        let r = Radicado::new(VALID).unwrap();
        assert_eq!(serde_json::to_string(&r).unwrap(), format!("\"{VALID}\""));
    }

    #[test]
    fn deserialization_enforces_length() {
        let ok: Result<Radicado, _> = serde_json::from_str(&format!("\"{VALID}\""));
        assert!(ok.is_ok());
        let bad: Result<Radicado, _> = serde_json::from_str("\"123\"");
        assert!(bad.is_err());
    }

    #[test]
    fn query_without_radicado_is_missing() {
        let q = CaseQuery::default();
        assert_eq!(q.validate(), Err(ValidationError::MissingRadicado));
    }

    #[test]
    fn query_with_empty_radicado_is_missing() {
        let q = CaseQuery {
            radicado: Some(String::new()),
        };
        assert_eq!(q.validate(), Err(ValidationError::MissingRadicado));
    }

    #[test]
    fn query_keeps_first_of_repeated_radicado() {
        let json = format!(r#"{{"radicado":"{VALID}","radicado":"1"}}"#);
        let q: CaseQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(q.radicado.as_deref(), Some(VALID));
        assert_eq!(q.validate().unwrap().as_str(), VALID);

        let json = format!(r#"{{"radicado":"1","radicado":"{VALID}"}}"#);
        let q: CaseQuery = serde_json::from_str(&json).unwrap();
        assert_eq!(q.validate(), Err(ValidationError::InvalidLength { actual: 1 }));
    }

    #[test]
    fn query_ignores_unrelated_keys() {
        let q: CaseQuery = serde_json::from_str(r#"{"foo":"bar","radicado":"x"}"#).unwrap();
        assert_eq!(q.radicado.as_deref(), Some("x"));
        let q: CaseQuery = serde_json::from_str(r#"{"foo":"bar"}"#).unwrap();
        assert_eq!(q, CaseQuery::default());
    }

    #[test]
    fn query_with_valid_radicado() {
        let q = CaseQuery {
            radicado: Some(VALID.to_string()),
        };
        assert_eq!(q.validate().unwrap().as_str(), VALID);
    }
}
