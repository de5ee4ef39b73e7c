//! Field-level validation for catalog records

use serde::Serialize;
use serde_json::Value;

use super::ValidationError;

/// Maximum length for text columns (VARCHAR(255) in the schema)
pub const MAX_LABEL_LEN: usize = 255;

/// Validated free-form text field (name, type, origin)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    /// Create a label from an optional raw value.
    ///
    /// # Rules
    /// - Absent or null is `Missing`
    /// - Empty after trimming is `Empty`
    /// - Max 255 characters
    ///
    /// An accepted value is kept exactly as sent.
    ///
    /// # Example
    /// ```
    /// use astrocat_server::models::Label;
    ///
    /// assert_eq!(Label::new("nombre", Some(" Sirius ")).unwrap().as_str(), " Sirius ");
    /// assert!(Label::new("nombre", Some("   ")).is_err());
    /// assert!(Label::new("nombre", None).is_err());
    /// ```
    pub fn new(field: &'static str, raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = raw.ok_or(ValidationError::Missing { field })?;

        if raw.trim().is_empty() {
            return Err(ValidationError::Empty { field });
        }

        if raw.chars().count() > MAX_LABEL_LEN {
            return Err(ValidationError::TooLong {
                field,
                max: MAX_LABEL_LEN,
            });
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Stellar mass, canonically numeric.
///
/// Clients may send a JSON number or a numeric string; both are coerced to
/// `f64` and always serialized back as a number. Zero and negative masses are
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StellarMass(f64);

impl StellarMass {
    pub const FIELD: &'static str = "masa_estelar";

    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "debe ser un número finito",
            });
        }

        if value <= 0.0 {
            return Err(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "debe ser mayor que cero",
            });
        }

        Ok(Self(value))
    }

    /// Validate a raw JSON value from a request body.
    pub fn from_json(raw: Option<&Value>) -> Result<Self, ValidationError> {
        let value = match raw {
            None | Some(Value::Null) => {
                return Err(ValidationError::Missing { field: Self::FIELD })
            }
            Some(Value::Number(n)) => n.as_f64().ok_or(ValidationError::InvalidFormat {
                field: Self::FIELD,
                reason: "debe ser un número",
            })?,
            Some(Value::String(s)) => {
                let s = s.trim();
                if s.is_empty() {
                    return Err(ValidationError::Empty { field: Self::FIELD });
                }
                s.parse::<f64>().map_err(|_| ValidationError::InvalidFormat {
                    field: Self::FIELD,
                    reason: "debe ser un número",
                })?
            }
            Some(_) => {
                return Err(ValidationError::InvalidFormat {
                    field: Self::FIELD,
                    reason: "debe ser un número",
                })
            }
        };

        Self::new(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn label_keeps_surrounding_whitespace() {
        let label = Label::new("nombre", Some("  Vega ")).unwrap();
        assert_eq!(label.as_str(), "  Vega ");
    }

    #[test]
    fn label_rejects_missing_and_blank() {
        assert!(matches!(
            Label::new("nombre", None).unwrap_err(),
            ValidationError::Missing { field: "nombre" }
        ));
        assert!(matches!(
            Label::new("nombre", Some("")).unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            Label::new("nombre", Some(" \t ")).unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn label_max_length() {
        let ok = "a".repeat(MAX_LABEL_LEN);
        assert!(Label::new("nombre", Some(&ok)).is_ok());

        let too_long = "a".repeat(MAX_LABEL_LEN + 1);
        let err = Label::new("nombre", Some(&too_long)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 255, .. }));

        // Stored as sent, so padding counts against the column width
        let padded = format!(" {} ", "a".repeat(MAX_LABEL_LEN - 1));
        assert!(Label::new("nombre", Some(&padded)).is_err());
    }

    #[test]
    fn label_length_counts_chars_not_bytes() {
        let accented = "é".repeat(MAX_LABEL_LEN);
        assert!(Label::new("origen_galactico", Some(&accented)).is_ok());
    }

    #[test]
    fn mass_accepts_numbers_and_numeric_strings() {
        assert_eq!(StellarMass::from_json(Some(&json!(2.02))).unwrap().value(), 2.02);
        assert_eq!(StellarMass::from_json(Some(&json!(3))).unwrap().value(), 3.0);
        assert_eq!(StellarMass::from_json(Some(&json!("1.5"))).unwrap().value(), 1.5);
        assert_eq!(StellarMass::from_json(Some(&json!(" 1e30 "))).unwrap().value(), 1e30);
    }

    #[test]
    fn mass_rejects_missing_and_non_numeric() {
        assert!(matches!(
            StellarMass::from_json(None).unwrap_err(),
            ValidationError::Missing { .. }
        ));
        assert!(matches!(
            StellarMass::from_json(Some(&Value::Null)).unwrap_err(),
            ValidationError::Missing { .. }
        ));
        assert!(matches!(
            StellarMass::from_json(Some(&json!(""))).unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            StellarMass::from_json(Some(&json!("heavy"))).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            StellarMass::from_json(Some(&json!(true))).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
        assert!(matches!(
            StellarMass::from_json(Some(&json!("NaN"))).unwrap_err(),
            ValidationError::InvalidFormat { .. }
        ));
    }

    #[test]
    fn mass_must_be_positive() {
        let err = StellarMass::from_json(Some(&json!(0))).unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "masa_estelar",
                reason: "debe ser mayor que cero",
            }
        );
        assert!(StellarMass::new(-1.0).is_err());
    }

    #[test]
    fn mass_serializes_as_number() {
        let mass = StellarMass::new(2.02).unwrap();
        assert_eq!(serde_json::to_value(mass).unwrap(), json!(2.02));
    }
}
