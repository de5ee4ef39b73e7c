//! Validation error types

use std::fmt;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Field is absent or null
    Missing { field: &'static str },

    /// Field is present but empty (or only whitespace)
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Value has the wrong shape (e.g. mass that is not a positive number)
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Missing { field }
            | Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::InvalidFormat { field, .. } => field,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "Faltan datos requeridos: {}", field),
            Self::Empty { field } => {
                write!(f, "Faltan datos requeridos: {} está vacío", field)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} excede la longitud máxima de {} caracteres", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::Missing { field: "nombre" };
        assert_eq!(err.to_string(), "Faltan datos requeridos: nombre");

        let err = ValidationError::TooLong {
            field: "tipo_de_estrella",
            max: 255,
        };
        assert_eq!(
            err.to_string(),
            "tipo_de_estrella excede la longitud máxima de 255 caracteres"
        );
    }

    #[test]
    fn field_accessor() {
        let err = ValidationError::InvalidFormat {
            field: "masa_estelar",
            reason: "debe ser un número",
        };
        assert_eq!(err.field(), "masa_estelar");
    }
}
