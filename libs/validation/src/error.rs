//! Error types for CPF and plate validation.

use thiserror::Error;

/// The kind of a [`ValidationError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    /// The cleaned CPF did not have exactly 11 digits.
    InvalidLength,
    /// The CPF digits failed the check-digit equations.
    InvalidChecksum,
    /// The plate matched neither accepted shape.
    InvalidPlate,
}

/// Errors that can occur when validating a CPF or a vehicle plate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The cleaned CPF does not have exactly 11 digits.
    #[error("CPF must contain 11 digits (got {actual})")]
    InvalidLength { actual: usize },

    /// The CPF digits are all identical or fail the check-digit equations.
    #[error("invalid CPF: {value}")]
    InvalidChecksum { value: String },

    /// The plate matches neither the legacy nor the Mercosul shape.
    #[error("invalid plate: {value}")]
    InvalidPlate { value: String },
}

impl ValidationError {
    /// Returns the kind of this error.
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            ValidationError::InvalidLength { .. } => ValidationErrorKind::InvalidLength,
            ValidationError::InvalidChecksum { .. } => ValidationErrorKind::InvalidChecksum,
            ValidationError::InvalidPlate { .. } => ValidationErrorKind::InvalidPlate,
        }
    }

    /// Returns true if this error came from CPF validation.
    pub fn is_cpf_error(&self) -> bool {
        matches!(
            self,
            ValidationError::InvalidLength { .. } | ValidationError::InvalidChecksum { .. }
        )
    }

    /// Returns true if this error came from plate validation.
    pub fn is_plate_error(&self) -> bool {
        matches!(self, ValidationError::InvalidPlate { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err = ValidationError::InvalidLength { actual: 10 };
        assert_eq!(err.kind(), ValidationErrorKind::InvalidLength);
        assert!(err.is_cpf_error());
        assert!(!err.is_plate_error());

        let err = ValidationError::InvalidChecksum {
            value: "11144477736".to_string(),
        };
        assert_eq!(err.kind(), ValidationErrorKind::InvalidChecksum);
        assert!(err.is_cpf_error());

        let err = ValidationError::InvalidPlate {
            value: "AB1234".to_string(),
        };
        assert_eq!(err.kind(), ValidationErrorKind::InvalidPlate);
        assert!(err.is_plate_error());
        assert!(!err.is_cpf_error());
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            ValidationError::InvalidLength { actual: 10 }.to_string(),
            "CPF must contain 11 digits (got 10)"
        );
        assert_eq!(
            ValidationError::InvalidChecksum {
                value: "11144477736".to_string()
            }
            .to_string(),
            "invalid CPF: 11144477736"
        );
        assert_eq!(
            ValidationError::InvalidPlate {
                value: "AB1234".to_string()
            }
            .to_string(),
            "invalid plate: AB1234"
        );
    }
}
