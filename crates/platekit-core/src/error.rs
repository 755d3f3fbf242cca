//! Error handling for PlateKit
//!
//! Provides the error types shared by every layer of the application:
//! - Input errors (missing or out-of-range fields, unknown grades)
//! - Decode errors (malformed shared-state parameter)
//! - Calculation defects (results that violate the layout invariants)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Input validation error type
///
/// Raised when a vessel or plate record cannot be laid out. Surfaced to the
/// user as an inline message that blocks navigation to the results.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvalidInputError {
    /// One or more required form fields are empty or zero
    #[error("All fields must be filled out.")]
    MissingFields {
        /// Names of the offending fields, in form order.
        fields: Vec<String>,
    },

    /// A numeric field is zero or negative
    #[error("{field} must be greater than zero (got {value})")]
    NonPositive {
        /// The field name.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A numeric field is NaN or infinite
    #[error("{field} must be a finite number")]
    NotFinite {
        /// The field name.
        field: String,
    },

    /// The material has no density entry
    #[error("Unknown material: {material}")]
    UnknownMaterial {
        /// The material name that failed to resolve.
        material: String,
    },

    /// The stock plate cannot hold a single shell course
    #[error(
        "Plate length {plate_length} mm is shorter than one developed length ({developed_length} mm)"
    )]
    PlateTooShort {
        /// The stock plate length in millimetres.
        plate_length: f64,
        /// The developed length of one course in millimetres.
        developed_length: f64,
    },
}

/// Shared-state decode error type
///
/// Raised when the results location does not carry a usable input record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The `inputs` parameter is absent or empty
    #[error("Missing '{param}' parameter")]
    MissingParameter {
        /// The expected parameter name.
        param: String,
    },

    /// The parameter value is not valid percent-encoded UTF-8
    #[error("Invalid parameter encoding: {reason}")]
    InvalidEncoding {
        /// Why the value could not be decoded.
        reason: String,
    },

    /// The decoded text is not a valid input record
    #[error("Invalid input record: {reason}")]
    InvalidRecord {
        /// The parser's description of the problem.
        reason: String,
    },
}

/// Main error type for PlateKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Input validation error
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// Shared-state decode error
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A derived quantity broke a layout invariant
    #[error("Calculation defect: {message}")]
    CalculationDefect {
        /// Description of the violated invariant.
        message: String,
    },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Create a calculation defect error
    pub fn defect(msg: impl Into<String>) -> Self {
        Error::CalculationDefect {
            message: msg.into(),
        }
    }

    /// Check if this is an input validation error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }

    /// Check if this is a decode error
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Decode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = InvalidInputError::MissingFields {
            fields: vec!["internalDia".to_string()],
        };
        assert_eq!(err.to_string(), "All fields must be filled out.");
    }

    #[test]
    fn test_invalid_input_display() {
        let err = InvalidInputError::NonPositive {
            field: "plateWidth".to_string(),
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "plateWidth must be greater than zero (got -5)"
        );

        let err = InvalidInputError::UnknownMaterial {
            material: "UNKNOWN".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown material: UNKNOWN");
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::MissingParameter {
            param: "inputs".to_string(),
        };
        assert_eq!(err.to_string(), "Missing 'inputs' parameter");
    }

    #[test]
    fn test_error_conversion() {
        let err: Error = InvalidInputError::UnknownMaterial {
            material: "X".to_string(),
        }
        .into();
        assert!(err.is_invalid_input());
        assert!(!err.is_decode_error());

        let err: Error = DecodeError::InvalidRecord {
            reason: "eof".to_string(),
        }
        .into();
        assert!(err.is_decode_error());
        assert_eq!(err.to_string(), "Invalid input record: eof");
    }

    #[test]
    fn test_defect_display() {
        let err = Error::defect("negative offcut volume");
        assert_eq!(
            err.to_string(),
            "Calculation defect: negative offcut volume"
        );
    }
}
