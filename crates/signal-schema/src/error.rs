//! Validation failure type

use thiserror::Error;

/// A payload did not conform to its declared schema
///
/// Carries the path of the offending field (`entities[0].strength` style,
/// empty string for the root) and the expected vs. actual shape, so the
/// caller can log exactly what the upstream model got wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent
    #[error("missing required field `{path}` (expected {expected})")]
    MissingField {
        /// Path of the missing field
        path: String,
        /// Expected shape of the field
        expected: String,
    },

    /// The value had the wrong type and no unambiguous coercion applied
    #[error("type mismatch at `{path}`: expected {expected}, found {actual}")]
    TypeMismatch {
        /// Path of the offending value
        path: String,
        /// Expected shape
        expected: String,
        /// What was actually found
        actual: String,
    },

    /// A number fell outside its declared bounds
    #[error("value out of range at `{path}`: expected {expected}, found {actual}")]
    OutOfRange {
        /// Path of the offending value
        path: String,
        /// Expected range
        expected: String,
        /// The offending value
        actual: String,
    },

    /// A string was not one of the declared enum variants
    #[error("invalid value at `{path}`: expected one of [{expected}], found {actual}")]
    InvalidVariant {
        /// Path of the offending value
        path: String,
        /// Comma-separated allowed variants
        expected: String,
        /// The offending value
        actual: String,
    },

    /// An array had fewer items than the schema requires
    #[error("too few items at `{path}`: expected at least {min}, found {len}")]
    TooFewItems {
        /// Path of the offending array
        path: String,
        /// Minimum item count
        min: usize,
        /// Actual item count
        len: usize,
    },

    /// A validated value could not be decoded into its typed form
    ///
    /// Reaching this indicates a schema that is out of sync with its target
    /// type, not bad model output.
    #[error("decode failed after validation: {0}")]
    Decode(String),
}

impl ValidationError {
    /// Field path the failure occurred at (empty for the root)
    pub fn path(&self) -> &str {
        match self {
            Self::MissingField { path, .. }
            | Self::TypeMismatch { path, .. }
            | Self::OutOfRange { path, .. }
            | Self::InvalidVariant { path, .. }
            | Self::TooFewItems { path, .. } => path,
            Self::Decode(_) => "",
        }
    }
}
