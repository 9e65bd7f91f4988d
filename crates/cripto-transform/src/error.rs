//! Transformation errors.

use cripto_types::{ColumnKind, CriptoError};
use thiserror::Error;

/// Errors that abort a transformation run.
///
/// `index` is the zero-based position of the offending record in the
/// fetched listing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A record lacks one of the allow-listed keys.
    #[error("record {index} is missing field `{field}`")]
    MissingField {
        /// Record position.
        index: usize,
        /// The missing column.
        field: &'static str,
    },

    /// A cell holds a JSON value of the wrong type for its column.
    #[error("record {index} has invalid `{field}`: expected {expected}, found {found}")]
    InvalidField {
        /// Record position.
        index: usize,
        /// The offending column.
        field: &'static str,
        /// Kind the column requires.
        expected: ColumnKind,
        /// The value found, rendered as JSON.
        found: String,
    },

    /// `last_updated` is not a recognizable date-time.
    #[error("record {index} has unparsable `last_updated`: {value:?}")]
    InvalidTimestamp {
        /// Record position.
        index: usize,
        /// The rejected string.
        value: String,
    },
}

impl From<TransformError> for CriptoError {
    fn from(err: TransformError) -> Self {
        Self::Transform(err.to_string())
    }
}
