use crate::Category;
use thiserror::Error;

/// Error types for unit conversion
///
/// Every variant is a validation failure of the request itself. The same input
/// always produces the same variant with the same detail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// A unit string did not resolve to any known unit. Holds the string as given.
    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    /// Both units resolved, but to different categories
    #[error("Cannot convert {from} to {to} - different categories")]
    CategoryMismatch { from: Category, to: Category },

    /// A batch element did not parse as a finite number
    #[error("Invalid number at position {position}: '{token}'")]
    InvalidNumber { position: usize, token: String },

    /// A batch was requested with no values
    #[error("Batch conversion requires at least one value")]
    EmptyBatch,

    /// A batch exceeded the configured `max_batch_values`
    #[error("Batch of {actual} values exceeds the limit of {limit}")]
    BatchTooLarge { limit: usize, actual: usize },
}
