//! Option extraction errors

/// Raised when an option does not have the shape its extractors expect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidOptionError {
    /// The field read by the extractor is absent.
    #[error("Option field '{field}' not found")]
    Missing { field: String },

    /// The field exists but is not a string.
    #[error("Option field '{field}' must be a string, got {actual}")]
    NotAString { field: String, actual: &'static str },

    /// A caller-supplied extractor rejected the option.
    #[error("Invalid option: {0}")]
    Custom(String),
}

impl InvalidOptionError {
    /// Creates a new missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a new non-string field error.
    pub fn not_a_string(field: impl Into<String>, actual: &'static str) -> Self {
        Self::NotAString {
            field: field.into(),
            actual,
        }
    }

    /// Creates an error for a custom extractor.
    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
