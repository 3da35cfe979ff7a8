//! Error types

mod config;
mod option;

pub use config::*;
pub use option::*;

/// Errors surfaced by picklist operations.
///
/// Precondition failures on transitions are not errors; they come back as
/// empty transitions. Only wiring mistakes end up here.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An extractor could not derive a label or value from an option.
    #[error(transparent)]
    InvalidOption(#[from] InvalidOptionError),

    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
