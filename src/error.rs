//! Error types for editor configuration.

use thiserror::Error;

/// Errors raised while building configuration from mount attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A recognized attribute carried a value that failed validation.
    #[error("invalid value {value:?} for attribute `{attribute}`: {reason}")]
    InvalidAttribute {
        attribute: String,
        value: String,
        reason: &'static str,
    },
}
