//! Error types
//!
//! Construction problems, conversion failures and slider option problems are kept
//! apart so a caller can tell a bad configuration from bad input.

use thiserror::Error;

/// Errors raised while building a formatter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("decimals must be between 0 and 7, got {decimals}")]
    DecimalsOutOfRange { decimals: u32 },
    #[error("decimal mark and thousands separator are both {0:?}")]
    AmbiguousSeparators(String),
    #[error("decimal mark must not be empty")]
    EmptyMark,
    #[error("unknown format preset: {0}")]
    UnknownPreset(String),
    #[error("invalid format options: {0}")]
    Parse(String),
    #[error("cannot read format options from {path}: {message}")]
    Io { path: String, message: String },
}

/// Errors raised by `to` and `from`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// The value (after the encoder or decoder ran) is NaN or infinite
    #[error("cannot convert non-finite value {value}")]
    NonFinite { value: f64 },
    /// The text does not hold a number once markers and separators are stripped
    #[error("unparseable formatted string {input:?}")]
    Unparseable { input: String },
}

/// Errors raised by the slider value model
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SliderError {
    #[error("invalid slider option '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl SliderError {
    pub(crate) fn invalid(option: &'static str, reason: impl Into<String>) -> Self {
        SliderError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}
