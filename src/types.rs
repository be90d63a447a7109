//! Type definitions for the number formatter
//!
//! This module defines the plain configuration records a formatter is built from,
//! and the hook signatures that can be attached to it in code.

use std::sync::Arc;

use serde::Deserialize;

/// Maximum number of decimals a formatter may render
pub const MAX_DECIMALS: u32 = 7;

/// Hook mapping a numeric value to another numeric value (encoder / decoder)
pub type NumberHook = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Hook applied to the finished output string, receiving the original input value as well
pub type EditHook = Arc<dyn Fn(&str, f64) -> String + Send + Sync>;

/// Hook applied to a raw string before it is parsed
pub type UndoHook = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Raw formatting options, as written in a configuration file or JSON record
///
/// Every field is optional. Defaults are resolved when a [`crate::FormatSpec`] is built
/// from these options, not here.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormatOptions {
    /// The number of decimals to include in the result, 0 to 7
    pub decimals: Option<u32>,
    /// The decimal separator
    pub mark: Option<String>,
    /// Separator inserted every three integer digits
    pub thousand: Option<String>,
    /// Text prepended to every value, after `negative_before`
    pub prefix: Option<String>,
    /// Text appended to every value
    #[serde(alias = "suffix")]
    pub postfix: Option<String>,
    /// Marker for negative values, inserted after the prefix
    pub negative: Option<String>,
    /// Marker for negative values, inserted before the prefix
    pub negative_before: Option<String>,
}

impl FormatOptions {
    /// Create options with the given number of decimals and nothing else set
    pub fn with_decimals(decimals: u32) -> Self {
        Self {
            decimals: Some(decimals),
            ..Self::default()
        }
    }

    /// Overlay `other` on top of `self`: fields set in `other` win
    pub fn merged_with(&self, other: &FormatOptions) -> FormatOptions {
        FormatOptions {
            decimals: other.decimals.or(self.decimals),
            mark: other.mark.clone().or_else(|| self.mark.clone()),
            thousand: other.thousand.clone().or_else(|| self.thousand.clone()),
            prefix: other.prefix.clone().or_else(|| self.prefix.clone()),
            postfix: other.postfix.clone().or_else(|| self.postfix.clone()),
            negative: other.negative.clone().or_else(|| self.negative.clone()),
            negative_before: other
                .negative_before
                .clone()
                .or_else(|| self.negative_before.clone()),
        }
    }
}

/// Fully resolved affix and separator settings used by both directions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Markers {
    /// Decimal separator
    pub mark: String,
    /// Thousands separator, empty for none
    pub thousand: String,
    /// Prefix for every value
    pub prefix: String,
    /// Postfix for every value
    pub postfix: String,
    /// Negative marker after the prefix
    pub negative: String,
    /// Negative marker before the prefix
    pub negative_before: String,
}
