//! Number to string direction
//!
//! This module turns a numeric value into display text using resolved [`Markers`].
//! The main entry point is the `format_value` function.

mod digits;

pub use digits::{group_thousands, to_fixed};

use crate::error::FormatError;
use crate::types::Markers;

/// Format a numeric value with the given decimal count and markers
///
/// Hooks are not applied here; the caller runs the encoder before and `edit` after.
///
/// # Arguments
/// * `value` - The (already encoded) value
/// * `decimals` - Number of decimals, `None` to render the value unrounded
/// * `markers` - Separators and affixes
///
/// # Returns
/// * `Result<String, FormatError>` - The formatted text, or `NonFinite` for NaN and infinities
///
/// # Examples
/// ```
/// use slider_format::formatter::format_value;
/// use slider_format::types::Markers;
///
/// let markers = Markers {
///     mark: ".".to_string(),
///     thousand: ",".to_string(),
///     negative: "-".to_string(),
///     ..Markers::default()
/// };
/// assert_eq!(format_value(-1234.567, Some(1), &markers).unwrap(), "-1,234.6");
/// ```
pub fn format_value(
    value: f64,
    decimals: Option<u32>,
    markers: &Markers,
) -> Result<String, FormatError> {
    if !value.is_finite() {
        return Err(FormatError::NonFinite { value });
    }

    let magnitude = value.abs();
    let digits = match decimals {
        Some(decimals) => to_fixed(magnitude, decimals),
        None => magnitude.to_string(),
    };
    // A value that rounds away to zero must not keep its sign ("-0.00")
    let is_negative = value < 0.0 && !digits::is_zero(&digits);

    let (integer_part, fraction_part) = match digits.split_once('.') {
        Some((integer_part, fraction_part)) => (integer_part, Some(fraction_part)),
        None => (digits.as_str(), None),
    };

    let mut result = String::with_capacity(digits.len() + 8);
    if is_negative {
        result.push_str(&markers.negative_before);
    }
    result.push_str(&markers.prefix);
    if is_negative {
        result.push_str(&markers.negative);
    }
    result.push_str(&group_thousands(integer_part, &markers.thousand));
    if let Some(fraction_part) = fraction_part {
        result.push_str(&markers.mark);
        result.push_str(fraction_part);
    }
    result.push_str(&markers.postfix);

    Ok(result)
}
