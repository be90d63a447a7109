use tracing::trace;
use winnow::Parser;

use crate::error::FormatError;
use crate::parser::combinators::{parse_marker, parse_numeric_literal, parse_unsigned_number};
use crate::types::Markers;

/// Parse formatted text back to a number
///
/// Leading markers are stripped in output order (`negative_before`, `prefix`,
/// `negative`), then the postfix, every thousands separator and the decimal mark.
/// What remains must be a complete decimal literal.
///
/// # Arguments
/// * `text` - The formatted text, with any `undo` hook already applied
/// * `markers` - Separators and affixes
///
/// # Returns
/// * `Result<f64, FormatError>` - The value, or `Unparseable` when no number remains
///
/// # Examples
/// ```
/// use slider_format::parser::parse_formatted;
/// use slider_format::types::Markers;
///
/// let markers = Markers {
///     mark: ",".to_string(),
///     thousand: ".".to_string(),
///     postfix: " €".to_string(),
///     negative: "-".to_string(),
///     ..Markers::default()
/// };
/// assert_eq!(parse_formatted("-1.234,50 €", &markers).unwrap(), -1234.5);
/// ```
pub fn parse_formatted(text: &str, markers: &Markers) -> Result<f64, FormatError> {
    let unparseable = || FormatError::Unparseable {
        input: text.to_string(),
    };

    // Markers may begin or end with whitespace, so only the body is trimmed
    let mut input = text;

    let mut leading = (
        parse_marker(&markers.negative_before),
        parse_marker(&markers.prefix),
        parse_marker(&markers.negative),
    );
    let (negative_before, _, negative) = leading.parse_next(&mut input).map_err(|e| {
        trace!(?e, text, "failed to strip leading markers");
        unparseable()
    })?;
    let is_negative = negative_before || negative;

    if !markers.postfix.is_empty() {
        if let Some(stripped) = input.strip_suffix(markers.postfix.as_str()) {
            input = stripped;
        }
    }

    let mut body = if markers.thousand.is_empty() {
        input.to_string()
    } else {
        input.replace(markers.thousand.as_str(), "")
    };
    if markers.mark != "." {
        body = body.replacen(markers.mark.as_str(), ".", 1);
    }
    let body = body.trim();

    // A stripped negative marker already carries the sign
    let mut remaining = body;
    let parsed = if is_negative {
        parse_unsigned_number
            .map(|value: f64| -value)
            .parse_next(&mut remaining)
    } else {
        parse_numeric_literal.parse_next(&mut remaining)
    };
    let value = parsed.map_err(|e| {
        trace!(?e, text, body, "no numeric literal in formatted text");
        unparseable()
    })?;
    if !remaining.is_empty() {
        trace!(text, remaining, "trailing characters after numeric literal");
        return Err(unparseable());
    }

    Ok(value)
}
