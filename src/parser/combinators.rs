use winnow::ascii::digit1;
use winnow::combinator::{alt, opt, preceded};
use winnow::token::literal;
use winnow::{ModalResult, Parser};

/// Consume `marker` if the input starts with it
///
/// Returns whether the marker was present. An empty marker never matches.
pub fn parse_marker<'i>(marker: &str) -> impl FnMut(&mut &'i str) -> ModalResult<bool> + '_ {
    move |input: &mut &'i str| {
        if marker.is_empty() {
            return Ok(false);
        }
        let matched: ModalResult<Option<&'i str>> = opt(literal(marker)).parse_next(input);
        Ok(matched?.is_some())
    }
}

/// Parse the unsigned digits of a decimal literal: `12`, `12.`, `12.5` or `.5`
pub fn parse_unsigned_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    alt((
        (digit1, opt(('.', opt(digit1)))).take(),
        preceded('.', digit1).take(),
    ))
    .parse_next(input)
}

/// Parse a decimal literal without a sign
pub fn parse_unsigned_number(input: &mut &str) -> ModalResult<f64> {
    parse_unsigned_literal
        .try_map(|text: &str| text.parse::<f64>())
        .parse_next(input)
}

/// Parse a decimal literal with an optional leading minus sign
pub fn parse_numeric_literal(input: &mut &str) -> ModalResult<f64> {
    (opt('-'), parse_unsigned_literal)
        .take()
        .try_map(|text: &str| text.parse::<f64>())
        .parse_next(input)
}
