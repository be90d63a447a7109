//! String to number direction
//!
//! This module strips markers and separators from formatted text and reads the
//! remaining numeric literal. The main entry point is the `parse_formatted` function.

mod combinators;
mod formatted;

pub use formatted::parse_formatted;
