pub mod error;
pub mod format_spec;
pub mod formatter;
pub mod parser;
pub mod presets;
pub mod slider;
pub mod types;

// Main API
pub use error::{ConfigError, FormatError, SliderError};
pub use format_spec::FormatSpec;
pub use slider::{Formatter, Slider, SliderOptions};
pub use types::*;

#[cfg(test)]
mod tests;
