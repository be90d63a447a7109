use crate::error::FormatError;
use crate::format_spec::FormatSpec;

/// Two-way conversion between slider values and display text
///
/// Any formatter can be handed to a slider; [`FormatSpec`] is the stock one.
pub trait Formatter: Send + Sync {
    /// Format a value for display
    fn to(&self, value: f64) -> Result<String, FormatError>;

    /// Read a value back from display text
    fn from(&self, text: &str) -> Result<f64, FormatError>;
}

impl Formatter for FormatSpec {
    fn to(&self, value: f64) -> Result<String, FormatError> {
        FormatSpec::to(self, value)
    }

    fn from(&self, text: &str) -> Result<f64, FormatError> {
        FormatSpec::from(self, text)
    }
}
