//! Validated formatter configuration
//!
//! A [`FormatSpec`] is built once from [`FormatOptions`] and then reused for any
//! number of `to` / `from` calls. All option checks happen here.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ConfigError, FormatError};
use crate::types::{EditHook, FormatOptions, MAX_DECIMALS, Markers, NumberHook, UndoHook};
use crate::{formatter, parser, presets};

/// An immutable number formatter
///
/// # Examples
/// ```
/// use slider_format::{FormatOptions, FormatSpec};
///
/// let format = FormatSpec::new(FormatOptions {
///     decimals: Some(2),
///     thousand: Some(",".to_string()),
///     prefix: Some("$".to_string()),
///     ..FormatOptions::default()
/// })
/// .unwrap();
///
/// assert_eq!(format.to(1234.5).unwrap(), "$1,234.50");
/// assert_eq!(format.from("$1,234.50").unwrap(), 1234.5);
/// ```
#[derive(Clone)]
pub struct FormatSpec {
    pub(crate) decimals: Option<u32>,
    pub(crate) markers: Markers,
    pub(crate) encoder: Option<NumberHook>,
    pub(crate) decoder: Option<NumberHook>,
    pub(crate) edit: Option<EditHook>,
    pub(crate) undo: Option<UndoHook>,
}

impl FormatSpec {
    /// Build a formatter from raw options, resolving defaults and rejecting bad combinations
    ///
    /// # Arguments
    /// * `options` - The raw options
    ///
    /// # Returns
    /// * `Result<FormatSpec, ConfigError>` - The formatter, or the first configuration problem found
    pub fn new(options: FormatOptions) -> Result<Self, ConfigError> {
        if let Some(decimals) = options.decimals {
            if decimals > MAX_DECIMALS {
                return Err(ConfigError::DecimalsOutOfRange { decimals });
            }
        }

        let thousand = options.thousand.unwrap_or_default();
        let mark = match options.mark {
            Some(mark) if mark.is_empty() => return Err(ConfigError::EmptyMark),
            Some(mark) => mark,
            None if thousand == "." => ",".to_string(),
            None => ".".to_string(),
        };
        if mark == thousand {
            return Err(ConfigError::AmbiguousSeparators(mark));
        }

        let negative_before = options.negative_before.unwrap_or_default();
        let negative = match options.negative {
            Some(negative) => negative,
            None if negative_before.is_empty() => "-".to_string(),
            None => String::new(),
        };

        let markers = Markers {
            mark,
            thousand,
            prefix: options.prefix.unwrap_or_default(),
            postfix: options.postfix.unwrap_or_default(),
            negative,
            negative_before,
        };
        debug!(decimals = ?options.decimals, ?markers, "built number format");

        Ok(Self {
            decimals: options.decimals,
            markers,
            encoder: None,
            decoder: None,
            edit: None,
            undo: None,
        })
    }

    /// Build a formatter from one of the embedded presets
    pub fn preset(name: &str) -> Result<Self, ConfigError> {
        let options =
            presets::get_preset(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
        Self::new(options)
    }

    /// Build a formatter from a TOML document holding the option keys at the top level
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let options: FormatOptions =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;
        Self::new(options)
    }

    /// Build a formatter from a TOML file
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Attach a hook that transforms the value before it is formatted
    pub fn with_encoder(mut self, encoder: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.encoder = Some(Arc::new(encoder));
        self
    }

    /// Attach a hook that reverses the encoder after a string has been parsed
    pub fn with_decoder(mut self, decoder: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.decoder = Some(Arc::new(decoder));
        self
    }

    /// Attach a hook that rewrites the finished string; it also receives the original value
    pub fn with_edit(
        mut self,
        edit: impl Fn(&str, f64) -> String + Send + Sync + 'static,
    ) -> Self {
        self.edit = Some(Arc::new(edit));
        self
    }

    /// Attach a hook that reverses `edit` before a string is parsed
    pub fn with_undo(mut self, undo: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.undo = Some(Arc::new(undo));
        self
    }

    /// Number of decimals rendered, `None` when values are not rounded
    pub fn decimals(&self) -> Option<u32> {
        self.decimals
    }

    /// The resolved separators and affixes
    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Format a number
    ///
    /// Fails only when the value (after the encoder) is not finite.
    pub fn to(&self, value: f64) -> Result<String, FormatError> {
        let encoded = match &self.encoder {
            Some(encoder) => encoder(value),
            None => value,
        };
        let output = formatter::format_value(encoded, self.decimals, &self.markers)?;
        Ok(match &self.edit {
            Some(edit) => edit(&output, value),
            None => output,
        })
    }

    /// Parse a string produced by [`FormatSpec::to`] (or typed by a user) back to a number
    pub fn from(&self, text: &str) -> Result<f64, FormatError> {
        let undone;
        let text = match &self.undo {
            Some(undo) => {
                undone = undo(text);
                undone.as_str()
            }
            None => text,
        };
        let parsed = parser::parse_formatted(text, &self.markers)?;
        let decoded = match &self.decoder {
            Some(decoder) => decoder(parsed),
            None => parsed,
        };
        if !decoded.is_finite() {
            return Err(FormatError::NonFinite { value: decoded });
        }
        Ok(decoded)
    }
}

impl Default for FormatSpec {
    /// Two decimals, `.` as mark, `-` for negatives
    fn default() -> Self {
        Self {
            decimals: Some(2),
            markers: Markers {
                mark: ".".to_string(),
                negative: "-".to_string(),
                ..Markers::default()
            },
            encoder: None,
            decoder: None,
            edit: None,
            undo: None,
        }
    }
}

impl fmt::Debug for FormatSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatSpec")
            .field("decimals", &self.decimals)
            .field("markers", &self.markers)
            .field("encoder", &self.encoder.is_some())
            .field("decoder", &self.decoder.is_some())
            .field("edit", &self.edit.is_some())
            .field("undo", &self.undo.is_some())
            .finish()
    }
}

impl TryFrom<FormatOptions> for FormatSpec {
    type Error = ConfigError;

    fn try_from(options: FormatOptions) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}
