//! Built-in format presets
//!
//! Presets are named option records loaded from an embedded TOML table. Every
//! preset is layered over the `base` entry.

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::warn;

use crate::error::ConfigError;
use crate::types::FormatOptions;

type Result<T> = std::result::Result<T, ConfigError>;

/// Holds the parsed preset table
struct PresetRegistry {
    presets: HashMap<String, FormatOptions>,
}

// Global singleton for the embedded presets
static PRESET_REGISTRY: OnceLock<PresetRegistry> = OnceLock::new();

impl PresetRegistry {
    /// Create a registry from the embedded preset table
    fn new() -> Self {
        let mut registry = Self {
            presets: HashMap::new(),
        };

        if let Err(e) = registry.load(include_str!("presets/formats.toml")) {
            warn!(error = %e, "failed to load embedded format presets");
        }

        registry
    }

    /// Parse a preset table, layering every entry over `base`
    fn load(&mut self, toml_str: &str) -> Result<()> {
        let mut table: HashMap<String, FormatOptions> =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let base = table.remove("base").unwrap_or_default();
        for (name, options) in table {
            self.presets.insert(name, base.merged_with(&options));
        }

        Ok(())
    }

    fn get() -> &'static Self {
        PRESET_REGISTRY.get_or_init(Self::new)
    }
}

/// Get the options of a preset by name (e.g., "usd", "percent")
pub fn get_preset(name: &str) -> Option<FormatOptions> {
    PresetRegistry::get().presets.get(name).cloned()
}

/// List all available preset names, sorted
pub fn list_presets() -> Vec<String> {
    let mut names: Vec<String> = PresetRegistry::get().presets.keys().cloned().collect();
    names.sort();
    names
}
