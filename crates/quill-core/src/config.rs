//! # Template Configuration
//!
//! Rendering options attached to a [`Template`](crate::Template) at construction.
//! A configuration is never mutated once the template owns it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Rendering options for a template.
///
/// # Example
/// ```rust
/// use quill_core::{NumberFormat, TemplateConfig};
///
/// let config = TemplateConfig::default()
///     .with_global_default("-")
///     .with_separator(" | ")
///     .with_number_format(NumberFormat::Cents);
///
/// assert_eq!(config.separator, " | ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Text used for a missing token that declares no local default.
    /// Default: empty string.
    pub global_default: String,

    /// Text placed between the elements of a list value.
    /// Default: `","`.
    pub separator: String,

    /// How numbers are written out.
    /// Default: [`NumberFormat::Plain`].
    pub number_format: NumberFormat,
}

/// Numeric rendering policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    /// Natural decimal representation, no grouping.
    #[default]
    Plain,

    /// Integers unchanged, everything else rounded half-to-even to a whole number.
    Round,

    /// Exactly two fractional digits, rounded half-to-even.
    Cents,

    /// Reserved. Formatting a number with it fails with `NotImplemented`.
    Percent,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            global_default: String::new(),
            separator: ",".to_string(),
            number_format: NumberFormat::Plain,
        }
    }
}

impl TemplateConfig {
    /// Create a configuration with all defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set the global default text.
    pub fn with_global_default(mut self, global_default: impl Into<String>) -> Self {
        self.global_default = global_default.into();
        self
    }

    /// Builder: Set the list separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder: Set the number format.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NumberFormat::Plain => "plain",
            NumberFormat::Round => "round",
            NumberFormat::Cents => "cents",
            NumberFormat::Percent => "percent",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TemplateConfig::default();
        assert_eq!(config.global_default, "");
        assert_eq!(config.separator, ",");
        assert_eq!(config.number_format, NumberFormat::Plain);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TemplateConfig::new()
            .with_global_default("n/a")
            .with_separator("; ")
            .with_number_format(NumberFormat::Round);

        assert_eq!(config.global_default, "n/a");
        assert_eq!(config.separator, "; ");
        assert_eq!(config.number_format, NumberFormat::Round);
    }

    #[test]
    fn test_partial_config_from_json() {
        let config: TemplateConfig =
            serde_json::from_str(r#"{"separator": " | ", "number_format": "cents"}"#).unwrap();

        assert_eq!(config.global_default, "");
        assert_eq!(config.separator, " | ");
        assert_eq!(config.number_format, NumberFormat::Cents);
    }
}
