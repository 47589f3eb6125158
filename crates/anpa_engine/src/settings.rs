use serde::Deserialize;
use thiserror::Error;

use crate::formatter::ANPA_FORMAT_TYPE;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("failed to parse settings: {0}")]
    Parse(String),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// What happens when a number does not fit its four-digit field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum OverflowPolicy {
    /// Fail the message with an encoding error.
    #[default]
    Reject,
    /// Keep the last four digits.
    Wrap,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormatterSettings {
    /// Format type name this formatter answers to in `can_format`.
    pub format_type: String,
    pub overflow: OverflowPolicy,
    /// Reject markup with parse errors instead of repairing it.
    pub strict_markup: bool,
}

impl Default for FormatterSettings {
    fn default() -> Self {
        Self {
            format_type: ANPA_FORMAT_TYPE.to_string(),
            overflow: OverflowPolicy::Reject,
            strict_markup: false,
        }
    }
}

impl FormatterSettings {
    /// Parse settings from a RON document; omitted fields keep their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        let settings: Self =
            ron::from_str(text).map_err(|err| SettingsError::Parse(err.to_string()))?;
        if settings.format_type.trim().is_empty() {
            return Err(SettingsError::Invalid("format_type must not be empty".into()));
        }
        Ok(settings)
    }
}
