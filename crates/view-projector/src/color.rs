//! Color tokens
//!
//! Lookups take any label, not just the typed enums, and never fail: an
//! unrecognised label maps to [`ColorToken::Neutral`] so a widened
//! enumeration can never blank the view.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorToken {
    Green,
    Yellow,
    Red,
    Neutral,
}

impl ColorToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::Green => "green",
            ColorToken::Yellow => "yellow",
            ColorToken::Red => "red",
            ColorToken::Neutral => "neutral",
        }
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// active -> green, inactive -> red, warning -> yellow.
pub fn status_color_of(status: impl AsRef<str>) -> ColorToken {
    match status.as_ref() {
        "active" => ColorToken::Green,
        "inactive" => ColorToken::Red,
        "warning" => ColorToken::Yellow,
        _ => ColorToken::Neutral,
    }
}

/// high -> red, medium -> yellow, low -> green.
pub fn severity_color_of(severity: impl AsRef<str>) -> ColorToken {
    match severity.as_ref() {
        "high" => ColorToken::Red,
        "medium" => ColorToken::Yellow,
        "low" => ColorToken::Green,
        _ => ColorToken::Neutral,
    }
}

/// Header indicator: green only while operational.
pub fn system_status_color_of(status: impl AsRef<str>) -> ColorToken {
    match status.as_ref() {
        "operational" => ColorToken::Green,
        _ => ColorToken::Yellow,
    }
}
