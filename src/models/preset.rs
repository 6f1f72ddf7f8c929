//! Predefined "network/CIDR" choices offered to the user.
//!
//! A preset is only a shortcut for typing; its value goes through
//! [`crate::calculate`] like any other text.

use std::error::Error;
use std::fmt;

/// A labelled network/CIDR string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub label: String,
    pub value: String,
}

impl Preset {
    pub fn new(label: &str, value: &str) -> Preset {
        Preset {
            label: label.to_string(),
            value: value.to_string(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.value)
    }
}

/// Parse `label=value` entries separated by `;`.
///
/// The label is split off at the last `=`, so labels may contain `/`.
/// Blank entries are skipped.
pub fn parse_presets(input: &str) -> Result<Vec<Preset>, Box<dyn Error>> {
    input
        .split(';')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<Preset, Box<dyn Error>> {
            let (label, value) = entry
                .rsplit_once('=')
                .ok_or_else(|| format!("Invalid preset {entry:?}, expected label=network/cidr"))?;
            let (label, value) = (label.trim(), value.trim());
            if label.is_empty() || value.is_empty() {
                return Err(format!("Invalid preset {entry:?}, empty label or value").into());
            }
            Ok(Preset::new(label, value))
        })
        .collect()
}

/// The presets shipped with the tool, used when none are configured.
pub fn default_presets() -> Vec<Preset> {
    vec![
        Preset::new("Network1/CIDR", "192.168.1.0/27"),
        Preset::new("Network2/CIDR", "192.168.10.20/24"),
    ]
}
