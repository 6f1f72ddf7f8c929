//! Terminal output utilities.
//!
//! Provides formatting helpers for printing results, errors and presets.

use crate::error::CalcError;
use crate::models::{CalculationResult, Preset};
use crate::processing::FeedbackState;
use colored::Colorize;

const LABEL_WIDTH: usize = 17;

/// Format a label as a right-aligned field ending in a colon.
///
/// # Arguments
/// * `label` - The label text, without colon
/// * `width` - The minimum width of the field
///
/// # Returns
/// A right-aligned string, e.g. `"   Gateway:"`
pub fn format_label<T: ToString>(label: T, width: usize) -> String {
    let with_colon = format!("{}:", label.to_string());
    if with_colon.len() >= width {
        with_colon
    } else {
        format!("{with_colon:>width$}")
    }
}

fn line(label: &str, value: &str) -> String {
    format!("{} {}", format_label(label, LABEL_WIDTH).bold(), value)
}

/// Render a result as labelled lines.
pub fn render_result(result: &CalculationResult) -> String {
    [
        line("Network Address", result.network_address()),
        line("IP", result.ip()),
        line("Gateway", result.gateway()),
        line("Subnet Mask", result.subnet_mask()),
        line("DNS1", result.dns1()),
        line("DNS2", result.dns2()),
    ]
    .join("\n")
}

pub fn render_error(err: &CalcError) -> String {
    format!("{} {}", "ERROR".on_red(), err.to_string().red().bold())
}

/// Numbered preset list, numbering from 1.
pub fn render_presets(presets: &[Preset]) -> String {
    presets
        .iter()
        .enumerate()
        .map(|(i, p)| format!("{:>3}) {}", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The "Copied" marker for the current feedback state.
pub fn render_feedback(state: FeedbackState) -> Option<String> {
    match state {
        FeedbackState::Visible => Some("Copied".green().to_string()),
        FeedbackState::Fading => Some("Copied".dimmed().to_string()),
        FeedbackState::Hidden => None,
    }
}
