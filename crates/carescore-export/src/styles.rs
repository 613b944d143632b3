use carescore_core::models::recommendation::Priority;
use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Calibri").
    pub body_font: String,

    /// Font for headings.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    pub heading1_size: usize,
    pub heading2_size: usize,
    pub heading3_size: usize,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            heading_font: "Calibri".to_string(),
            body_size: 11,
            heading1_size: 18,
            heading2_size: 14,
            heading3_size: 12,
        }
    }
}

/// Hex RGB used for a priority tag in exported documents.
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "B91C1C",
        Priority::High => "C2410C",
        Priority::Medium => "B45309",
        Priority::Low => "15803D",
    }
}

/// Parse an upper-case priority tag as rendered in reports ("CRITICAL").
pub fn parse_priority_tag(tag: &str) -> Option<Priority> {
    match tag {
        "CRITICAL" => Some(Priority::Critical),
        "HIGH" => Some(Priority::High),
        "MEDIUM" => Some(Priority::Medium),
        "LOW" => Some(Priority::Low),
        _ => None,
    }
}
