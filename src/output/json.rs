//! JSON output renderer.
//!
//! Outputs `{"status": "found", "user": {...}, "names": [...]}`,
//! `{"status": "not_found"}` or `{"status": "error", "message": "..."}`.

use crate::orchestrator::Report;
use crate::output::OutputRenderer;

/// JSON output renderer.
pub struct JsonRenderer;

impl OutputRenderer for JsonRenderer {
    fn render(&self, report: &Report) -> String {
        let mut out = serde_json::to_string_pretty(report).unwrap_or_else(|_| "{}".to_string());
        out.push('\n');
        out
    }
}
