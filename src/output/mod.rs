//! Output renderers: plain text and JSON.

pub mod json;
pub mod text;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::orchestrator::Report;

/// Trait for rendering a search report to an output format.
pub trait OutputRenderer {
    /// Render the report to a string, including the trailing newline.
    fn render(&self, report: &Report) -> String;
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    /// Render a report using the renderer for this format.
    pub fn render(&self, report: &Report) -> String {
        match self {
            OutputFormat::Text => text::TextRenderer.render(report),
            OutputFormat::Json => json::JsonRenderer.render(report),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Self as ValueEnum>::from_str(s, true)
            .map_err(|_| format!("unsupported output format: '{s}'. Supported: text, json"))
    }
}
