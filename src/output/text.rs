//! Line-oriented text renderer.
//!
//! ```text
//! User found: User(id: 7, name: "Kurtis Weissnat", ...)
//! Leanne Graham
//! ...
//! ```

use std::fmt::Write;

use crate::orchestrator::Report;
use crate::output::OutputRenderer;

/// Plain text renderer, one fact per line.
pub struct TextRenderer;

impl OutputRenderer for TextRenderer {
    fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        match report {
            Report::Found { user, names } => {
                let _ = writeln!(out, "User found: {user}");
                for name in names {
                    let _ = writeln!(out, "{name}");
                }
            }
            Report::NotFound => out.push_str("User not found\n"),
            Report::Failed { message } => {
                let _ = writeln!(out, "Error: {message}");
            }
        }
        out
    }
}
