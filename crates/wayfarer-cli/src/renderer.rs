//! Terminal rendering for markdown and JSON output.
//!
//! Markdown goes through termimad with a plain-text fallback for
//! `--no-color` and for tests. JSON payloads are always pretty-printed.

use anyhow::{Context, Result};
use serde_json::Value;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Headings are printed with their `#` markers so trip, section and day
    /// levels stay distinguishable.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[36m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render an opaque JSON payload.
    pub fn render_json(&self, value: &Value) -> Result<()> {
        let text = serde_json::to_string_pretty(value).context("Failed to format JSON")?;
        println!("{text}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# 1. Paris\n").is_ok());
    }

    #[test]
    fn test_render_json() {
        let renderer = TerminalRenderer::new(false);
        assert!(renderer
            .render_json(&serde_json::json!({"quotes": []}))
            .is_ok());
    }
}
