//! Terminal rendering of markdown output
//!
//! Uses termimad to style inline markdown, or passes the text through
//! untouched when color is disabled.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

const HEADER_STYLE: &str = "\x1b[34m";
const RESET_STYLE: &str = "\x1b[0m";

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, markdown)?;
        out.flush().context("Failed to flush stdout")
    }

    /// Render markdown text to `out`
    ///
    /// Header lines keep their `#` markers and are only colored, so the
    /// structure stays visible.
    pub fn render_to<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            return out
                .write_all(markdown.as_bytes())
                .context("Failed to write output");
        }

        for line in markdown.lines() {
            let written = if line.starts_with('#') {
                writeln!(out, "{HEADER_STYLE}{line}{RESET_STYLE}")
            } else {
                writeln!(out, "{}", self.skin.inline(line))
            };
            written.context("Failed to write output")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
