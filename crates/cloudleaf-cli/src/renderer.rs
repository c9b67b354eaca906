//! Terminal rendering for the markdown produced by the core display types.
//!
//! Rich output goes through termimad; `--no-color` prints the markdown
//! untouched, which is also what the CLI tests read.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Grey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            // Headers are printed raw so the `#` markers stay visible.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[32m{line}\x1b[0m")
                } else {
                    writeln!(out, "{}", self.skin.inline(line))
                }
                .context("Failed to write to stdout")?;
            }
        } else {
            write!(out, "{markdown}").context("Failed to write to stdout")?;
            if !markdown.ends_with('\n') {
                writeln!(out).context("Failed to write to stdout")?;
            }
        }
        out.flush().context("Failed to flush stdout")
    }

    /// Prints a prompt without a trailing newline.
    pub fn prompt(&self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{text}").context("Failed to write to stdout")?;
        out.flush().context("Failed to flush stdout")
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
