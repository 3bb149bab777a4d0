//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use brew_core::{Phase, TimerSnapshot};
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

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            // Header lines keep their hash marks.
            for line in markdown.lines() {
                if line.starts_with('#') {
                    writeln!(out, "\x1b[34m{line}\x1b[0m")?;
                } else {
                    writeln!(out, "{}", self.skin.inline(line))?;
                }
            }
        } else {
            write!(out, "{markdown}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Print one timer status line.
    pub fn status(&self, snapshot: &TimerSnapshot) -> Result<()> {
        let mut out = io::stdout().lock();
        if self.rich_enabled {
            let color = match snapshot.phase {
                Phase::Preparing => "\x1b[36m",
                Phase::Running => "\x1b[32m",
                Phase::Paused => "\x1b[33m",
                Phase::Finished => "\x1b[1;32m",
                Phase::Idle => "",
            };
            writeln!(out, "{color}{snapshot}\x1b[0m")?;
        } else {
            writeln!(out, "{snapshot}")?;
        }
        out.flush()?;
        Ok(())
    }

    /// Print the builder or timer prompt without a newline.
    pub fn prompt(&self, prompt: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{prompt} ")?;
        out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
