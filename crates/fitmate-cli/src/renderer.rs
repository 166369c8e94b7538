//! Terminal rendering with termimad, or plain text when color is disabled.

use anyhow::Result;
use fitmate_core::Progress;
use termimad::{crossterm::style::Color, MadSkin};

const BAR_WIDTH: usize = 20;

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            // Headers keep their hashes so nesting stays visible
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
            }
        }
        Ok(())
    }

    /// Render one line of live session progress.
    pub fn render_progress(&self, progress: &Progress) -> Result<()> {
        if self.rich_enabled {
            let bar = progress_bar(progress.total_fraction_complete, BAR_WIDTH);
            self.skin.print_inline(&format!("`{bar}` {progress}"));
            println!();
        } else {
            println!("{progress}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Fixed-width bar such as `[#####---------------]`.
fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
