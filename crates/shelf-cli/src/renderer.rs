//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text. The
//! palette follows the stored theme.

use anyhow::Result;
use shelf_core::Theme;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    header_color: Color,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer for `theme`
    pub fn new(rich_enabled: bool, theme: Theme) -> Self {
        let (header_color, bold_color, italic_color, code_bg) = match theme {
            Theme::Light => (Color::Blue, Color::DarkYellow, Color::DarkMagenta, 254),
            Theme::Dark => (Color::Cyan, Color::Yellow, Color::Magenta, 238),
        };

        let mut skin = MadSkin::default();
        skin.set_headers_fg(header_color);
        skin.bold.set_fg(bold_color);
        skin.italic.set_fg(italic_color);
        skin.code_block.set_bg(Color::AnsiValue(code_bg));
        skin.inline_code.set_bg(Color::AnsiValue(code_bg));

        Self {
            rich_enabled,
            header_color,
            skin,
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            // Headers keep their hash marks; termimad would strip them
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("{}", line.with(self.header_color));
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true, Theme::default())
    }
}
