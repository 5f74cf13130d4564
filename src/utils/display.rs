//! Display and output formatting utilities

use crate::config::OutputStyle;
use crate::game_of_life::Engine;
use anyhow::Result;

const ALIVE_GLYPH: char = '⬜';
const DEAD_GLYPH: char = '⬛';

/// Renders an engine's current generation as text
pub struct GridFormatter;

impl GridFormatter {
    /// Render in the given style
    pub fn render(engine: &Engine, style: OutputStyle) -> Result<String> {
        match style {
            OutputStyle::Glyph => Self::format_glyph(engine),
            OutputStyle::Framed => Self::format_framed(engine),
            OutputStyle::Json => Self::format_json(engine),
        }
    }

    /// Generation banner printed above each frame
    pub fn header(engine: &Engine) -> String {
        format!("Generation #: {}", engine.current_generation())
    }

    /// One glyph per cell, space separated, followed by a blank line
    pub fn format_glyph(engine: &Engine) -> Result<String> {
        let size = engine.grid_size();
        let mut output = String::new();

        for x in 0..size {
            for y in 0..size {
                output.push(if engine.cell_state(x, y)? { ALIVE_GLYPH } else { DEAD_GLYPH });
                output.push(if y == size - 1 { '\n' } else { ' ' });
            }
        }
        output.push('\n');

        Ok(output)
    }

    /// Bordered grid with `1` for alive and `0` for dead cells
    pub fn format_framed(engine: &Engine) -> Result<String> {
        let size = engine.grid_size();
        let border = format!("+{}+\n", "-".repeat(size * 3));

        let mut output = border.clone();
        for x in 0..size {
            let row = (0..size)
                .map(|y| -> Result<&'static str> {
                    Ok(if engine.cell_state(x, y)? { "1" } else { "0" })
                })
                .collect::<Result<Vec<_>>>()?;
            output.push_str("| ");
            output.push_str(&row.join("  "));
            output.push_str(" |\n");
        }
        output.push_str(&border);

        Ok(output)
    }

    /// Pretty-printed JSON snapshot
    pub fn format_json(engine: &Engine) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&engine.snapshot())?;
        output.push('\n');
        Ok(output)
    }
}

/// Color output utilities
#[derive(Debug, Clone, Copy)]
pub struct ColorOutput {
    enabled: bool,
}

impl ColorOutput {
    /// Colors are used only when requested and the terminal supports them
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: requested && Self::supports_color(),
        }
    }

    /// Format text with color (if enabled)
    pub fn colored(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(&self, text: &str) -> String {
        self.colored(text, Color::Green)
    }

    pub fn warning(&self, text: &str) -> String {
        self.colored(text, Color::Yellow)
    }

    pub fn info(&self, text: &str) -> String {
        self.colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
