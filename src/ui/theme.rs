//! The fixed dashboard palette.

use ratatui::style::{Color, Modifier, Style};

pub const WHITE: Color = Color::White;
pub const GREEN: Color = Color::Green;
pub const ORANGE: Color = Color::Rgb(255, 165, 0);
pub const RED: Color = Color::Red;
pub const YELLOW: Color = Color::Yellow;
pub const DARK_CYAN: Color = Color::Rgb(0, 139, 139);
pub const GRAY: Color = Color::DarkGray;
pub const LIGHT_CORAL: Color = Color::Rgb(240, 128, 128);

pub const FILLED_GLYPH: char = '\u{2588}';
pub const EMPTY_GLYPH: char = '\u{2591}';

pub fn fg(color: Color) -> Style {
    Style::default().fg(color)
}

/// Terminal default colors.
pub fn plain() -> Style {
    Style::default()
}

pub fn text() -> Style {
    fg(WHITE)
}

pub fn border() -> Style {
    fg(LIGHT_CORAL)
}

pub fn box_title() -> Style {
    fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn dashboard_title() -> Style {
    fg(GREEN).add_modifier(Modifier::BOLD)
}

pub fn bar_empty() -> Style {
    fg(GRAY)
}
