use ratatui::style::Style;

use super::canvas::Canvas;
use crate::format::glyph_len;
use crate::layout::Rect;

/// Left-aligned run of at most `max_width` glyphs. Never wraps.
pub fn draw_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    max_width: i32,
    text: &str,
    style: Style,
) {
    let budget = usize::try_from(max_width).unwrap_or(0);
    for (i, glyph) in text.chars().take(budget).enumerate() {
        canvas.set_cell(x + i as i32, y, glyph, style);
    }
}

/// Centers `text` within `width` columns starting at `x`. Text wider than
/// the span starts at `x` and is cut to `width` glyphs.
pub fn draw_centered_text<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    text: &str,
    style: Style,
) {
    let text_width = glyph_len(text) as i32;
    let start_x = x + ((width - text_width) / 2).max(0);
    draw_text(canvas, start_x, y, width, text, style);
}

/// Vertically centered block of centered lines, clipped to `area.height`
/// lines.
pub fn draw_centered_block<C, S>(canvas: &mut C, area: Rect, lines: &[S], style: Style)
where
    C: Canvas + ?Sized,
    S: AsRef<str>,
{
    let start_y = block_start(area, lines.len());
    for (i, line) in visible_lines(area, lines) {
        draw_centered_text(canvas, area.x, start_y + i, area.width, line, style);
    }
}

/// Vertically centered block of left-aligned lines.
pub fn draw_left_block<C, S>(canvas: &mut C, area: Rect, lines: &[S], style: Style)
where
    C: Canvas + ?Sized,
    S: AsRef<str>,
{
    let start_y = block_start(area, lines.len());
    for (i, line) in visible_lines(area, lines) {
        draw_text(canvas, area.x, start_y + i, area.width, line, style);
    }
}

/// A block taller than the area starts at its top row.
fn block_start(area: Rect, line_count: usize) -> i32 {
    area.y + ((area.height - line_count as i32) / 2).max(0)
}

fn visible_lines<S: AsRef<str>>(area: Rect, lines: &[S]) -> impl Iterator<Item = (i32, &str)> {
    let limit = usize::try_from(area.height).unwrap_or(0);
    lines
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, line)| (i as i32, line.as_ref()))
}
