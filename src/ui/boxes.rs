use ratatui::style::{Color, Style};

use super::canvas::Canvas;
use super::text::draw_text;
use super::theme;
use crate::format::glyph_len;
use crate::layout::Rect;

/// ASCII rectangle from (x1, y1) to (x2, y2) inclusive.
pub fn draw_border<C: Canvas + ?Sized>(canvas: &mut C, x1: i32, y1: i32, x2: i32, y2: i32) {
    let style = theme::border();

    for x in x1..=x2 {
        canvas.set_cell(x, y1, '-', style);
        canvas.set_cell(x, y2, '-', style);
    }
    for y in y1..=y2 {
        canvas.set_cell(x1, y, '|', style);
        canvas.set_cell(x2, y, '|', style);
    }

    canvas.set_cell(x1, y1, '+', style);
    canvas.set_cell(x2, y1, '+', style);
    canvas.set_cell(x1, y2, '+', style);
    canvas.set_cell(x2, y2, '+', style);
}

/// Bordered box with `title` written over the middle of its top edge.
pub fn draw_box<C: Canvas + ?Sized>(canvas: &mut C, rect: Rect, title: &str) {
    if !rect.is_drawable() {
        return;
    }
    draw_border(canvas, rect.x, rect.y, rect.right() - 1, rect.bottom() - 1);

    let title_x = rect.x + (rect.width - glyph_len(title) as i32) / 2;
    draw_text(canvas, title_x, rect.y, rect.width, title, theme::box_title());
}

/// Number of cells `draw_bar` fills for `value` out of `max` over `width`.
pub fn filled_cells(width: i32, value: f64, max: f64) -> i32 {
    if width <= 0 || max.is_nan() || max <= 0.0 || value.is_nan() {
        return 0;
    }
    let value = value.clamp(0.0, max);
    (f64::from(width) * value / max).floor() as i32
}

/// One-row gauge: filled blocks in `color`, then gray shade for the rest.
pub fn draw_bar<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    width: i32,
    value: f64,
    max: f64,
    color: Color,
) {
    let filled = filled_cells(width, value, max);
    let filled_style = Style::default().fg(color);
    for i in 0..width.max(0) {
        if i < filled {
            canvas.set_cell(x + i, y, theme::FILLED_GLYPH, filled_style);
        } else {
            canvas.set_cell(x + i, y, theme::EMPTY_GLYPH, theme::bar_empty());
        }
    }
}
