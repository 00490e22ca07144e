use ratatui::buffer::Buffer;
use ratatui::style::Style;

/// A grid of styled cells addressed by signed coordinates. Writes that land
/// outside the grid are dropped.
pub trait Canvas {
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style);
}

impl Canvas for Buffer {
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if let Some(cell) = self.cell_mut((x, y)) {
            cell.set_char(glyph).set_style(style);
        }
    }
}
