use ratatui::{buffer::Buffer, layout::Rect, style::Style};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Left,
    Right,
    Center,
}

/// A fixed region of the screen with its own colours.
///
/// Coordinates passed to a surface are local to its top-left corner. Writes
/// that fall off the surface are dropped, so every drawing call is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    area: Rect,
    style: Style,
}

impl Surface {
    pub fn new(area: Rect, style: Style) -> Self {
        Self { area, style }
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn width(&self) -> i32 {
        i32::from(self.area.width)
    }

    pub fn height(&self) -> i32 {
        i32::from(self.area.height)
    }

    /// Writes `glyph` at local `(x, y)`.
    ///
    /// The horizontal check accepts `x == width`, one column past the right
    /// edge. Right-aligned text anchored at `width` relies on it, and a write
    /// that lands outside the terminal buffer is still dropped.
    pub fn set_cell(&self, buf: &mut Buffer, x: i32, y: i32, glyph: char) {
        if x < 0 || x > self.width() {
            return;
        }
        if y < 0 || y >= self.height() {
            return;
        }
        let (Ok(col), Ok(row)) = (
            u16::try_from(i32::from(self.area.x) + x),
            u16::try_from(i32::from(self.area.y) + y),
        ) else {
            return;
        };
        if let Some(cell) = buf.cell_mut((col, row)) {
            cell.set_char(glyph).set_style(self.style);
        }
    }

    pub fn draw_text(
        &self,
        buf: &mut Buffer,
        x: i32,
        y: i32,
        text: &str,
        alignment: TextAlignment,
    ) {
        let len = i32::try_from(text.chars().count()).unwrap_or(i32::MAX);
        let start = match alignment {
            TextAlignment::Left => x,
            TextAlignment::Right => x - len,
            TextAlignment::Center => x - len / 2,
        };
        for (offset, glyph) in (0..).zip(text.chars()) {
            self.set_cell(buf, start + offset, y, glyph);
        }
    }

    pub fn clear(&self, buf: &mut Buffer) {
        for x in 0..self.width() {
            for y in 0..self.height() {
                self.set_cell(buf, x, y, ' ');
            }
        }
    }
}
