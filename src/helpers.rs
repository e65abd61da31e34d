use ratatui::layout::Rect;

/// A `width` x `height` rect centred inside `area`, shrunk to fit when `area`
/// is smaller.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let actual_width = width.min(area.width);
    let actual_height = height.min(area.height);

    let x = area.x + (area.width - actual_width) / 2;
    let y = area.y + (area.height - actual_height) / 2;

    Rect::new(x, y, actual_width, actual_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centres_inside_an_offset_area() {
        let area = Rect::new(0, 1, 40, 20);

        assert_eq!(centered_rect(24, 4, area), Rect::new(8, 9, 24, 4));
    }

    #[test]
    fn shrinks_to_fit() {
        let area = Rect::new(2, 2, 10, 3);

        assert_eq!(centered_rect(24, 4, area), area);
    }
}
