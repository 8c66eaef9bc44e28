use ratatui::layout::Rect;

/// Split the screen into header, body, and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(2);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_tile_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.y, 0);
        assert_eq!(body.y, header.height);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(header.height + body.height + footer.height, area.height);
    }

    #[test]
    fn tiny_area_does_not_underflow() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 10,
            height: 1,
        };
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 1);
        assert_eq!(body.height, 0);
        assert_eq!(footer.height, 0);
    }
}
