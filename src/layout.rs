//! Geometry helpers for hit testing and overlay placement

/// Rectangle bounds in cells (or logical pixels for GUI hosts)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle covering the whole viewport
    pub fn fullscreen(cols: u16, rows: u16) -> Self {
        Rect::new(0, 0, cols, rows)
    }

    /// Get right edge x-coordinate
    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get bottom edge y-coordinate
    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if point is inside rectangle
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Center a `width` x `height` box inside this rectangle, shrinking it to fit
    pub fn centered(&self, width: u16, height: u16) -> Rect {
        let width = width.min(self.width);
        let height = height.min(self.height);
        Rect {
            x: self.x.saturating_add((self.width - width) / 2),
            y: self.y.saturating_add((self.height - height) / 2),
            width,
            height,
        }
    }

    /// Move this rectangle so it lies inside `bounds` where possible
    pub fn clamp_within(&self, bounds: Rect) -> Rect {
        let width = self.width.min(bounds.width);
        let height = self.height.min(bounds.height);
        let max_x = bounds.right().saturating_sub(width);
        let max_y = bounds.bottom().saturating_sub(height);
        Rect {
            x: self.x.clamp(bounds.x, max_x.max(bounds.x)),
            y: self.y.clamp(bounds.y, max_y.max(bounds.y)),
            width,
            height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains() {
        let r = Rect::new(10, 10, 20, 10);
        assert!(r.contains(10, 10));
        assert!(r.contains(29, 19));
        assert!(!r.contains(30, 10));
        assert!(!r.contains(9, 15));
    }

    #[test]
    fn test_centered() {
        let screen = Rect::fullscreen(80, 24);
        let dialog = screen.centered(40, 10);
        assert_eq!(dialog, Rect::new(20, 7, 40, 10));

        let oversized = screen.centered(100, 30);
        assert_eq!(oversized, screen);
    }

    #[test]
    fn test_clamp_within() {
        let screen = Rect::fullscreen(80, 24);

        let off_right = Rect::new(70, 5, 20, 3);
        assert_eq!(off_right.clamp_within(screen), Rect::new(60, 5, 20, 3));

        let inside = Rect::new(5, 5, 10, 2);
        assert_eq!(inside.clamp_within(screen), inside);
    }
}
