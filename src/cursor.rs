/// Row and column of a caret inside a wrapped text area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPosition {
    pub row: usize,
    pub col: usize,
}

/// Linear edit position into raw text, `0 <= index <= len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub index: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    /// Projects the index onto an area `width` columns wide. A zero width is
    /// treated as one column.
    pub fn project(&self, width: usize) -> ScreenPosition {
        let width = width.max(1);
        ScreenPosition {
            row: self.index / width,
            col: self.index % width,
        }
    }

    /// Inverse of [`Cursor::project`], clamped to `len`.
    pub fn from_screen(position: ScreenPosition, width: usize, len: usize) -> Self {
        let width = width.max(1);
        let col = position.col.min(width - 1);
        let index = position.row.saturating_mul(width).saturating_add(col);
        Self {
            index: index.min(len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_new() {
        assert_eq!(Cursor::new().index, 0);
        assert_eq!(Cursor::new().project(10), ScreenPosition::default());
    }

    #[test]
    fn test_project_wraps_by_width() {
        let cursor = Cursor { index: 23 };
        assert_eq!(cursor.project(10), ScreenPosition { row: 2, col: 3 });
        assert_eq!(cursor.project(23), ScreenPosition { row: 1, col: 0 });
    }

    #[test]
    fn test_from_screen_clamps_to_len() {
        let cursor = Cursor::from_screen(ScreenPosition { row: 5, col: 2 }, 10, 30);
        assert_eq!(cursor.index, 30);
    }

    proptest! {
        #[test]
        fn projection_round_trips(index in 0..10_000usize, width in 1..200usize) {
            let cursor = Cursor { index };
            let back = Cursor::from_screen(cursor.project(width), width, usize::MAX);
            prop_assert_eq!(back, cursor);
        }
    }
}
