use ratatui::layout::Rect;

use crate::geometry::{Bounds, NoteSize, Xy};
use crate::note::NoteLayout;

/// The visible window onto a board, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn area(&self) -> Bounds {
        Bounds::new(
            Xy::ZERO,
            NoteSize {
                width: self.cols,
                height: self.rows,
            },
        )
    }

    pub fn to_screen(&self, board_position: Xy, offset: Xy) -> Xy {
        board_position - offset
    }

    pub fn to_board(&self, screen_position: Xy, offset: Xy) -> Xy {
        screen_position + offset
    }

    pub fn is_visible(&self, bounds: &Bounds) -> bool {
        self.area().intersects(bounds)
    }

    /// Part of `bounds` that lies on screen, as a ratatui rect.
    pub fn clip(&self, bounds: &Bounds) -> Option<Rect> {
        if !self.is_visible(bounds) {
            return None;
        }
        let end = bounds.end();
        let x0 = bounds.origin.x.max(0);
        let y0 = bounds.origin.y.max(0);
        let x1 = end.x.min(self.cols as i32);
        let y1 = end.y.min(self.rows as i32);
        Some(Rect::new(
            x0 as u16,
            y0 as u16,
            (x1 - x0) as u16,
            (y1 - y0) as u16,
        ))
    }

    /// Board position that centers a fresh note in the current view.
    pub fn spawn_position(&self, offset: Xy, layout: NoteLayout) -> Xy {
        let x = self.cols as i32 / 2 - layout.max_line_width as i32 / 2;
        let y = self.rows as i32 / 2 - layout.min_height as i32 / 2;
        offset + Xy::new(x, y)
    }
}
