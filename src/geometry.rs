// geometry.rs - Integer board coordinates and note sizing

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// A point (or delta) in board or screen space.
///
/// Arithmetic saturates at the `i32` range so notes stored near the limits
/// never overflow hit tests or rendering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xy {
    pub x: i32,
    pub y: i32,
}

impl Xy {
    pub const ZERO: Xy = Xy { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Xy {
    type Output = Xy;

    fn add(self, rhs: Xy) -> Xy {
        Xy::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Xy {
    type Output = Xy;

    fn sub(self, rhs: Xy) -> Xy {
        Xy::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// On-screen footprint of a note, including a one cell border on each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSize {
    pub width: u16,
    pub height: u16,
}

impl NoteSize {
    /// `width = max_line_width + 2`, `height = max(min_height, line_count + 2)`.
    pub fn derive(max_line_width: usize, min_height: usize, line_count: usize) -> Self {
        let width = max_line_width.saturating_add(2);
        let height = min_height.max(line_count.saturating_add(2));
        Self {
            width: width.min(u16::MAX as usize) as u16,
            height: height.min(u16::MAX as usize) as u16,
        }
    }
}

/// Axis-aligned rectangle in screen space. Unlike `ratatui::layout::Rect` the
/// origin may be negative, so notes panned off the left or top edge still
/// have a well defined extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub origin: Xy,
    pub size: NoteSize,
}

impl Bounds {
    pub fn new(origin: Xy, size: NoteSize) -> Self {
        Self { origin, size }
    }

    pub fn end(&self) -> Xy {
        self.origin + Xy::new(self.size.width as i32, self.size.height as i32)
    }

    pub fn contains(&self, point: Xy) -> bool {
        let end = self.end();
        point.x >= self.origin.x && point.x < end.x && point.y >= self.origin.y && point.y < end.y
    }

    pub fn intersects(&self, other: &Bounds) -> bool {
        let a_end = self.end();
        let b_end = other.end();
        self.origin.x < b_end.x
            && other.origin.x < a_end.x
            && self.origin.y < b_end.y
            && other.origin.y < a_end.y
    }
}
