// src/editor.rs - Single-note editor over raw text with a linear cursor

use log::warn;

use crate::buffer::Buffer;
use crate::cursor::{Cursor, ScreenPosition};
use crate::signal::Signal;
use crate::wrap::{MIN_WRAP_WIDTH, text_width, wrap};

/// Edits one unwrapped string and lays it out on demand.
///
/// Standalone library API for embedding a single note editor. The board
/// page edits `Note` lines directly and computes its own caret.
///
/// Wrapping is recomputed from the raw text for every render, at the width
/// of the content area. The caret is a char index projected with the same
/// width. Vertical moves step one full width at a time and do not remember
/// a preferred column.
pub struct NoteEditor {
    buffer: Buffer,
    cursor: Cursor,
    wrap_width: usize,
    pub on_content_change: Signal<String>,
    pub on_cursor_change: Signal<usize>,
}

impl NoteEditor {
    pub fn new(wrap_width: usize) -> Self {
        Self::with_text("", wrap_width)
    }

    pub fn with_text(text: &str, wrap_width: usize) -> Self {
        Self {
            buffer: Buffer::from_text(text),
            cursor: Cursor::new(),
            wrap_width: wrap_width.max(MIN_WRAP_WIDTH),
            on_content_change: Signal::new(),
            on_cursor_change: Signal::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn len(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn is_modified(&self) -> bool {
        self.buffer.modified
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor.index
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    /// Call when the content area is resized. The caret is re-announced since
    /// its projected position depends on the width.
    pub fn set_wrap_width(&mut self, width: usize) {
        let width = width.max(MIN_WRAP_WIDTH);
        if width != self.wrap_width {
            self.wrap_width = width;
            self.on_cursor_change.emit(&self.cursor.index);
        }
    }

    pub fn wrapped_content(&self) -> Vec<String> {
        wrap(&self.buffer.text(), self.wrap_width)
    }

    pub fn cursor_position(&self) -> ScreenPosition {
        self.cursor.project(self.wrap_width)
    }

    /// Moves the caret to a clicked cell, clamped to the end of the text.
    pub fn place_cursor(&mut self, position: ScreenPosition) {
        let target = Cursor::from_screen(position, self.wrap_width, self.len());
        self.set_cursor(target.index);
    }

    pub fn move_cursor_left(&mut self) {
        self.set_cursor(self.cursor.index.saturating_sub(1));
    }

    pub fn move_cursor_right(&mut self) {
        self.set_cursor((self.cursor.index + 1).min(self.len()));
    }

    pub fn move_cursor_up(&mut self) {
        self.set_cursor(self.cursor.index.saturating_sub(self.wrap_width));
    }

    pub fn move_cursor_down(&mut self) {
        self.set_cursor((self.cursor.index + self.wrap_width).min(self.len()));
    }

    fn set_cursor(&mut self, index: usize) {
        if index != self.cursor.index {
            self.cursor.index = index;
            self.on_cursor_change.emit(&index);
        }
    }

    /// Inserts at the caret and moves the caret past the inserted text.
    pub fn add_character(&mut self, character: &str) {
        if let Err(err) = self.buffer.insert_text(self.cursor.index, character) {
            warn!("insert at {} rejected: {}", self.cursor.index, err);
            return;
        }
        let end = self.cursor.index + text_width(character);
        self.set_cursor(end.min(self.len()));
        self.on_content_change.emit(&self.buffer.text());
    }

    /// Deletes the char before the caret. Does nothing at the start.
    pub fn remove_character(&mut self) {
        if self.cursor.index == 0 {
            return;
        }
        if let Err(err) = self.buffer.delete_char_before(self.cursor.index) {
            warn!("delete at {} rejected: {}", self.cursor.index, err);
            return;
        }
        self.move_cursor_left();
        self.on_content_change.emit(&self.buffer.text());
    }
}
