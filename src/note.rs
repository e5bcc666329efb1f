// note.rs - Sticky note document model

use serde::{Deserialize, Serialize};
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;
use uuid::Uuid;

use crate::color::Color;
use crate::geometry::{Bounds, NoteSize, Xy};
use crate::signal::Signal;
use crate::wrap::{text_width, wrap};

pub const DEFAULT_MAX_LINE_WIDTH: usize = 20;
pub const DEFAULT_MIN_HEIGHT: usize = 10;

/// Stable identity of a note, kept across saves and loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(Uuid);

impl NoteId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Line width and minimum height shared by the notes of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteLayout {
    pub max_line_width: usize,
    pub min_height: usize,
}

impl Default for NoteLayout {
    fn default() -> Self {
        Self {
            max_line_width: DEFAULT_MAX_LINE_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
        }
    }
}

/// Persisted shape of a note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteData {
    #[serde(default)]
    pub id: NoteId,
    pub content: Vec<String>,
    pub position: Xy,
    pub color: Color,
}

/// A colored, positioned block of wrapped text lines.
///
/// `content` holds display lines that are already wrapped. Typing wraps
/// incrementally: only the last line is ever touched.
#[derive(Debug)]
pub struct Note {
    id: NoteId,
    content: Vec<String>,
    position: Xy,
    color: Color,
    layout: NoteLayout,
    pub on_content_change: Signal<Vec<String>>,
    pub on_position_change: Signal<Xy>,
    pub on_color_change: Signal<Color>,
}

impl Note {
    pub fn new(content: Vec<String>, position: Xy, color: Color) -> Self {
        Self::with_id(NoteId::new(), content, position, color)
    }

    fn with_id(id: NoteId, content: Vec<String>, position: Xy, color: Color) -> Self {
        Self {
            id,
            content,
            position,
            color,
            layout: NoteLayout::default(),
            on_content_change: Signal::new(),
            on_position_change: Signal::new(),
            on_color_change: Signal::new(),
        }
    }

    /// Applies `layout`, rewrapping any line that no longer fits.
    pub fn with_layout(mut self, layout: NoteLayout) -> Self {
        self.layout = layout;
        self.reflow();
        self
    }

    fn reflow(&mut self) {
        let max = self.layout.max_line_width;
        if self.content.iter().all(|line| text_width(line) <= max) {
            return;
        }
        self.content = std::mem::take(&mut self.content)
            .into_iter()
            .flat_map(|line| {
                if text_width(&line) <= max {
                    return vec![line];
                }
                let pieces = wrap(&line, max.saturating_add(1));
                if pieces.is_empty() {
                    vec![String::new()]
                } else {
                    pieces
                }
            })
            .collect();
    }

    pub fn id(&self) -> NoteId {
        self.id
    }

    pub fn content(&self) -> &[String] {
        &self.content
    }

    pub fn position(&self) -> Xy {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn layout(&self) -> NoteLayout {
        self.layout
    }

    pub fn max_line_width(&self) -> usize {
        self.layout.max_line_width
    }

    pub fn min_height(&self) -> usize {
        self.layout.min_height
    }

    pub fn line_count(&self) -> usize {
        self.content.len()
    }

    /// Appends `character` to the end of the last line.
    ///
    /// When the line grows past `max_line_width`, its last word moves down to
    /// a fresh line. A line holding a single word keeps it and the new
    /// character starts the next line instead. A space that causes the wrap
    /// is dropped, leaving the new line empty.
    pub fn add_character(&mut self, character: &str) {
        let max = self.layout.max_line_width;

        match self.content.pop() {
            None => self.content.push(character.to_string()),
            Some(last) => {
                let extended = format!("{last}{character}");
                if text_width(&extended) <= max {
                    self.content.push(extended);
                } else {
                    let mut words: Vec<&str> = extended.split(' ').collect();
                    if words.len() == 1 {
                        self.content.push(last);
                        self.content.push(character.to_string());
                    } else {
                        let moved = words.pop().unwrap_or_default();
                        self.content.push(words.join(" "));
                        let next = if character == " " {
                            ""
                        } else if moved.is_empty() {
                            character
                        } else {
                            moved
                        };
                        self.content.push(next.to_string());
                    }
                }
            }
        }

        self.settle_last_line();
        self.on_content_change.emit(&self.content);
    }

    /// Cuts the last line into `max_line_width` pieces while it is too wide.
    /// Only reachable when more than one character is added at once.
    fn settle_last_line(&mut self) {
        let max = self.layout.max_line_width.max(1);
        while let Some(last) = self.content.last() {
            if text_width(last) <= max {
                break;
            }
            let split_at = last
                .char_indices()
                .nth(max)
                .map(|(idx, _)| idx)
                .unwrap_or(last.len());
            let tail = last[split_at..].to_string();
            if let Some(last) = self.content.last_mut() {
                last.truncate(split_at);
            }
            self.content.push(tail);
        }
    }

    pub fn new_line(&mut self) {
        self.content.push(String::new());
        self.on_content_change.emit(&self.content);
    }

    /// Deletes the last grapheme, or the last line break if the last line is
    /// empty. Does nothing on an empty note.
    pub fn backspace(&mut self) {
        let Some(last) = self.content.last_mut() else {
            return;
        };

        if last.is_empty() {
            self.content.pop();
        } else if let Some((idx, _)) = last.grapheme_indices(true).next_back() {
            last.truncate(idx);
        }

        self.on_content_change.emit(&self.content);
    }

    pub fn set_position(&mut self, position: Xy) {
        self.position = position;
        self.on_position_change.emit(&position);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.on_color_change.emit(&color);
    }

    pub fn size(&self) -> NoteSize {
        NoteSize::derive(
            self.layout.max_line_width,
            self.layout.min_height,
            self.content.len(),
        )
    }

    /// Screen-space rectangle of the note for a board panned by `offset`.
    pub fn bounds(&self, offset: Xy) -> Bounds {
        Bounds::new(self.position - offset, self.size())
    }

    pub fn data(&self) -> NoteData {
        NoteData {
            id: self.id,
            content: self.content.clone(),
            position: self.position,
            color: self.color,
        }
    }

    pub fn load(data: NoteData) -> Self {
        Self::with_id(data.id, data.content, data.position, data.color)
    }
}
