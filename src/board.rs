// board.rs - Named, pannable collection of notes

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::color::random_note_color;
use crate::geometry::Xy;
use crate::note::{Note, NoteData, NoteId, NoteLayout};
use crate::signal::Signal;

/// Persisted shape of a board. Field order matches the on-disk JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardData {
    pub notes: Vec<NoteData>,
    pub name: String,
    pub offset: Xy,
}

#[derive(Debug)]
pub struct Board {
    notes: Vec<Note>,
    name: String,
    offset: Xy,
    note_layout: NoteLayout,
    pub on_offset_change: Signal<Xy>,
}

impl Board {
    pub fn new(notes: Vec<Note>, name: impl Into<String>, offset: Xy) -> Self {
        Self {
            notes,
            name: name.into(),
            offset,
            note_layout: NoteLayout::default(),
            on_offset_change: Signal::new(),
        }
    }

    /// Applies `layout` to every note, current and future.
    pub fn with_note_layout(mut self, layout: NoteLayout) -> Self {
        self.note_layout = layout;
        self.notes = std::mem::take(&mut self.notes)
            .into_iter()
            .map(|note| note.with_layout(layout))
            .collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> Xy {
        self.offset
    }

    pub fn note_layout(&self) -> NoteLayout {
        self.note_layout
    }

    /// Notes in stacking order, earliest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    pub fn note_mut(&mut self, id: NoteId) -> Option<&mut Note> {
        self.notes.iter_mut().find(|note| note.id() == id)
    }

    pub fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id() == id)
    }

    pub fn set_offset(&mut self, offset: Xy) {
        self.offset = offset;
        self.on_offset_change.emit(&offset);
    }

    /// Creates an empty note at the origin with a random palette color.
    pub fn new_note(&mut self) -> &mut Note {
        self.new_note_with_rng(&mut rand::thread_rng())
    }

    pub fn new_note_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Note {
        let note =
            Note::new(Vec::new(), Xy::ZERO, random_note_color(rng)).with_layout(self.note_layout);
        debug!("board {:?}: new note {}", self.name, note.id());
        self.notes.push(note);
        let last = self.notes.len() - 1;
        &mut self.notes[last]
    }

    /// Removes the note with `id`, keeping the order of the others.
    pub fn remove_note(&mut self, id: NoteId) -> Option<Note> {
        let index = self.index_of(id)?;
        debug!("board {:?}: remove note {}", self.name, id);
        Some(self.notes.remove(index))
    }

    pub fn data(&self) -> BoardData {
        BoardData {
            notes: self.notes.iter().map(Note::data).collect(),
            name: self.name.clone(),
            offset: self.offset,
        }
    }

    pub fn load(data: BoardData) -> Self {
        Self::new(
            data.notes.into_iter().map(Note::load).collect(),
            data.name,
            data.offset,
        )
    }
}
