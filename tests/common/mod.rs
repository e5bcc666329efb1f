// Shared helpers for the integration tests

use noteworthy::board::Board;
use noteworthy::color::PALETTE;
use noteworthy::geometry::Xy;
use noteworthy::note::{Note, NoteLayout};
use noteworthy::storage::BoardStore;
use tempfile::TempDir;

/// A board store rooted in a fresh temporary directory. Keep the `TempDir`
/// alive for as long as the store is used.
#[allow(dead_code)]
pub fn temp_store() -> (TempDir, BoardStore) {
    let dir = TempDir::new().unwrap();
    let store = BoardStore::new(dir.path());
    (dir, store)
}

/// Types `text` into a fresh note one character at a time.
#[allow(dead_code)]
pub fn typed_note(text: &str, layout: NoteLayout) -> Note {
    let mut note = Note::new(Vec::new(), Xy::ZERO, PALETTE[0]).with_layout(layout);
    for ch in text.chars() {
        note.add_character(&ch.to_string());
    }
    note
}

/// A board whose notes hold the given lines, laid out left to right.
#[allow(dead_code)]
pub fn board_with_notes(name: &str, contents: &[&[&str]]) -> Board {
    let notes = contents
        .iter()
        .enumerate()
        .map(|(i, lines)| {
            let lines = lines.iter().map(|line| line.to_string()).collect();
            Note::new(lines, Xy::new(i as i32 * 25, 0), PALETTE[i % PALETTE.len()])
        })
        .collect();
    Board::new(notes, name, Xy::ZERO)
}
