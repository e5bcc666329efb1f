// page.rs - Menu and board page state

use log::debug;
use std::cell::Cell;
use std::rc::Rc;

use crate::board::Board;
use crate::color::palette_color;
use crate::geometry::Xy;
use crate::mode::Mode;
use crate::note::{Note, NoteId};
use crate::signal::SubscriptionId;
use crate::viewport::Viewport;
use crate::wrap::text_width;

/// Entries of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    LoadBoard,
    NewBoard,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::LoadBoard => "Load Board",
            MenuAction::NewBoard => "New Board",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Highlighted row of a vertical list. Stops at both ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub index: usize,
}

impl Selection {
    pub fn select_prev(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn select_next(&mut self, len: usize) {
        if self.index + 1 < len {
            self.index += 1;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DragTarget {
    Note(NoteId),
    Board,
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    target: DragTarget,
    last: Option<Xy>,
}

struct NoteSubscriptions {
    note: NoteId,
    content: SubscriptionId,
    position: SubscriptionId,
    color: SubscriptionId,
}

/// An open board plus focus, mode and drag state.
///
/// The page listens to every note and to the board offset so it knows when
/// there is something worth saving.
pub struct BoardPage {
    board: Board,
    mode: Mode,
    focused: Option<NoteId>,
    drag: Option<Drag>,
    modified: Rc<Cell<bool>>,
    note_subscriptions: Vec<NoteSubscriptions>,
    offset_subscription: SubscriptionId,
}

impl BoardPage {
    pub fn new(mut board: Board) -> Self {
        let modified = Rc::new(Cell::new(false));

        let flag = Rc::clone(&modified);
        let offset_subscription = board.on_offset_change.subscribe(move |offset| {
            flag.set(true);
            debug!("board offset now ({}, {})", offset.x, offset.y);
        });

        let ids: Vec<NoteId> = board.notes().iter().map(Note::id).collect();
        let mut page = Self {
            board,
            mode: Mode::Board,
            focused: None,
            drag: None,
            modified,
            note_subscriptions: Vec::new(),
            offset_subscription,
        };
        for id in ids {
            page.watch_note(id);
        }
        page
    }

    fn watch_note(&mut self, id: NoteId) {
        let Some(note) = self.board.note_mut(id) else {
            return;
        };

        let flag = Rc::clone(&self.modified);
        let content = note.on_content_change.subscribe(move |lines| {
            flag.set(true);
            debug!("note {}: {} lines", id, lines.len());
        });
        let flag = Rc::clone(&self.modified);
        let position = note.on_position_change.subscribe(move |_| flag.set(true));
        let flag = Rc::clone(&self.modified);
        let color = note.on_color_change.subscribe(move |_| flag.set(true));

        self.note_subscriptions.push(NoteSubscriptions {
            note: id,
            content,
            position,
            color,
        });
    }

    /// Detaches the page's listeners and hands the board back.
    pub fn into_board(mut self) -> Board {
        for subs in self.note_subscriptions.drain(..) {
            if let Some(note) = self.board.note_mut(subs.note) {
                note.on_content_change.unsubscribe(subs.content);
                note.on_position_change.unsubscribe(subs.position);
                note.on_color_change.unsubscribe(subs.color);
            }
        }
        self.board.on_offset_change.unsubscribe(self.offset_subscription);
        self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn focused(&self) -> Option<NoteId> {
        self.focused
    }

    pub fn focused_note(&self) -> Option<&Note> {
        self.focused.and_then(|id| self.board.note(id))
    }

    /// Whether anything changed since the board was opened.
    pub fn is_modified(&self) -> bool {
        self.modified.get()
    }

    /// Notes back to front. The focused note is drawn last, on top.
    pub fn render_order(&self) -> Vec<&Note> {
        let mut order: Vec<&Note> = self
            .board
            .notes()
            .iter()
            .filter(|note| Some(note.id()) != self.focused)
            .collect();
        if let Some(note) = self.focused_note() {
            order.push(note);
        }
        order
    }

    /// Topmost note under a screen cell.
    pub fn note_at(&self, screen: Xy) -> Option<NoteId> {
        let offset = self.board.offset();
        self.render_order()
            .into_iter()
            .rev()
            .find(|note| note.bounds(offset).contains(screen))
            .map(Note::id)
    }

    /// Adds a note centered in the view and focuses it.
    pub fn new_note(&mut self, viewport: &Viewport) -> NoteId {
        let spawn = viewport.spawn_position(self.board.offset(), self.board.note_layout());
        let note = self.board.new_note();
        note.set_position(spawn);
        let id = note.id();
        self.watch_note(id);
        self.modified.set(true);
        self.focus(id);
        id
    }

    pub fn remove_focused(&mut self) {
        let Some(id) = self.focused else {
            return;
        };
        self.note_subscriptions.retain(|subs| subs.note != id);
        if self.board.remove_note(id).is_some() {
            self.modified.set(true);
        }
        self.unfocus();
    }

    pub fn focus(&mut self, id: NoteId) {
        if self.board.note(id).is_some() {
            self.focused = Some(id);
            self.mode = Mode::Note;
        }
    }

    pub fn unfocus(&mut self) {
        self.focused = None;
        self.mode = Mode::Board;
    }

    /// Focuses the note after the focused one, wrapping around.
    pub fn rotate_focus(&mut self) {
        let notes = self.board.notes();
        if notes.is_empty() {
            return;
        }
        let next = match self.focused.and_then(|id| self.board.index_of(id)) {
            Some(index) => (index + 1) % notes.len(),
            None => 0,
        };
        let id = notes[next].id();
        self.focus(id);
    }

    pub fn start_editing(&mut self) {
        if self.focused.is_some() {
            self.mode = Mode::Insert;
        }
    }

    pub fn stop_editing(&mut self) {
        if self.mode == Mode::Insert {
            self.mode = Mode::Note;
        }
    }

    fn editing_note(&mut self) -> Option<&mut Note> {
        if self.mode != Mode::Insert {
            return None;
        }
        let id = self.focused?;
        self.board.note_mut(id)
    }

    pub fn type_char(&mut self, c: char) {
        if let Some(note) = self.editing_note() {
            note.add_character(c.encode_utf8(&mut [0; 4]));
        }
    }

    pub fn new_line(&mut self) {
        if let Some(note) = self.editing_note() {
            note.new_line();
        }
    }

    pub fn backspace(&mut self) {
        if let Some(note) = self.editing_note() {
            note.backspace();
        }
    }

    pub fn move_focused(&mut self, delta: Xy) {
        if let Some(id) = self.focused
            && let Some(note) = self.board.note_mut(id)
        {
            let to = note.position() + delta;
            note.set_position(to);
        }
    }

    /// Recolors the focused note with palette entry `index`. Out-of-range
    /// indexes are ignored.
    pub fn recolor_focused(&mut self, index: usize) {
        let Some(color) = palette_color(index) else {
            return;
        };
        if let Some(id) = self.focused
            && let Some(note) = self.board.note_mut(id)
        {
            note.set_color(color);
        }
    }

    /// Clicking a note focuses it; clicking the focused note again starts
    /// editing. Clicking empty board clears focus. Either way a drag begins.
    pub fn mouse_down(&mut self, at: Xy) {
        match self.note_at(at) {
            Some(id) => {
                if self.focused == Some(id) {
                    self.start_editing();
                } else {
                    self.focus(id);
                }
                self.drag = Some(Drag {
                    target: DragTarget::Note(id),
                    last: None,
                });
            }
            None => {
                self.unfocus();
                self.drag = Some(Drag {
                    target: DragTarget::Board,
                    last: None,
                });
            }
        }
    }

    /// Dragging a note moves it with the pointer; dragging the board pans
    /// the opposite way so the content follows the pointer.
    pub fn mouse_drag(&mut self, at: Xy) {
        let drag = self.drag.get_or_insert(Drag {
            target: DragTarget::Board,
            last: None,
        });
        let last = drag.last.replace(at);
        let target = drag.target;

        let Some(last) = last else {
            return;
        };
        let delta = at - last;
        match target {
            DragTarget::Note(id) => {
                if let Some(note) = self.board.note_mut(id) {
                    let to = note.position() + delta;
                    note.set_position(to);
                }
            }
            DragTarget::Board => {
                let offset = self.board.offset() - delta;
                self.board.set_offset(offset);
            }
        }
    }

    pub fn mouse_up(&mut self) {
        self.drag = None;
    }

    /// Screen cell for the text caret while editing: right after the last
    /// character of the last line.
    pub fn caret(&self, viewport: &Viewport) -> Option<Xy> {
        if self.mode != Mode::Insert {
            return None;
        }
        let note = self.focused_note()?;
        let origin = note.bounds(self.board.offset()).origin;
        let row = note.line_count().saturating_sub(1);
        let col = note.content().last().map(|line| text_width(line)).unwrap_or(0);
        let caret = origin + Xy::new(1 + col as i32, 1 + row as i32);
        viewport.area().contains(caret).then_some(caret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;

    fn page_with_notes(count: usize) -> (BoardPage, Vec<NoteId>) {
        let notes: Vec<Note> = (0..count)
            .map(|i| Note::new(Vec::new(), Xy::new(i as i32 * 30, 0), PALETTE[0]))
            .collect();
        let ids = notes.iter().map(Note::id).collect();
        (BoardPage::new(Board::new(notes, "test", Xy::ZERO)), ids)
    }

    #[test]
    fn test_selection_clamps() {
        let mut selection = Selection::default();
        selection.select_prev();
        assert_eq!(selection.index, 0);
        selection.select_next(2);
        selection.select_next(2);
        assert_eq!(selection.index, 1);
    }

    #[test]
    fn test_rotate_focus_wraps() {
        let (mut page, ids) = page_with_notes(3);
        page.rotate_focus();
        assert_eq!(page.focused(), Some(ids[0]));
        page.rotate_focus();
        page.rotate_focus();
        assert_eq!(page.focused(), Some(ids[2]));
        page.rotate_focus();
        assert_eq!(page.focused(), Some(ids[0]));
        assert_eq!(page.mode(), Mode::Note);
    }

    #[test]
    fn test_rotate_focus_on_empty_board() {
        let (mut page, _) = page_with_notes(0);
        page.rotate_focus();
        assert_eq!(page.focused(), None);
        assert_eq!(page.mode(), Mode::Board);
    }

    #[test]
    fn test_focused_note_renders_last() {
        let (mut page, ids) = page_with_notes(3);
        page.focus(ids[0]);
        let order: Vec<NoteId> = page.render_order().iter().map(|n| n.id()).collect();
        assert_eq!(order, vec![ids[1], ids[2], ids[0]]);
    }

    #[test]
    fn test_typing_requires_insert_mode() {
        let (mut page, ids) = page_with_notes(1);
        page.focus(ids[0]);
        page.type_char('a');
        assert!(page.focused_note().unwrap().content().is_empty());

        page.start_editing();
        page.type_char('a');
        page.new_line();
        page.type_char('b');
        page.backspace();
        assert_eq!(page.focused_note().unwrap().content(), ["a", ""]);
        assert!(page.is_modified());
    }

    #[test]
    fn test_new_note_is_centered_and_focused() {
        let (mut page, _) = page_with_notes(0);
        let viewport = Viewport::new(80, 24);
        let id = page.new_note(&viewport);
        assert_eq!(page.focused(), Some(id));
        assert_eq!(page.board().note(id).unwrap().position(), Xy::new(30, 7));
        assert!(page.is_modified());
    }

    #[test]
    fn test_remove_focused_clears_focus() {
        let (mut page, ids) = page_with_notes(2);
        page.focus(ids[1]);
        page.remove_focused();
        assert_eq!(page.focused(), None);
        assert_eq!(page.board().notes().len(), 1);
    }

    #[test]
    fn test_click_focuses_then_edits() {
        let (mut page, ids) = page_with_notes(2);
        page.mouse_down(Xy::new(31, 1));
        assert_eq!(page.focused(), Some(ids[1]));
        assert_eq!(page.mode(), Mode::Note);
        page.mouse_up();
        page.mouse_down(Xy::new(31, 1));
        assert_eq!(page.mode(), Mode::Insert);
    }

    #[test]
    fn test_drag_moves_note() {
        let (mut page, ids) = page_with_notes(1);
        page.mouse_down(Xy::new(2, 2));
        page.mouse_drag(Xy::new(2, 2));
        page.mouse_drag(Xy::new(5, 4));
        page.mouse_up();
        assert_eq!(page.board().note(ids[0]).unwrap().position(), Xy::new(3, 2));
        assert_eq!(page.board().offset(), Xy::ZERO);
    }

    #[test]
    fn test_drag_on_empty_board_pans() {
        let (mut page, _) = page_with_notes(1);
        page.mouse_down(Xy::new(70, 20));
        page.mouse_drag(Xy::new(70, 20));
        page.mouse_drag(Xy::new(60, 25));
        assert_eq!(page.board().offset(), Xy::new(10, -5));
        assert!(page.is_modified());
    }

    #[test]
    fn test_recolor_and_nudge() {
        let (mut page, ids) = page_with_notes(1);
        page.focus(ids[0]);
        page.recolor_focused(9);
        page.recolor_focused(42);
        page.move_focused(Xy::new(0, -1));
        let note = page.board().note(ids[0]).unwrap();
        assert_eq!(note.color(), PALETTE[9]);
        assert_eq!(note.position(), Xy::new(0, -1));
    }

    #[test]
    fn test_caret_follows_last_line() {
        let (mut page, ids) = page_with_notes(1);
        let viewport = Viewport::new(80, 24);
        page.focus(ids[0]);
        assert_eq!(page.caret(&viewport), None);
        page.start_editing();
        assert_eq!(page.caret(&viewport), Some(Xy::new(1, 1)));
        page.type_char('h');
        page.type_char('i');
        page.new_line();
        page.type_char('x');
        assert_eq!(page.caret(&viewport), Some(Xy::new(2, 2)));
    }

    #[test]
    fn test_into_board_detaches_listeners() {
        let (mut page, ids) = page_with_notes(2);
        page.new_note(&Viewport::new(80, 24));
        let board = page.into_board();
        assert_eq!(board.on_offset_change.subscriber_count(), 0);
        for note in board.notes() {
            assert_eq!(note.on_content_change.subscriber_count(), 0);
            assert_eq!(note.on_position_change.subscriber_count(), 0);
            assert_eq!(note.on_color_change.subscriber_count(), 0);
        }
        assert_eq!(board.notes().len(), ids.len() + 1);
    }

    #[test]
    fn test_note_near_coordinate_limit() {
        let far = Xy::new(i32::MAX - 5, 0);
        let note = Note::new(Vec::new(), far, PALETTE[0]);
        let mut page = BoardPage::new(Board::new(vec![note], "far", Xy::ZERO));
        assert_eq!(page.note_at(Xy::new(3, 3)), None);

        page.mouse_down(Xy::new(3, 3));
        page.mouse_drag(Xy::new(3, 3));
        page.mouse_drag(Xy::new(0, 3));
        assert_eq!(page.board().offset(), Xy::new(3, 0));
    }
}
