// ui/widgets/note_card.rs - One note drawn at its board position

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::geometry::{Bounds, Xy};
use crate::note::Note;
use crate::ui::theme::Theme;

/// A note tile with a one-cell margin around its text.
///
/// The tile may hang off any edge of the area; only the visible cells are
/// drawn. The focused note gets a stronger fill and bold text.
pub struct NoteCard<'a> {
    pub note: &'a Note,
    pub offset: Xy,
    pub focused: bool,
    pub theme: &'a Theme,
}

impl<'a> NoteCard<'a> {
    pub fn new(note: &'a Note, offset: Xy, focused: bool, theme: &'a Theme) -> Self {
        Self {
            note,
            offset,
            focused,
            theme,
        }
    }

    fn cell_in(area: Rect, bounds: &Bounds, at: Xy) -> Option<(u16, u16)> {
        if !bounds.contains(at) || at.x < 0 || at.y < 0 {
            return None;
        }
        let (x, y) = (at.x as u16, at.y as u16);
        (x >= area.left() && x < area.right() && y >= area.top() && y < area.bottom())
            .then_some((x, y))
    }
}

impl Widget for NoteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bounds = self.note.bounds(self.offset);
        let fill = self.theme.note_fill(self.note.color(), self.focused);
        let background = Style::default().bg(fill);
        let mut text = Style::default().fg(self.theme.note.text_fg).bg(fill);
        if self.focused {
            text = text.add_modifier(Modifier::BOLD);
        }

        let end = bounds.end();
        for y in bounds.origin.y..end.y {
            for x in bounds.origin.x..end.x {
                if let Some((cx, cy)) = Self::cell_in(area, &bounds, Xy::new(x, y)) {
                    buf.get_mut(cx, cy).reset();
                    buf.get_mut(cx, cy).set_symbol(" ").set_style(background);
                }
            }
        }

        for (row, line) in self.note.content().iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let at = bounds.origin + Xy::new(1 + col as i32, 1 + row as i32);
                if let Some((cx, cy)) = Self::cell_in(area, &bounds, at) {
                    buf.get_mut(cx, cy).set_char(ch).set_style(text);
                }
            }
        }
    }
}
