// ui/widgets/board_canvas.rs - Dotted board background

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::ui::theme::Theme;

const DOT: &str = "•";

/// Fills the area with faint dots so panning is visible on an empty board.
pub struct BoardCanvas<'a> {
    pub theme: &'a Theme,
}

impl<'a> BoardCanvas<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for BoardCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .fg(self.theme.ui.board_dot_fg)
            .bg(self.theme.general.background)
            .add_modifier(Modifier::BOLD);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_symbol(DOT).set_style(style);
            }
        }
    }
}
