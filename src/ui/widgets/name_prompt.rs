// ui/widgets/name_prompt.rs - Text field for naming a new board

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::ui::theme::Theme;

const LABEL: &str = "Board name: ";

pub struct NamePrompt<'a> {
    pub name: &'a str,
    pub theme: &'a Theme,
}

impl<'a> NamePrompt<'a> {
    pub fn new(name: &'a str, theme: &'a Theme) -> Self {
        Self { name, theme }
    }

    /// Cell right after the typed text, where the caret goes.
    pub fn caret(&self, area: Rect) -> (u16, u16) {
        let col = (LABEL.chars().count() + self.name.chars().count()) as u16;
        (area.x + col.min(area.width.saturating_sub(1)), area.y)
    }
}

impl Widget for NamePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let label = Style::default().fg(self.theme.ui.menu_fg);
        let input = Style::default()
            .fg(self.theme.ui.prompt_fg)
            .add_modifier(Modifier::BOLD);

        let (x, _) = buf.set_stringn(area.x, area.y, LABEL, area.width as usize, label);
        let remaining = area.right().saturating_sub(x) as usize;
        buf.set_stringn(x, area.y, self.name, remaining, input);
    }
}
