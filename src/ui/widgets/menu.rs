// src/ui/widgets/menu.rs - Vertical option list used by the menus

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::ui::theme::Theme;

/// Options stacked one per row, the selected one marked with an arrow.
pub struct MenuList<'a> {
    pub items: Vec<&'a str>,
    pub selected_index: usize,
    pub theme: &'a Theme,
}

impl<'a> MenuList<'a> {
    pub fn new(items: Vec<&'a str>, selected_index: usize, theme: &'a Theme) -> Self {
        Self {
            items,
            selected_index,
            theme,
        }
    }

    pub fn height(&self) -> u16 {
        self.items.len() as u16
    }
}

impl Widget for MenuList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines: Vec<Line> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if i == self.selected_index {
                    let style = Style::default()
                        .fg(self.theme.ui.menu_selected_fg)
                        .add_modifier(Modifier::BOLD);
                    Line::from(vec![Span::styled(format!("-> {}", item), style)])
                } else {
                    let style = Style::default().fg(self.theme.ui.menu_fg);
                    Line::from(vec![Span::styled(format!("   {}", item), style)])
                }
            })
            .collect();

        Paragraph::new(lines)
            .alignment(Alignment::Left)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_item_has_arrow() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        MenuList::new(vec!["New Board", "Quit"], 1, &theme).render(area, &mut buf);

        assert_eq!(buf.get(0, 0).symbol(), " ");
        assert_eq!(buf.get(3, 0).symbol(), "N");
        assert_eq!(buf.get(0, 1).symbol(), "-");
        assert_eq!(buf.get(1, 1).symbol(), ">");
        assert_eq!(buf.get(3, 1).fg, theme.ui.menu_selected_fg);
    }
}
