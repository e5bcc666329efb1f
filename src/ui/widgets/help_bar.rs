// ui/widgets/help_bar.rs - Key hints and status message at the bottom

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::app::HelpEntry;
use crate::ui::theme::Theme;

pub const HELP_BAR_HEIGHT: u16 = 3;

/// Hints render left to right and stop before one would be cut off.
pub struct HelpBar<'a> {
    pub entries: &'a [HelpEntry],
    pub status: Option<&'a str>,
    pub theme: &'a Theme,
}

impl<'a> HelpBar<'a> {
    pub fn new(entries: &'a [HelpEntry], status: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            entries,
            status,
            theme,
        }
    }

    /// Strip along the bottom of `area`, inset two columns on each side.
    pub fn area_in(area: Rect) -> Rect {
        let height = HELP_BAR_HEIGHT.min(area.height);
        Rect {
            x: area.x + 2.min(area.width),
            y: area.bottom().saturating_sub(height + 1).max(area.y),
            width: area.width.saturating_sub(4),
            height,
        }
    }
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(self.theme.ui.help_bar_bg));

        let info = Style::default().fg(self.theme.ui.help_info_fg);
        let key = Style::default()
            .fg(self.theme.ui.help_key_fg)
            .add_modifier(Modifier::BOLD);

        let mut spans = Vec::new();
        let mut used = 2;
        for (i, entry) in self.entries.iter().enumerate() {
            let cost = entry.info.len() + entry.key.len() + 5;
            if used + cost >= area.width as usize {
                break;
            }
            if i > 0 {
                spans.push(Span::styled("/ ", info));
            }
            spans.push(Span::styled(entry.info, info));
            spans.push(Span::styled(format!(" {} ", entry.key), key));
            used += cost;
        }

        let row = area.y + area.height / 2;
        buf.set_line(area.x + 2, row, &Line::from(spans), area.width.saturating_sub(2));

        if let Some(status) = self.status {
            let width = status.chars().count() as u16;
            let remaining = area.width.saturating_sub(used as u16 + 2);
            if width <= remaining {
                let x = area.right() - width - 2.min(area.width - width);
                buf.set_string(x, row, status, Style::default().fg(self.theme.ui.status_fg));
            }
        }
    }
}
