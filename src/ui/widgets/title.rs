// ui/widgets/title.rs - Banner shown above the menus

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::Widget,
};

use crate::ui::theme::Theme;

const BANNER: [&str; 5] = [
    "__ ___   ___                    ___ ___",
    "| \\| |___| |_ _____ __ _____ _ _| |_| |_ _  _",
    "| .` / _ \\  _/ -_) V  V / _ \\ '_|  _| ' \\ || |",
    "|_|\\_\\___/\\__\\___|\\_/\\_/\\___/_|  \\__|_||_\\_, |",
    "                                         |__/ ",
];

const TAGLINE: &str = "A note taking app for the terminal";

pub const TITLE_HEIGHT: u16 = BANNER.len() as u16 + 1;

pub struct Title<'a> {
    pub theme: &'a Theme,
}

impl<'a> Title<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Title<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let banner = Style::default()
            .fg(self.theme.ui.title_fg)
            .add_modifier(Modifier::BOLD);
        let tagline = Style::default()
            .fg(self.theme.ui.menu_fg)
            .add_modifier(Modifier::ITALIC);

        let rows = BANNER
            .iter()
            .map(|line| (*line, banner))
            .chain(std::iter::once((TAGLINE, tagline)));
        for (i, (text, style)) in rows.enumerate() {
            let y = area.y + i as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_stringn(area.x, y, text, area.width as usize, style);
        }
    }
}
