// ui/theme.rs - Colors for pages, board and notes

use ratatui::style::Color;

use crate::color::{self, BLACK, WHITE, gray, red, yellow};

/// Theme configuration
#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
    pub note: NoteTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub help_bar_bg: Color,
    pub help_info_fg: Color,
    pub help_key_fg: Color,
    pub status_fg: Color,
    pub board_dot_fg: Color,
    pub title_fg: Color,
    pub menu_fg: Color,
    pub menu_selected_fg: Color,
    pub prompt_fg: Color,
}

/// Notes are tinted with their own color; these control how strongly.
#[derive(Debug, Clone)]
pub struct NoteTheme {
    pub text_fg: Color,
    pub focused_alpha: f64,
    pub unfocused_alpha: f64,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: WHITE.to_terminal(BLACK),
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        let accent = red(1.0, 0.25).over(yellow(1.0, 1.0)).to_terminal(BLACK);
        Self {
            help_bar_bg: gray(0.2, 0.95).to_terminal(BLACK),
            help_info_fg: gray(0.75, 1.0).to_terminal(BLACK),
            help_key_fg: accent,
            status_fg: red(1.0, 1.0).to_terminal(BLACK),
            board_dot_fg: gray(0.1, 1.0).to_terminal(BLACK),
            title_fg: accent,
            menu_fg: gray(0.75, 1.0).to_terminal(BLACK),
            menu_selected_fg: WHITE
                .with_alpha(0.8)
                .over(red(1.0, 0.25).over(yellow(1.0, 0.5)))
                .to_terminal(BLACK),
            prompt_fg: WHITE.to_terminal(BLACK),
        }
    }
}

impl Default for NoteTheme {
    fn default() -> Self {
        Self {
            text_fg: WHITE.to_terminal(BLACK),
            focused_alpha: 0.9,
            unfocused_alpha: 0.5,
        }
    }
}

impl Theme {
    /// Fill color of a note on the black board.
    pub fn note_fill(&self, note_color: color::Color, focused: bool) -> Color {
        let alpha = if focused {
            self.note.focused_alpha
        } else {
            self.note.unfocused_alpha
        };
        note_color.with_alpha(alpha).to_terminal(BLACK)
    }
}
