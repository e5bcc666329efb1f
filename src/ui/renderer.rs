// ui/renderer.rs - Ratatui-based renderer for menus and boards

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
};
use std::io::Stdout;

use crate::app::{App, Page};
use crate::ui::theme::Theme;
use crate::ui::widgets::board_canvas::BoardCanvas;
use crate::ui::widgets::help_bar::HelpBar;
use crate::ui::widgets::menu::MenuList;
use crate::ui::widgets::name_prompt::NamePrompt;
use crate::ui::widgets::note_card::NoteCard;
use crate::ui::widgets::title::{TITLE_HEIGHT, Title};

const MENU_WIDTH: u16 = 75;
const MENU_HEIGHT: u16 = 25;

/// Ratatui-based renderer for the app
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
}

impl TuiRenderer {
    /// Create a new TuiRenderer
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
        })
    }

    /// Draw the current page
    pub fn draw(&mut self, app: &App) -> Result<(), Box<dyn std::error::Error>> {
        let theme = &self.theme;
        self.terminal.draw(|f| render_app(f, app, theme))?;
        Ok(())
    }
}

/// Lays out and renders one frame of `app`.
pub fn render_app(f: &mut Frame, app: &App, theme: &Theme) {
    let size = f.size();
    match app.page() {
        Page::MainMenu { options, selection } => {
            let labels = options.iter().map(|option| option.label()).collect();
            let menu = MenuList::new(labels, selection.index, theme);
            render_menu_page(f, menu_box(size), menu, theme);
        }
        Page::LoadBoard { selection } => {
            let labels = app.boards().iter().map(|board| board.name()).collect();
            let menu = MenuList::new(labels, selection.index, theme);
            render_menu_page(f, menu_box(size), menu, theme);
        }
        Page::NewBoard { name } => {
            let area = menu_box(size);
            let chunks = menu_chunks(area, 1);
            f.render_widget(Title::new(theme), chunks[0]);
            let prompt = NamePrompt::new(name, theme);
            let (x, y) = prompt.caret(chunks[2]);
            f.render_widget(prompt, chunks[2]);
            if chunks[2].height > 0 {
                f.set_cursor(x, y);
            }
        }
        Page::Board(page) => {
            f.render_widget(BoardCanvas::new(theme), size);

            let offset = page.board().offset();
            let focused = page.focused();
            for note in page.render_order() {
                let card = NoteCard::new(note, offset, Some(note.id()) == focused, theme);
                f.render_widget(card, size);
            }

            if let Some(caret) = page.caret(app.viewport())
                && caret.x < size.width as i32
                && caret.y < size.height as i32
            {
                f.set_cursor(caret.x as u16, caret.y as u16);
            }
        }
    }

    let status = match app.page() {
        Page::Board(page) if app.status_message.is_none() => {
            let marker = if page.is_modified() { "*" } else { "" };
            Some(format!("{}{}", page.board().name(), marker))
        }
        _ => app.status_message.clone(),
    };
    f.render_widget(
        HelpBar::new(app.help_entries(), status.as_deref(), theme),
        HelpBar::area_in(size),
    );
}

fn render_menu_page(f: &mut Frame, area: Rect, menu: MenuList, theme: &Theme) {
    let chunks = menu_chunks(area, menu.height());
    f.render_widget(Title::new(theme), chunks[0]);
    f.render_widget(menu, chunks[2]);
}

/// Title, a blank row, then `body_height` rows of content.
fn menu_chunks(area: Rect, body_height: u16) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(body_height),
            Constraint::Min(0),
        ])
        .split(area)
}

/// The fixed-size menu panel, centered and clipped to `area`.
fn menu_box(area: Rect) -> Rect {
    let width = MENU_WIDTH.min(area.width);
    let height = MENU_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
