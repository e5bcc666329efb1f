// app.rs - Page flow between menus and the open board

use log::{debug, error, info, warn};

use crate::board::Board;
use crate::command::{Command, InputContext};
use crate::geometry::Xy;
use crate::mode::Mode;
use crate::note::NoteLayout;
use crate::page::{BoardPage, MenuAction, Selection};
use crate::storage::{BoardStore, StorageError};
use crate::viewport::Viewport;

pub enum Page {
    MainMenu {
        options: Vec<MenuAction>,
        selection: Selection,
    },
    NewBoard {
        name: String,
    },
    LoadBoard {
        selection: Selection,
    },
    Board(BoardPage),
}

/// One key/description pair of the help bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpEntry {
    pub info: &'static str,
    pub key: &'static str,
}

const fn help(info: &'static str, key: &'static str) -> HelpEntry {
    HelpEntry { info, key }
}

/// Everything the renderer and the event loop need.
///
/// Boards on disk are re-read every time the main menu opens, and the open
/// board is saved whenever it is left.
pub struct App {
    store: BoardStore,
    layout: NoteLayout,
    viewport: Viewport,
    page: Page,
    boards: Vec<Board>,
    pub status_message: Option<String>,
}

impl App {
    pub async fn new(store: BoardStore, layout: NoteLayout, viewport: Viewport) -> Self {
        let mut app = Self {
            store,
            layout,
            viewport,
            page: Page::NewBoard {
                name: String::new(),
            },
            boards: Vec::new(),
            status_message: None,
        };
        app.enter_main_menu().await;
        app
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Boards found on disk when the main menu last opened.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        self.viewport = Viewport::new(cols, rows);
    }

    pub fn input_context(&self) -> InputContext {
        match &self.page {
            Page::MainMenu { .. } | Page::LoadBoard { .. } => InputContext::Menu,
            Page::NewBoard { .. } => InputContext::Prompt,
            Page::Board(page) => InputContext::Board(page.mode()),
        }
    }

    /// Opens the saved board called `name`, or a new empty one.
    pub fn open_board(&mut self, name: &str) {
        if let Err(err) = self.store.board_path(name) {
            self.report(err);
            return;
        }
        let board = match self.boards.iter().position(|board| board.name() == name) {
            Some(index) => self.boards.remove(index),
            None => {
                info!("creating board {:?}", name);
                Board::new(Vec::new(), name, Xy::ZERO)
            }
        };
        self.page = Page::Board(BoardPage::new(board.with_note_layout(self.layout)));
        self.status_message = None;
    }

    /// Runs one command. Returns true when the app should exit.
    pub async fn execute_command(&mut self, command: Command) -> bool {
        debug!("command {:?}", command);
        match &mut self.page {
            Page::MainMenu { options, selection } => match command {
                Command::SelectPrev => selection.select_prev(),
                Command::SelectNext => selection.select_next(options.len()),
                Command::Confirm => match options.get(selection.index).copied() {
                    Some(MenuAction::LoadBoard) => {
                        self.page = Page::LoadBoard {
                            selection: Selection::default(),
                        };
                    }
                    Some(MenuAction::NewBoard) => {
                        self.page = Page::NewBoard {
                            name: String::new(),
                        };
                    }
                    Some(MenuAction::Quit) | None => return true,
                },
                Command::Back | Command::Quit => return true,
                _ => debug!("ignored {:?} in main menu", command),
            },
            Page::NewBoard { name } => match command {
                Command::InsertChar(c) => name.push(c),
                Command::DeleteChar => {
                    name.pop();
                }
                Command::Confirm => {
                    if name.trim().is_empty() {
                        self.status_message = Some("Board name cannot be empty".to_string());
                    } else {
                        let name = name.clone();
                        self.open_board(&name);
                    }
                }
                Command::Back => self.enter_main_menu().await,
                Command::Quit => return true,
                _ => debug!("ignored {:?} in name prompt", command),
            },
            Page::LoadBoard { selection } => match command {
                Command::SelectPrev => selection.select_prev(),
                Command::SelectNext => selection.select_next(self.boards.len()),
                Command::Confirm => {
                    if selection.index < self.boards.len() {
                        let board = self.boards.remove(selection.index);
                        self.page =
                            Page::Board(BoardPage::new(board.with_note_layout(self.layout)));
                    }
                }
                Command::Back => self.enter_main_menu().await,
                Command::Quit => return true,
                _ => debug!("ignored {:?} in board list", command),
            },
            Page::Board(page) => match command {
                Command::NewNote => {
                    page.new_note(&self.viewport);
                }
                Command::RemoveNote => page.remove_focused(),
                Command::FocusNext => page.rotate_focus(),
                Command::EditNote => page.start_editing(),
                Command::InsertChar(c) => page.type_char(c),
                Command::NewLine => page.new_line(),
                Command::DeleteChar => page.backspace(),
                Command::MoveNote(delta) => page.move_focused(delta),
                Command::SetColor(index) => page.recolor_focused(index),
                Command::MouseDown(at) => page.mouse_down(at),
                Command::MouseDrag(at) => page.mouse_drag(at),
                Command::MouseUp(_) => page.mouse_up(),
                Command::Back => match page.mode() {
                    Mode::Insert => page.stop_editing(),
                    Mode::Note => page.unfocus(),
                    Mode::Board => self.leave_board().await,
                },
                Command::Quit => return true,
                _ => debug!("ignored {:?} on board", command),
            },
        }
        false
    }

    /// Saves the open board, if any. Call before exiting.
    pub async fn shutdown(&mut self) -> Result<(), StorageError> {
        if let Page::Board(page) = &self.page {
            self.store.save(page.board()).await?;
        }
        Ok(())
    }

    /// Saves and closes the board. On a failed save the board stays open so
    /// nothing is lost.
    async fn leave_board(&mut self) {
        let Page::Board(page) = &self.page else {
            return;
        };
        if let Err(err) = self.store.save(page.board()).await {
            self.report(err);
            return;
        }
        self.enter_main_menu().await;
    }

    async fn enter_main_menu(&mut self) {
        self.boards = match self.store.load_all().await {
            Ok(boards) => boards,
            Err(err) => {
                self.report(err);
                Vec::new()
            }
        };

        let mut options = Vec::new();
        if !self.boards.is_empty() {
            options.push(MenuAction::LoadBoard);
        }
        options.push(MenuAction::NewBoard);
        options.push(MenuAction::Quit);

        self.page = Page::MainMenu {
            options,
            selection: Selection::default(),
        };
    }

    fn report(&mut self, err: StorageError) {
        match &err {
            StorageError::InvalidName(_) => warn!("{}", err),
            _ => error!("{}", err),
        }
        self.status_message = Some(err.to_string());
    }

    /// Shortcuts for the current page and mode.
    pub fn help_entries(&self) -> &'static [HelpEntry] {
        const MENU: &[HelpEntry] = &[
            help("Select", "Up/Down"),
            help("Confirm", "Enter"),
            help("Back", "Esc"),
        ];
        const PROMPT: &[HelpEntry] = &[help("Create", "Enter"), help("Back", "Esc")];
        const BOARD: &[HelpEntry] = &[
            help("New note", "+"),
            help("Focus note", "Click/Tab"),
            help("Move board", "Drag"),
            help("Exit board", "Esc"),
        ];
        const NOTE: &[HelpEntry] = &[
            help("Edit", "Enter/Click"),
            help("Move", "Arrows/Drag"),
            help("Color", "0-9"),
            help("Remove", "-"),
            help("Next", "Tab"),
            help("Unfocus", "Esc"),
        ];
        const INSERT: &[HelpEntry] = &[help("New line", "Enter"), help("Stop editing", "Esc")];

        match &self.page {
            Page::MainMenu { .. } | Page::LoadBoard { .. } => MENU,
            Page::NewBoard { .. } => PROMPT,
            Page::Board(page) => match page.mode() {
                Mode::Board => BOARD,
                Mode::Note => NOTE,
                Mode::Insert => INSERT,
            },
        }
    }
}
