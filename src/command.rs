use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::geometry::Xy;
use crate::mode::Mode;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // Menus and prompts
    SelectPrev,
    SelectNext,
    Confirm,
    Back,
    InsertChar(char),
    DeleteChar,
    // Board
    NewNote,
    RemoveNote,
    FocusNext,
    EditNote,
    NewLine,
    MoveNote(Xy),
    SetColor(usize),
    MouseDown(Xy),
    MouseDrag(Xy),
    MouseUp(Xy),
    Quit,
}

/// Which kind of screen is reading input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputContext {
    Menu,
    Prompt,
    Board(Mode),
}

impl Command {
    /// Maps a key press to a command. Keys without a meaning in `context`
    /// map to `None`.
    pub fn from_key(key: KeyEvent, context: InputContext) -> Option<Command> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        match context {
            InputContext::Menu => match key.code {
                KeyCode::Up => Some(Command::SelectPrev),
                KeyCode::Down => Some(Command::SelectNext),
                KeyCode::Enter => Some(Command::Confirm),
                KeyCode::Esc => Some(Command::Back),
                _ => None,
            },
            InputContext::Prompt => match key.code {
                KeyCode::Enter => Some(Command::Confirm),
                KeyCode::Esc => Some(Command::Back),
                KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteChar),
                KeyCode::Char(c) => Some(Command::InsertChar(c)),
                _ => None,
            },
            InputContext::Board(Mode::Insert) => match key.code {
                KeyCode::Esc => Some(Command::Back),
                KeyCode::Enter => Some(Command::NewLine),
                KeyCode::Backspace | KeyCode::Delete => Some(Command::DeleteChar),
                KeyCode::Tab => Some(Command::InsertChar(' ')),
                KeyCode::Char(c) => Some(Command::InsertChar(c)),
                _ => None,
            },
            InputContext::Board(mode) => match key.code {
                KeyCode::Esc => Some(Command::Back),
                KeyCode::Tab => Some(Command::FocusNext),
                KeyCode::Char('+') => Some(Command::NewNote),
                KeyCode::Enter if mode == Mode::Note => Some(Command::EditNote),
                KeyCode::Char('-') if mode == Mode::Note => Some(Command::RemoveNote),
                KeyCode::Char(c) if mode == Mode::Note && c.is_ascii_digit() => {
                    c.to_digit(10).map(|d| Command::SetColor(d as usize))
                }
                KeyCode::Up if mode == Mode::Note => Some(Command::MoveNote(Xy::new(0, -1))),
                KeyCode::Down if mode == Mode::Note => Some(Command::MoveNote(Xy::new(0, 1))),
                KeyCode::Left if mode == Mode::Note => Some(Command::MoveNote(Xy::new(-1, 0))),
                KeyCode::Right if mode == Mode::Note => Some(Command::MoveNote(Xy::new(1, 0))),
                _ => None,
            },
        }
    }

    /// Maps left-button mouse activity; everything else is ignored.
    pub fn from_mouse(mouse: MouseEvent) -> Option<Command> {
        let at = Xy::new(mouse.column as i32, mouse.row as i32);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Command::MouseDown(at)),
            MouseEventKind::Drag(MouseButton::Left) => Some(Command::MouseDrag(at)),
            MouseEventKind::Up(MouseButton::Left) => Some(Command::MouseUp(at)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_command_variants() {
        assert_eq!(Command::NewNote, Command::NewNote);
        assert_ne!(Command::SelectPrev, Command::SelectNext);
        let cmd = Command::InsertChar('a');
        if let Command::InsertChar(c) = cmd {
            assert_eq!(c, 'a');
        } else {
            panic!("Expected InsertChar");
        }
    }

    #[test]
    fn test_insert_mode_keys() {
        let ctx = InputContext::Board(Mode::Insert);
        assert_eq!(Command::from_key(key(KeyCode::Char('+')), ctx), Some(Command::InsertChar('+')));
        assert_eq!(Command::from_key(key(KeyCode::Char(' ')), ctx), Some(Command::InsertChar(' ')));
        assert_eq!(Command::from_key(key(KeyCode::Enter), ctx), Some(Command::NewLine));
        assert_eq!(Command::from_key(key(KeyCode::Backspace), ctx), Some(Command::DeleteChar));
        assert_eq!(Command::from_key(key(KeyCode::Esc), ctx), Some(Command::Back));
        assert_eq!(Command::from_key(key(KeyCode::F(5)), ctx), None);
    }

    #[test]
    fn test_note_mode_keys() {
        let ctx = InputContext::Board(Mode::Note);
        assert_eq!(Command::from_key(key(KeyCode::Char('3')), ctx), Some(Command::SetColor(3)));
        assert_eq!(Command::from_key(key(KeyCode::Char('-')), ctx), Some(Command::RemoveNote));
        assert_eq!(Command::from_key(key(KeyCode::Enter), ctx), Some(Command::EditNote));
        assert_eq!(
            Command::from_key(key(KeyCode::Left), ctx),
            Some(Command::MoveNote(Xy::new(-1, 0)))
        );
    }

    #[test]
    fn test_board_mode_ignores_note_keys() {
        let ctx = InputContext::Board(Mode::Board);
        assert_eq!(Command::from_key(key(KeyCode::Char('3')), ctx), None);
        assert_eq!(Command::from_key(key(KeyCode::Enter), ctx), None);
        assert_eq!(Command::from_key(key(KeyCode::Char('+')), ctx), Some(Command::NewNote));
        assert_eq!(Command::from_key(key(KeyCode::Tab), ctx), Some(Command::FocusNext));
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        for ctx in [
            InputContext::Menu,
            InputContext::Prompt,
            InputContext::Board(Mode::Insert),
        ] {
            assert_eq!(Command::from_key(ctrl_c, ctx), Some(Command::Quit));
        }
    }

    #[test]
    fn test_mouse_mapping() {
        let down = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 7,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(Command::from_mouse(down), Some(Command::MouseDown(Xy::new(4, 7))));

        let scroll = MouseEvent {
            kind: MouseEventKind::ScrollDown,
            ..down
        };
        assert_eq!(Command::from_mouse(scroll), None);
    }
}
