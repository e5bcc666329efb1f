/// What keystrokes act on while a board is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Nothing focused; keys act on the board.
    Board,
    /// A note is focused; arrows move it, digits recolor it.
    Note,
    /// Typing goes into the focused note.
    Insert,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_variants() {
        assert_eq!(Mode::Board, Mode::Board);
        assert_ne!(Mode::Board, Mode::Insert);
        assert_eq!(Mode::Note, Mode::Note);
    }

    #[test]
    fn test_mode_clone() {
        let mode = Mode::Insert;
        let cloned = mode.clone();
        assert_eq!(mode, cloned);
    }
}
