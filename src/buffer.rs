use ropey::Rope;

#[derive(Debug)]
pub enum BufferError {
    Rope(ropey::Error),
}

impl From<ropey::Error> for BufferError {
    fn from(err: ropey::Error) -> Self {
        BufferError::Rope(err)
    }
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::Rope(err) => write!(f, "Rope error: {}", err),
        }
    }
}

impl std::error::Error for BufferError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BufferError::Rope(err) => Some(err),
        }
    }
}

/// Raw, unwrapped note text addressed by char index.
pub struct Buffer {
    pub rope: Rope,
    pub modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::from(""),
            modified: false,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            modified: false,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn insert_text(&mut self, char_idx: usize, text: &str) -> Result<(), BufferError> {
        self.rope.try_insert(char_idx, text)?;
        self.modified = true;
        Ok(())
    }

    /// Removes the char just before `char_idx`. Nothing happens at index 0.
    pub fn delete_char_before(&mut self, char_idx: usize) -> Result<(), BufferError> {
        if char_idx == 0 {
            return Ok(());
        }
        self.rope.try_remove(char_idx - 1..char_idx)?;
        self.modified = true;
        Ok(())
    }
}

#[test]
fn test_insert_text() {
    let mut buffer = Buffer::new();
    buffer.insert_text(0, "hllo").unwrap();
    buffer.insert_text(1, "e").unwrap();
    assert_eq!(buffer.text(), "hello");
    assert!(buffer.modified);
}

#[test]
fn test_insert_past_end_fails() {
    let mut buffer = Buffer::from_text("ab");
    assert!(buffer.insert_text(3, "c").is_err());
    assert_eq!(buffer.text(), "ab");
    assert!(!buffer.modified);
}

#[test]
fn test_delete_char_before() {
    let mut buffer = Buffer::from_text("héllo");
    buffer.delete_char_before(2).unwrap();
    assert_eq!(buffer.text(), "hllo");
    buffer.delete_char_before(0).unwrap();
    assert_eq!(buffer.text(), "hllo");
    assert_eq!(buffer.len_chars(), 4);
}
