// wrap.rs - Greedy word wrap

/// Narrowest usable wrap width: one character plus its separator column.
pub const MIN_WRAP_WIDTH: usize = 2;

/// Number of display columns a line takes up, counted in chars.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Wraps `text` into display lines no wider than `width`.
///
/// Words are separated by single spaces; runs of spaces collapse. Every
/// word is laid out followed by a separator column, so a word fits alone on
/// a line when it has at most `width - 1` chars. Longer words are cut left
/// to right into chunks of exactly `width - 1` chars (the last one possibly
/// shorter). Lines are returned without their trailing separator.
///
/// Widths below [`MIN_WRAP_WIDTH`] are clamped.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(MIN_WRAP_WIDTH);
    let chunk_width = width - 1;

    let mut lines = Vec::new();
    let mut current = String::new();
    // Columns taken by `current` including the separator after each chunk.
    let mut used = 0;

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        for chunk in hard_split(word, chunk_width) {
            let cost = text_width(chunk) + 1;
            if used > 0 && used + cost > width {
                lines.push(std::mem::take(&mut current));
                used = 0;
            }
            if used > 0 {
                current.push(' ');
            }
            current.push_str(chunk);
            used += cost;
        }
    }

    if used > 0 {
        lines.push(current);
    }
    lines
}

/// Splits `word` into consecutive pieces of at most `max` chars.
fn hard_split(word: &str, max: usize) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (idx, _) in word.char_indices() {
        if count == max {
            pieces.push(&word[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < word.len() {
        pieces.push(&word[start..]);
    }
    pieces
}
