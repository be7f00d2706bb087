//! Text input field handling.
//!
//! The cursor is a character index, so multi-byte input such as `€` edits
//! cleanly; byte offsets are derived only when the string is modified.

use unicode_width::UnicodeWidthStr;

/// State for a text input field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextInput {
    /// The current text content.
    content: String,
    /// Cursor position (character index).
    cursor: usize,
}

impl TextInput {
    /// Creates a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an input holding `text` with the cursor at the end.
    pub fn with_content(text: &str) -> Self {
        Self {
            content: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map_or(self.content.len(), |(i, _)| i)
    }

    fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Inserts a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Deletes the character at the cursor position (delete).
    pub fn delete(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    /// Moves the cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves the cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.char_len() {
            self.cursor += 1;
        }
    }

    /// Moves the cursor to the beginning.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    /// Returns the current content as a string slice.
    pub fn as_str(&self) -> &str {
        &self.content
    }

    /// Returns whether the input is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Cursor position as a character index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display columns occupied by the text before the cursor.
    pub fn cursor_column(&self) -> u16 {
        let before = &self.content[..self.byte_index(self.cursor)];
        u16::try_from(before.width()).unwrap_or(u16::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut input = TextInput::new();
        for c in "0.5".chars() {
            input.insert(c);
        }
        input.move_left();
        input.backspace();
        assert_eq!(input.as_str(), "05");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = TextInput::with_content("12");
        input.delete();
        assert_eq!(input.as_str(), "12");
        input.move_home();
        input.delete();
        assert_eq!(input.as_str(), "2");
    }

    #[test]
    fn multibyte_characters_edit_by_char() {
        let mut input = TextInput::with_content("€1");
        input.move_home();
        input.move_right();
        input.insert('x');
        assert_eq!(input.as_str(), "€x1");
        input.backspace();
        input.backspace();
        assert_eq!(input.as_str(), "1");
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let input = TextInput::with_content("60500");
        assert_eq!(input.cursor_column(), 5);
        let mut input = TextInput::with_content("ab");
        input.move_end();
        input.move_left();
        assert_eq!(input.cursor_column(), 1);
    }
}
