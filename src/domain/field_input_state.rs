//! State management for a single-line form input field.

/// Maximum number of characters a field accepts.
const MAX_INPUT_LENGTH: usize = 256;

/// Cursor-editable text state for one form field.
///
/// The cursor is a byte offset into `text`, kept on a character boundary;
/// navigation walks boundaries through the slices on either side of it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldInputState {
    text: String,
    cursor: usize,
}

impl FieldInputState {
    /// Returns the current field text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Everything left of the cursor. The display width of this slice is
    /// where the terminal cursor belongs.
    pub fn text_before_cursor(&self) -> &str {
        &self.text[..self.cursor]
    }

    /// Returns true if the field is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Inserts a character at the cursor.
    /// Returns false once the field is at capacity.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if self.text.chars().count() >= MAX_INPUT_LENGTH {
            return false;
        }

        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    /// Removes the character left of the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if let Some(ch) = self.char_before_cursor() {
            self.cursor -= ch.len_utf8();
            self.text.remove(self.cursor);
        }
    }

    /// Removes the character under the cursor (delete key).
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Moves the cursor one character to the left.
    pub fn move_cursor_left(&mut self) {
        if let Some(ch) = self.char_before_cursor() {
            self.cursor -= ch.len_utf8();
        }
    }

    /// Moves the cursor one character to the right.
    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Moves the cursor to the beginning of the text.
    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Moves the cursor to the end of the text.
    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    fn char_before_cursor(&self) -> Option<char> {
        self.text_before_cursor().chars().next_back()
    }
}
