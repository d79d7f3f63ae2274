//! Single-line text input editing (pure state transitions).
//!
//! Cursor positions are char indices, so multi-byte input never splits a
//! UTF-8 sequence.

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    /// Char index in `0..=char_count`.
    cursor: usize,
}

impl TextInput {
    /// Create an input holding `value` with the cursor at the end.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    /// Raw value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.value.trim()
    }

    /// Cursor as a char index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the value is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replace the whole value, cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        *self = Self::new(value);
    }

    /// Insert a character at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.value.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns whether anything changed.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.value.remove(at);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns whether anything changed.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.value.remove(at);
        true
    }

    /// Move cursor left, saturating at 0.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right, saturating at the end.
    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    /// Move cursor to the start.
    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to the end.
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Split around the cursor: (before, char under cursor, after).
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let at = self.byte_offset(self.cursor);
        let (before, rest) = self.value.split_at(at);
        let mut chars = rest.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_places_cursor_at_end() {
        let input = TextInput::new("pizza");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn insert_at_cursor() {
        let mut input = TextInput::new("piza");
        input.move_left();
        input.insert('z');
        assert_eq!(input.value(), "pizza");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut input = TextInput::new("abc");
        input.move_home();
        assert!(!input.backspace());
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn backspace_removes_previous_char() {
        let mut input = TextInput::new("abc");
        assert!(input.backspace());
        assert_eq!(input.value(), "ab");
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut input = TextInput::new("abc");
        input.move_home();
        assert!(input.delete());
        assert_eq!(input.value(), "bc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn delete_at_end_is_noop() {
        let mut input = TextInput::new("abc");
        assert!(!input.delete());
    }

    #[test]
    fn cursor_movement_saturates() {
        let mut input = TextInput::new("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_home();
        input.move_left();
        assert_eq!(input.cursor(), 0);
        input.move_end();
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn multibyte_editing() {
        let mut input = TextInput::new("café");
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "cafxé");
        input.move_end();
        assert!(input.backspace());
        assert_eq!(input.value(), "cafx");
    }

    #[test]
    fn split_at_cursor_in_middle() {
        let mut input = TextInput::new("pizza");
        input.move_home();
        input.move_right();
        assert_eq!(input.split_at_cursor(), ("p", Some('i'), "zza"));
    }

    #[test]
    fn split_at_cursor_at_end() {
        let input = TextInput::new("pizza");
        assert_eq!(input.split_at_cursor(), ("pizza", None, ""));
    }

    #[test]
    fn trimmed_strips_whitespace() {
        let input = TextInput::new("  Seattle  ");
        assert_eq!(input.trimmed(), "Seattle");
    }
}
