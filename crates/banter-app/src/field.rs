//! Single-line text editing.

use crate::KeyInput;

/// A single-line input field with a cursor.
///
/// The cursor is a character index, so editing stays safe on multi-byte
/// input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TextField {
    /// Text buffer.
    buffer: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl TextField {
    /// Create an empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Whether the field holds no text.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Take the text out, leaving the field empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }

    fn char_count(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.buffer
            .char_indices()
            .nth(self.cursor)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Apply an editing key. Returns `true` if the key was consumed.
    ///
    /// Only character-level keys are handled here; Enter, Esc, and Tab
    /// belong to the view that owns the field.
    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        match key {
            KeyInput::Char(c) => {
                let at = self.byte_index();
                self.buffer.insert(at, c);
                self.cursor = self.cursor.saturating_add(1);
                true
            },
            KeyInput::Backspace => {
                if self.cursor > 0 {
                    self.cursor = self.cursor.saturating_sub(1);
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                true
            },
            KeyInput::Delete => {
                if self.cursor < self.char_count() {
                    let at = self.byte_index();
                    self.buffer.remove(at);
                }
                true
            },
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            },
            KeyInput::Right => {
                if self.cursor < self.char_count() {
                    self.cursor = self.cursor.saturating_add(1);
                }
                true
            },
            KeyInput::Home => {
                self.cursor = 0;
                true
            },
            KeyInput::End => {
                self.cursor = self.char_count();
                true
            },
            KeyInput::Enter
            | KeyInput::Esc
            | KeyInput::Tab
            | KeyInput::Up
            | KeyInput::Down => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> TextField {
        let mut field = TextField::new();
        for c in text.chars() {
            field.handle_key(KeyInput::Char(c));
        }
        field
    }

    #[test]
    fn typing_advances_cursor() {
        let field = typed("hi");
        assert_eq!(field.text(), "hi");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut field = typed("ab");
        field.handle_key(KeyInput::Backspace);
        assert_eq!(field.text(), "a");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn editing_in_the_middle() {
        let mut field = typed("ac");
        field.handle_key(KeyInput::Left);
        field.handle_key(KeyInput::Char('b'));
        assert_eq!(field.text(), "abc");

        field.handle_key(KeyInput::Home);
        field.handle_key(KeyInput::Delete);
        assert_eq!(field.text(), "bc");
    }

    #[test]
    fn multibyte_input_is_safe() {
        let mut field = typed("héllo");
        field.handle_key(KeyInput::Home);
        field.handle_key(KeyInput::Right);
        field.handle_key(KeyInput::Right);
        field.handle_key(KeyInput::Backspace);
        assert_eq!(field.text(), "hllo");
    }

    #[test]
    fn take_resets_the_field() {
        let mut field = typed("draft");
        assert_eq!(field.take(), "draft");
        assert!(field.is_empty());
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn navigation_keys_are_not_consumed() {
        let mut field = typed("x");
        assert!(!field.handle_key(KeyInput::Enter));
        assert!(!field.handle_key(KeyInput::Esc));
        assert!(!field.handle_key(KeyInput::Tab));
    }
}
