//! Text input editing state
//!
//! A single-line input with cursor support. The cursor is tracked as a
//! character index so editing stays safe on multi-byte input.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Editing state for a single-line text input
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    content: String,
    /// Cursor position as a character index
    cursor: usize,
}

impl TextInput {
    /// Create a new empty text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        let idx = self.byte_index();
        self.content.insert(idx, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index();
            self.content.remove(idx);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor = 0;
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.content
    }

    /// Check whether the input is empty
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Split the content around the cursor for rendering
    ///
    /// Returns the text before the cursor, the character under it (if any),
    /// and the text after it.
    pub fn split_at_cursor(&self) -> (&str, Option<char>, &str) {
        let (before, after) = self.content.split_at(self.byte_index());
        let mut chars = after.chars();
        let under = chars.next();
        (before, under, chars.as_str())
    }

    fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.content
            .char_indices()
            .map(|(i, _)| i)
            .nth(self.cursor)
            .unwrap_or(self.content.len())
    }
}

/// Build a labeled input line with an optional value prefix
///
/// The focused field shows a block cursor; unfocused fields render their
/// value flat.
pub fn labeled_input_line(
    label: &str,
    prefix: &str,
    input: &TextInput,
    focused: bool,
) -> Line<'static> {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{}: ", label), label_style)];

    if !prefix.is_empty() {
        spans.push(Span::raw(prefix.to_string()));
    }

    if focused {
        let (before, under, after) = input.split_at_cursor();

        spans.push(Span::styled(
            before.to_string(),
            Style::default().fg(Color::White),
        ));
        spans.push(Span::styled(
            under.unwrap_or(' ').to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        if !after.is_empty() {
            spans.push(Span::styled(
                after.to_string(),
                Style::default().fg(Color::White),
            ));
        }
    } else {
        spans.push(Span::styled(
            input.value().to_string(),
            Style::default().fg(Color::White),
        ));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        input.insert('h');
        input.insert('i');
        assert_eq!(input.value(), "hi");
    }

    #[test]
    fn test_backspace() {
        let mut input = TextInput::new();
        input.insert('a');
        input.insert('b');
        input.backspace();
        assert_eq!(input.value(), "a");

        input.backspace();
        input.backspace();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_insert_mid_content() {
        let mut input = TextInput::new();
        for c in "ace".chars() {
            input.insert(c);
        }
        input.move_left();
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abce");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }
        input.move_start();
        input.delete();
        assert_eq!(input.value(), "bc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new();
        for c in "caña".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "caña");

        input.move_left();
        input.backspace();
        assert_eq!(input.value(), "caa");
    }

    #[test]
    fn test_split_at_cursor() {
        let mut input = TextInput::new();
        for c in "abc".chars() {
            input.insert(c);
        }

        // Cursor at end: nothing under it
        assert_eq!(input.split_at_cursor(), ("abc", None, ""));

        input.move_left();
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("a", Some('b'), "c"));
    }

    #[test]
    fn test_clear() {
        let mut input = TextInput::new();
        input.insert('x');
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.split_at_cursor(), ("", None, ""));
    }
}
