/// Single-line editable text with a byte-offset cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete_char(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Cursor position counted in chars, for placing the terminal cursor.
    pub fn cursor_column(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn typed(text: &str) -> TextBuffer {
        let mut buffer = TextBuffer::new();
        text.chars().for_each(|ch| buffer.insert_char(ch));
        buffer
    }

    #[test]
    fn typing_appends_and_tracks_column() {
        let buffer = typed("café");
        assert_eq!(buffer.as_str(), "café");
        assert_eq!(buffer.cursor_column(), 4);
    }

    #[test]
    fn edits_respect_multibyte_boundaries() {
        let mut buffer = typed("añb");
        buffer.move_left();
        buffer.backspace();
        assert_eq!(buffer.as_str(), "ab");
        assert_eq!(buffer.cursor_column(), 1);

        buffer.move_home();
        buffer.delete_char();
        assert_eq!(buffer.as_str(), "b");
    }

    #[test]
    fn control_characters_are_ignored() {
        let buffer = typed("a\r\n\tb");
        assert_eq!(buffer.as_str(), "ab");
    }

    #[test]
    fn cursor_moves_stop_at_edges() {
        let mut buffer = typed("hi");
        buffer.move_right();
        assert_eq!(buffer.cursor_column(), 2);
        buffer.move_home();
        buffer.move_left();
        buffer.backspace();
        assert_eq!(buffer.cursor_column(), 0);
        assert_eq!(buffer.as_str(), "hi");
        buffer.move_end();
        assert_eq!(buffer.cursor_column(), 2);
    }
}
