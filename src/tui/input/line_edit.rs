use crate::util::unicode;

/// The prompt's single-line edit buffer. `cursor` is a byte offset that
/// always sits on a grapheme boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineEditor {
    buffer: String,
    cursor: usize,
}

impl LineEditor {
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Cursor position in terminal cells from the start of the line
    pub fn cursor_col(&self) -> usize {
        unicode::byte_offset_to_display_col(&self.buffer, self.cursor)
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert pasted text. Line breaks become spaces: one line is one command.
    pub fn insert_str(&mut self, text: &str) {
        let clean = text.replace(['\n', '\r'], " ");
        self.buffer.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.buffer.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = unicode::prev_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = unicode::next_grapheme_boundary(&self.buffer, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Hand over the typed line and start a fresh one
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(s: &str) -> LineEditor {
        let mut ed = LineEditor::default();
        for c in s.chars() {
            ed.insert_char(c);
        }
        ed
    }

    #[test]
    fn typing_appends() {
        let ed = typed("add milk");
        assert_eq!(ed.as_str(), "add milk");
        assert_eq!(ed.cursor_col(), 8);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut ed = typed("ad milk");
        ed.move_home();
        ed.move_right();
        ed.insert_char('d');
        assert_eq!(ed.as_str(), "add milk");
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut ed = typed("cafe\u{0301}");
        ed.backspace();
        assert_eq!(ed.as_str(), "caf");
        ed.move_home();
        ed.backspace();
        assert_eq!(ed.as_str(), "caf");
    }

    #[test]
    fn delete_at_cursor() {
        let mut ed = typed("xadd");
        ed.move_home();
        ed.delete();
        assert_eq!(ed.as_str(), "add");
        ed.move_end();
        ed.delete();
        assert_eq!(ed.as_str(), "add");
    }

    #[test]
    fn wide_chars_move_cursor_by_two_cells() {
        let mut ed = typed("你好");
        assert_eq!(ed.cursor_col(), 4);
        ed.move_left();
        assert_eq!(ed.cursor_col(), 2);
    }

    #[test]
    fn paste_flattens_newlines() {
        let mut ed = typed("add ");
        ed.insert_str("one\ntwo\r\n");
        assert_eq!(ed.as_str(), "add one two  ");
    }

    #[test]
    fn take_resets() {
        let mut ed = typed("exit");
        assert_eq!(ed.take(), "exit");
        assert!(ed.is_empty());
        assert_eq!(ed.cursor_col(), 0);
    }
}
