#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerSize {
    Compact,
    Large,
}

impl TimerSize {
    pub fn from_config(large_timer: bool) -> Self {
        if large_timer {
            TimerSize::Large
        } else {
            TimerSize::Compact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    /// Replace the whole value, leaving the cursor at the end.
    pub fn set(&mut self, s: &str) {
        self.value = s.to_string();
        self.cursor = self.value.len();
    }

    /// Insert a character at the cursor position.
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the character immediately before the cursor (backspace).
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.prev_boundary(self.cursor);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.len() {
            return;
        }
        let end = self.next_boundary(self.cursor);
        self.value.drain(self.cursor..end);
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_boundary(self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.next_boundary(self.cursor);
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }
    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        debug_assert!(pos > 0, "prev_boundary called with pos == 0");
        let mut p = pos;
        loop {
            p -= 1;
            if self.value.is_char_boundary(p) {
                return p;
            }
        }
    }
    fn next_boundary(&self, pos: usize) -> usize {
        debug_assert!(
            pos < self.value.len(),
            "next_boundary called at end of string"
        );
        let mut p = pos + 1;
        while p <= self.value.len() && !self.value.is_char_boundary(p) {
            p += 1;
        }
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_in_the_middle() {
        let mut input = TextInput::from_str("2024-05-01T12:00Z");
        input.move_left();
        input.insert(':');
        input.insert('0');
        input.insert('0');
        assert_eq!(input.value, "2024-05-01T12:00:00Z");
        assert_eq!(input.split_at_cursor(), ("2024-05-01T12:00:00", "Z"));
    }

    #[test]
    fn backspace_and_delete_respect_cursor() {
        let mut input = TextInput::from_str("abc");
        input.home();
        input.backspace();
        assert_eq!(input.value, "abc");
        input.delete();
        assert_eq!(input.value, "bc");
        input.end();
        input.delete();
        assert_eq!(input.value, "bc");
        input.backspace();
        assert_eq!(input.value, "b");
    }

    #[test]
    fn multibyte_characters_are_kept_whole() {
        let mut input = TextInput::from_str("12:00 ±");
        input.backspace();
        assert_eq!(input.value, "12:00 ");
        input.insert('é');
        input.move_left();
        assert_eq!(input.split_at_cursor(), ("12:00 ", "é"));
        input.delete();
        assert_eq!(input.value, "12:00 ");
    }
}
