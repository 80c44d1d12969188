use thiserror::Error;

/// Incomes are expected to fit in five digits; longer input is cut off while typing.
pub(crate) const INCOME_CHAR_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub(crate) enum InputError {
    #[error("'{input}' is not a whole number")]
    NotANumber { input: String },
}

/// Single-line text field with a character limit and a char-indexed cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TextInput {
    content: String,
    cursor: usize,
    char_limit: usize,
    placeholder: String,
}

impl TextInput {
    pub(crate) fn new(char_limit: usize) -> Self {
        Self {
            content: String::new(),
            cursor: 0,
            char_limit,
            placeholder: String::new(),
        }
    }

    pub(crate) fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub(crate) fn value(&self) -> &str {
        &self.content
    }

    pub(crate) fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    fn len(&self) -> usize {
        self.content.chars().count()
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the cursor. Ignored once the limit is reached.
    pub(crate) fn insert(&mut self, c: char) {
        if c.is_control() || self.len() >= self.char_limit {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    /// Insert pasted text, keeping only what still fits.
    pub(crate) fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| !c.is_control()) {
            if self.len() >= self.char_limit {
                break;
            }
            self.insert(c);
        }
    }

    pub(crate) fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub(crate) fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.content.remove(at);
        }
    }

    pub(crate) fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub(crate) fn move_right(&mut self) {
        if self.cursor < self.len() {
            self.cursor += 1;
        }
    }

    pub(crate) fn move_start(&mut self) {
        self.cursor = 0;
    }

    pub(crate) fn move_end(&mut self) {
        self.cursor = self.len();
    }

    pub(crate) fn delete_to_start(&mut self) {
        let at = self.byte_index(self.cursor);
        self.content.replace_range(..at, "");
        self.cursor = 0;
    }

    pub(crate) fn delete_to_end(&mut self) {
        let at = self.byte_index(self.cursor);
        self.content.truncate(at);
    }

    /// Delete the word before the cursor, along with any spaces after it.
    pub(crate) fn delete_word_backward(&mut self) {
        let chars: Vec<char> = self.content.chars().collect();
        let mut start = self.cursor;
        while start > 0 && chars[start - 1].is_whitespace() {
            start -= 1;
        }
        while start > 0 && !chars[start - 1].is_whitespace() {
            start -= 1;
        }
        let from = self.byte_index(start);
        let to = self.byte_index(self.cursor);
        self.content.replace_range(from..to, "");
        self.cursor = start;
    }

    /// Parse the buffer as a base-10 integer with an optional leading sign.
    pub(crate) fn submit(&self) -> Result<i64, InputError> {
        self.content
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber {
                input: self.content.clone(),
            })
    }
}
