//! Writer for the indentation-structured text format

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Writes records of tokens as structured text, one record per line.
/// Records written between `begin_child` and `end_child` are indented one
/// tab deeper, nesting them under the previous record when read back.
#[derive(Debug, Default)]
pub struct DataWriter {
    out: String,
    depth: usize,
}

impl DataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one record of tokens as a single line at the current depth.
    pub fn write<T: AsRef<str>>(&mut self, tokens: &[T]) {
        for _ in 0..self.depth {
            self.out.push('\t');
        }
        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                self.out.push(' ');
            }
            self.push_token(token.as_ref());
        }
        self.out.push('\n');
    }

    /// Open a nested block under the record written last.
    pub fn begin_child(&mut self) {
        self.depth += 1;
    }

    pub fn end_child(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// The text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }

    /// Write the accumulated text to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, &self.out)?;
        Ok(())
    }

    fn push_token(&mut self, token: &str) {
        let needs_quotes = token.is_empty()
            || token
                .chars()
                .any(|c| c == ' ' || c == '\t' || c == '#' || c == '"' || c == '`');
        if needs_quotes {
            let quote = if token.contains('"') { '`' } else { '"' };
            self.out.push(quote);
            self.out.push_str(token);
            self.out.push(quote);
        } else {
            self.out.push_str(token);
        }
    }
}
