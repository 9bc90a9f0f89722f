//! Tokenized line nodes produced by the structured reader

use smallvec::SmallVec;

/// One logical line of structured text: its tokens, plus any lines indented
/// beneath it as children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataNode {
    pub tokens: SmallVec<[String; 4]>,
    pub children: Vec<DataNode>,
    /// 1-based source line, or 0 for nodes built in code.
    pub line: usize,
}

impl DataNode {
    /// Build a node directly from tokens, with no children.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            children: Vec::new(),
            line: 0,
        }
    }

    /// Number of tokens on this line.
    #[inline]
    pub fn size(&self) -> usize {
        self.tokens.len()
    }

    /// Token text by index, or the empty string when out of range.
    #[inline]
    pub fn token(&self, index: usize) -> &str {
        self.tokens.get(index).map(String::as_str).unwrap_or("")
    }

    /// Integer value of a token, if it parses as one.
    pub fn value(&self, index: usize) -> Option<i64> {
        self.tokens.get(index).and_then(|token| token.parse::<i64>().ok())
    }

    /// Report a problem with this line without aborting the read.
    pub fn print_trace(&self, message: &str) {
        log::warn!("{} line {}: {}", message, self.line, self.tokens.join(" "));
    }
}
