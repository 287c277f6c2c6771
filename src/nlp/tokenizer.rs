//! Separator-driven tokenization.
//!
//! A line is partitioned into maximal runs that are either entirely
//! separator characters or entirely non-separator characters. The
//! partition has no gaps and no overlaps: concatenating successive tokens
//! reconstructs the line byte for byte. Everything downstream of the
//! tokenizer depends on this boundary behavior being exact.

use rustc_hash::FxHashSet;

use crate::types::{Token, TokenKind, DEFAULT_SEPARATORS};

/// The set of characters treated as word boundaries.
///
/// Built once at process start and passed by reference into the tokenizer
/// and aggregator; membership is tested per `char`, so multi-byte
/// characters are never split.
#[derive(Debug, Clone)]
pub struct SeparatorSet {
    chars: FxHashSet<char>,
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS)
    }
}

impl SeparatorSet {
    /// Create a separator set from the characters of `separators`.
    pub fn new(separators: &str) -> Self {
        Self {
            chars: separators.chars().collect(),
        }
    }

    /// Returns `true` if `c` is a word boundary.
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if no character is a separator.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate over the tokens of `text` from its start.
    pub fn tokens<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            position: 0,
            separators: self,
        }
    }
}

/// Returns the maximal homogeneous token of `text` starting at byte
/// `position`: if the character at `position` is a separator, the longest
/// run of separator characters from there; otherwise the longest run of
/// non-separator characters. The token never spans past the end of `text`.
///
/// Repeated calls advancing `position` by `token.len()` until
/// `position == text.len()` partition the line exactly.
///
/// # Panics
///
/// Panics if `position >= text.len()` or `position` is not a character
/// boundary.
pub fn next_token<'a>(text: &'a str, position: usize, separators: &SeparatorSet) -> Token<'a> {
    assert!(
        position < text.len(),
        "token position {position} out of bounds for line of length {}",
        text.len()
    );

    let rest = &text[position..];
    let leading_is_sep = match rest.chars().next() {
        Some(c) => separators.contains(c),
        // Unreachable: rest is non-empty by the precondition.
        None => false,
    };

    // End of the run: first character whose separator membership differs
    // from the leading character's, or end of line.
    let end = rest
        .char_indices()
        .find(|&(_, c)| separators.contains(c) != leading_is_sep)
        .map_or(rest.len(), |(i, _)| i);

    Token {
        text: &rest[..end],
        kind: if leading_is_sep {
            TokenKind::Separator
        } else {
            TokenKind::Word
        },
    }
}

/// Iterator over the tokens of one line.
///
/// Wraps [`next_token`], advancing past each token it yields; the
/// iterator and the raw function agree on every input.
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    position: usize,
    separators: &'a SeparatorSet,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.position >= self.text.len() {
            return None;
        }
        let token = next_token(self.text, self.position, self.separators);
        self.position += token.len();
        Some(token)
    }
}
