//! Shared value types for the tag cloud pipeline.
//!
//! These types flow between pipeline stages: [`Token`]s out of the
//! tokenizer, [`RankedEntry`]s out of the selector, and [`CloudConfig`]
//! as the immutable configuration threaded through every stage.

use serde::{Deserialize, Serialize};

/// Separator characters treated as word boundaries by default:
/// whitespace plus common punctuation.
pub const DEFAULT_SEPARATORS: &str = "\n\t\r,- .?!:;/'\"[]()*_~";

/// Smallest font size class a word can render at.
pub const MIN_FONT_SIZE: u32 = 11;

/// Largest font size class a word can render at.
pub const MAX_FONT_SIZE: u32 = 48;

/// Whether a token is a run of word characters or a run of separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Maximal run of non-separator characters.
    Word,
    /// Maximal run of separator characters.
    Separator,
}

/// A maximal homogeneous run of characters within one line.
///
/// Tokens borrow from the line they were cut from and are consumed
/// immediately by the aggregator; they are never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The token text, a contiguous slice of the input line.
    pub text: &'a str,
    /// Word or separator.
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Returns `true` if this token is a word (counts toward the mapping).
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Length of the token in bytes. Advancing a position by this value
    /// moves to the first character past the token.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the token text is empty. Never true for tokens
    /// produced by the tokenizer.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A word paired with its occurrence count, selected for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntry {
    /// Lower-cased word as it appears in the count mapping.
    pub word: String,
    /// Number of occurrences in the source text.
    pub count: u32,
}

impl RankedEntry {
    pub fn new(word: impl Into<String>, count: u32) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Immutable configuration for a tag cloud run.
///
/// Created once per run and passed by reference into the aggregator and
/// renderer; nothing mutates it after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    /// Characters treated as word boundaries.
    #[serde(default = "default_separators")]
    pub separators: String,

    /// Smallest font size class.
    #[serde(default = "default_min_font_size")]
    pub min_font_size: u32,

    /// Largest font size class.
    #[serde(default = "default_max_font_size")]
    pub max_font_size: u32,
}

fn default_separators() -> String {
    DEFAULT_SEPARATORS.to_string()
}

fn default_min_font_size() -> u32 {
    MIN_FONT_SIZE
}

fn default_max_font_size() -> u32 {
    MAX_FONT_SIZE
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            separators: default_separators(),
            min_font_size: MIN_FONT_SIZE,
            max_font_size: MAX_FONT_SIZE,
        }
    }
}

impl CloudConfig {
    /// Override the separator characters.
    pub fn with_separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = separators.into();
        self
    }

    /// Override the font size bounds.
    pub fn with_font_sizes(mut self, min: u32, max: u32) -> Self {
        self.min_font_size = min;
        self.max_font_size = max;
        self
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloudStats {
    /// Lines consumed from the input before end-of-input or a read failure.
    pub lines_read: usize,
    /// Distinct words in the count mapping.
    pub distinct_words: usize,
    /// Entries written to the output document.
    pub rendered: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = CloudConfig::default();
        assert_eq!(cfg.separators, DEFAULT_SEPARATORS);
        assert_eq!(cfg.min_font_size, 11);
        assert_eq!(cfg.max_font_size, 48);
    }

    #[test]
    fn test_config_builders() {
        let cfg = CloudConfig::default()
            .with_separators(" ,.")
            .with_font_sizes(10, 20);
        assert_eq!(cfg.separators, " ,.");
        assert_eq!(cfg.min_font_size, 10);
        assert_eq!(cfg.max_font_size, 20);
    }

    #[test]
    fn test_config_deserialize_defaults() {
        let cfg: CloudConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.separators, DEFAULT_SEPARATORS);
        assert_eq!(cfg.min_font_size, MIN_FONT_SIZE);
        assert_eq!(cfg.max_font_size, MAX_FONT_SIZE);
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let cfg = CloudConfig::default().with_font_sizes(12, 36);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CloudConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.min_font_size, 12);
        assert_eq!(back.max_font_size, 36);
        assert_eq!(back.separators, cfg.separators);
    }

    #[test]
    fn test_ranked_entry_serialize() {
        let entry = RankedEntry::new("cat", 2);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["word"], "cat");
        assert_eq!(json["count"], 2);
    }

    #[test]
    fn test_token_accessors() {
        let token = Token {
            text: "cat",
            kind: TokenKind::Word,
        };
        assert!(token.is_word());
        assert!(!token.is_empty());
        assert_eq!(token.len(), 3);
    }
}
