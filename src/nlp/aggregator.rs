//! Word-count aggregation.
//!
//! [`WordCounter`] consumes lines, lower-cases every word token, and
//! maintains the word → occurrence-count mapping. Tokenization restarts
//! fresh at the start of each line; no token spans a line boundary.

use std::io::BufRead;

use rustc_hash::FxHashMap;

use super::tokenizer::SeparatorSet;
use crate::error::TagCloudError;

/// Builds the word-count mapping from a line-oriented source.
///
/// The counter exclusively owns the mapping while consuming input; the
/// selector reads it afterwards. Invariant: every key is non-empty,
/// lower-cased, and contains no separator character.
#[derive(Debug, Default)]
pub struct WordCounter {
    counts: FxHashMap<String, u32>,
    separators: SeparatorSet,
    lines_read: usize,
}

impl WordCounter {
    /// Create a counter with the given separator set.
    pub fn new(separators: SeparatorSet) -> Self {
        Self {
            counts: FxHashMap::default(),
            separators,
            lines_read: 0,
        }
    }

    /// Tokenize one line and count its word tokens.
    ///
    /// Empty lines contribute nothing.
    pub fn consume_line(&mut self, line: &str) {
        for token in self.separators.tokens(line) {
            if token.is_word() {
                *self.counts.entry(token.text.to_lowercase()).or_insert(0) += 1;
            }
        }
    }

    /// Consume lines from `reader` until end-of-input.
    ///
    /// On a mid-read I/O failure the counter stops and returns the error;
    /// everything accumulated up to the failing line is kept — partial
    /// results are not rolled back. Returns the number of lines read on
    /// success.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> Result<usize, TagCloudError> {
        for line in reader.lines() {
            let line = line.map_err(|source| TagCloudError::Read { source })?;
            self.consume_line(&line);
            self.lines_read += 1;
        }
        Ok(self.lines_read)
    }

    /// The word → count mapping accumulated so far.
    pub fn counts(&self) -> &FxHashMap<String, u32> {
        &self.counts
    }

    /// Number of distinct words counted so far.
    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    /// Lines consumed so far via [`consume`](Self::consume).
    pub fn lines_read(&self) -> usize {
        self.lines_read
    }

    /// Returns `true` if no word has been counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
