//! Text processing components
//!
//! This module provides separator-driven tokenization and word-count
//! aggregation.

pub mod aggregator;
pub mod tokenizer;

pub use aggregator::WordCounter;
pub use tokenizer::{next_token, SeparatorSet, Tokens};
