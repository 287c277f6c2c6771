//! Word-frequency tag cloud generation.
//!
//! Reads a line-oriented text source, counts word occurrences
//! case-insensitively, selects the N most frequent words, and renders a
//! deterministic HTML document where font size scales with frequency.
//!
//! The pipeline is a straight sequential pass:
//!
//! ```text
//! lines → tokenizer → aggregator → count mapping → selector → renderer → HTML
//! ```
//!
//! # Quick start
//!
//! ```
//! use std::io::Cursor;
//! use tagcloud::{CloudConfig, NoopObserver, Pipeline};
//!
//! let pipeline = Pipeline::new(CloudConfig::default());
//! let mut html = Vec::new();
//! let stats = pipeline
//!     .run(
//!         Cursor::new("the cat and the hat\n"),
//!         "sample.txt",
//!         2,
//!         &mut html,
//!         &mut NoopObserver,
//!     )
//!     .unwrap();
//! assert_eq!(stats.rendered, 2);
//! ```

pub mod cloud;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod types;

pub use cloud::{select_top, FontScale, HtmlRenderer};
pub use error::TagCloudError;
pub use nlp::{SeparatorSet, WordCounter};
pub use pipeline::{NoopObserver, Pipeline, PipelineObserver, StageTimingObserver};
pub use types::{CloudConfig, CloudStats, RankedEntry, Token, TokenKind};
