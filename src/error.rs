//! Error surface for the tag cloud pipeline.
//!
//! One variant per failure class: input-open failures are fatal before any
//! processing, mid-read failures keep the partial mapping, write failures
//! abort rendering, and an out-of-range selection size is the only
//! condition the binary retries.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure classes of a tag cloud run.
#[derive(Debug)]
pub enum TagCloudError {
    /// The input file could not be opened. Fatal, nothing was processed.
    InputOpen {
        path: PathBuf,
        source: io::Error,
    },

    /// A line could not be read mid-stream. The counts accumulated before
    /// the failure remain valid.
    Read {
        source: io::Error,
    },

    /// The output sink could not be opened or written to. The document
    /// must not be treated as complete.
    Write {
        source: io::Error,
    },

    /// Requested selection size is outside `0..=max`.
    InvalidCount {
        given: usize,
        max: usize,
    },
}

impl TagCloudError {
    /// An [`InputOpen`](Self::InputOpen) failure for `path`.
    pub fn input_open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::InputOpen {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for TagCloudError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputOpen { path, source } => {
                write!(f, "cannot open input file {}: {source}", path.display())
            }
            Self::Read { source } => write!(f, "error reading from file: {source}"),
            Self::Write { source } => write!(f, "error writing output: {source}"),
            Self::InvalidCount { given, max } => {
                write!(f, "word count {given} is outside the valid range 0 to {max}")
            }
        }
    }
}

impl std::error::Error for TagCloudError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InputOpen { source, .. }
            | Self::Read { source }
            | Self::Write { source } => Some(source),
            Self::InvalidCount { .. } => None,
        }
    }
}

impl From<io::Error> for TagCloudError {
    /// A bare `io::Error` in pipeline context is a read failure; the
    /// open and write paths construct their variants explicitly.
    fn from(source: io::Error) -> Self {
        Self::Read { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_display_messages() {
        let err = TagCloudError::input_open(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"), "got: {msg}");
        assert!(msg.contains("no such file"), "got: {msg}");

        let err = TagCloudError::InvalidCount { given: 9, max: 3 };
        assert_eq!(
            err.to_string(),
            "word count 9 is outside the valid range 0 to 3"
        );
    }

    #[test]
    fn test_source_chain() {
        let err = TagCloudError::Read {
            source: io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"),
        };
        assert!(err.source().is_some());

        let err = TagCloudError::InvalidCount { given: 1, max: 0 };
        assert!(err.source().is_none());
    }

    #[test]
    fn test_from_io_error_is_read() {
        let err: TagCloudError =
            io::Error::new(io::ErrorKind::UnexpectedEof, "truncated").into();
        assert!(matches!(err, TagCloudError::Read { .. }));
    }
}
