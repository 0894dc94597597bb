//! Typed errors for the svmlight reader/writer.
//!
//! Two layers:
//! - [`SyntaxError`]: a malformed line, produced by [`crate::parser::parse_line`].
//!   Carries no positional context; the parser sees one line at a time.
//! - [`Error`]: the crate-level taxonomy. Wraps syntax errors with the
//!   offending line number, and covers I/O failures, allocation failures
//!   while growing the CSR buffers, and a catch-all for everything else
//!   (inconsistent caller-supplied arrays, bad configuration).
//!
//! All errors surface synchronously to the immediate caller; nothing is
//! logged or swallowed inside the crate, and a failing load discards all
//! accumulated state.

use std::collections::TryReserveError;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Malformed line content.
///
/// The display strings keep the wording long associated with this format's
/// reference reader, so messages stay recognizable to users migrating
/// existing datasets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The line contained no characters at all.
    #[error("empty line")]
    EmptyLine,

    /// The first token did not parse as a floating-point label.
    #[error("non-numeric or missing label")]
    BadLabel,

    /// The mandatory second token (qid annotation or first feature pair)
    /// was absent.
    #[error("missing qid label")]
    MissingQid,

    /// A feature token was not of the form `<index>:<value>`. `found` is
    /// the separator character when the token otherwise matched
    /// `<uint><sep><float>`, or the whole token when it did not.
    #[error("expected ':', got '{found}'")]
    ExpectedColon { found: String },
}

impl SyntaxError {
    pub(crate) fn expected_colon(found: impl Into<String>) -> Self {
        SyntaxError::ExpectedColon {
            found: found.into(),
        }
    }
}

/// Top-level error type for load and dump operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A malformed line aborted the build. `line` is 1-based.
    #[error("{source} in SVMlight/libSVM file (line {line})")]
    Syntax {
        line: u64,
        #[source]
        source: SyntaxError,
    },

    /// The source could not be opened or read, or the destination could
    /// not be created or written.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Allocation failed while growing the CSR buffers. Propagated as-is;
    /// there is no retry and no partially built dataset.
    #[error("out of memory growing dataset buffers: {0}")]
    Memory(#[from] TryReserveError),

    /// Anything else: inconsistent CSR arrays handed to
    /// [`crate::SparseDataset::from_parts`], an undersized feature-count
    /// override, an impossible index-base request.
    #[error("error in SVMlight/libSVM reader/writer: {0}")]
    Runtime(String),
}

impl Error {
    pub(crate) fn syntax(line: u64, source: SyntaxError) -> Self {
        Error::Syntax { line, source }
    }

    pub(crate) fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Error::Runtime(msg.into())
    }
}
