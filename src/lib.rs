//! # svmlight
//!
//! A **reader and writer for the SVMlight / libSVM sparse-dataset text
//! format**. One labeled feature vector per line, features as sparse
//! `index:value` pairs, converted to and from a compact
//! Compressed-Sparse-Row (CSR) representation without ever materializing
//! a dense matrix.
//!
//! ## Key Features
//!
//! - **Line-by-line streaming parse** - one forward pass, no random access
//! - **CSR output** - flat `data` / `indices` / `indptr` arrays plus
//!   labels and optional per-row comments
//! - **Faithful writes** - record and feature order preserved, values
//!   rendered as the shortest decimal that reads back to the same float
//! - **Index-base handling** - one-based files rebased to zero-based
//!   automatically, or pinned explicitly
//! - **Transparent compression** - `.gz` / `.bz2` sources and
//!   destinations (optional via feature flags)
//! - **Deterministic parallel writes** - shard rendering with
//!   byte-identical output (feature `parallel-io`)
//! - **Typed errors** - syntax errors carry the offending line number;
//!   nothing is logged or swallowed internally
//!
//! ## Quick Start
//!
//! ```
//! // Parse text in memory; indices are kept exactly as written.
//! let dataset = svmlight::load_str("-1 3:4.0\n1 2:1.0\n")?;
//! assert_eq!(dataset.labels(), &[-1.0, 1.0]);
//! assert_eq!(dataset.indices(), &[3, 2]);
//! assert_eq!(dataset.indptr(), &[0, 1, 2]);
//!
//! // Render back out, one-based on disk.
//! let text = svmlight::dump_string(&dataset, false);
//! assert_eq!(text, "-1 4:4\n1 3:1\n");
//! # Ok::<(), svmlight::Error>(())
//! ```
//!
//! Loading from a file goes through [`LoadOptions`] (or the
//! [`load_file`] shorthand for the defaults):
//!
//! ```no_run
//! use svmlight::{IndexBase, LoadOptions};
//!
//! let train = LoadOptions::new()
//!     .buffer_mb(8)
//!     .index_base(IndexBase::OneBased)
//!     .load_file("train.svm.gz")?;
//! svmlight::dump_file("train-copy.svm", &train, false)?;
//! # Ok::<(), svmlight::Error>(())
//! ```
//!
//! ## The Text Format
//!
//! ```text
//! <label> [qid:<number> | <index>:<value>] (<index>:<value>)* [# <comment>]
//! ```
//!
//! - The label is any token that parses as a float.
//! - A `qid:` annotation is recognized only as the second token; it is
//!   parsed and dropped (it has no CSR counterpart).
//! - Lines whose first character is `#` are whole-line comments and
//!   contribute nothing.
//! - Text after the first `#` on a data line is the record's comment.
//! - The second token is mandatory; a bare label line is rejected with
//!   the historical "missing qid label" message.
//!
//! ## Index Bases
//!
//! On disk, column indices conventionally start at 1; in memory they
//! start at 0. File loads resolve this with [`IndexBase`]:
//! [`IndexBase::Auto`] (the default) subtracts one only when the smallest
//! index in the file is positive, [`IndexBase::ZeroBased`] keeps indices
//! as written, [`IndexBase::OneBased`] always subtracts one and rejects a
//! stored 0. [`load_str`] never adjusts indices.
//!
//! ## Extended vs. Legacy Profile
//!
//! File loads return the extended profile: [`SparseDataset::comments`]
//! is `Some`, one entry per row. String loads return the legacy profile
//! with no comments channel. The two are never silently unified.
//!
//! ## Feature Flags
//!
//! - `compression-gzip` - gzip sources and destinations via `flate2`
//! - `compression-bzip2` - bzip2 sources and destinations via `bzip2`
//! - `parallel-io` - the deterministic parallel writer ([`dump_file_par`])
//!
//! All three are on by default.
//!
//! ## Module Overview
//!
//! - [`parser`] - the line grammar, one line to one record
//! - [`builder`] - incremental CSR accumulation
//! - [`dataset`] - the validated CSR container
//! - [`read`] - file / string / multi-file loads and [`LoadOptions`]
//! - [`write`] - string, sequential file, and parallel file dumps
//! - [`compression`] - codec registry and transparent detection
//! - [`stats`] - dataset summaries with JSON export
//! - [`testing`] - fixtures, dataset builders, and assertions for tests

pub mod builder;
pub mod compression;
pub mod dataset;
pub mod error;
pub mod parser;
pub mod read;
pub mod stats;
pub mod testing;
pub mod write;

// General re-exports
pub use builder::DatasetBuilder;
pub use dataset::SparseDataset;
pub use error::{Error, Result, SyntaxError};
pub use parser::{ParsedLine, Record, parse_line};
pub use read::{IndexBase, LoadOptions, load_file, load_files, load_str};
pub use stats::DatasetStats;
pub use write::{dump_file, dump_string};

// Gated re-exports
#[cfg(feature = "parallel-io")]
pub use write::dump_file_par;
