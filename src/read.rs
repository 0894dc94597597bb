//! Load entry points: file, string, and multi-file.
//!
//! This module owns the driving loop: lines in, records through
//! [`parse_line`], CSR arrays out of a [`DatasetBuilder`]. Three surfaces:
//! - [`load_file`]: one file, extended profile (comments channel on),
//!   index base resolved after the build;
//! - [`load_str`]: in-memory text, legacy profile (no comments channel),
//!   indices kept exactly as written;
//! - [`load_files`]: several related files (train/test splits) loaded
//!   with one joint index-base decision and a common column count.
//!
//! File loads are configured through [`LoadOptions`]; the bare functions
//! are shorthand for the defaults.
//!
//! Index-base handling is deliberately layered: the parser and builder
//! always see indices as written, and the requested [`IndexBase`] is
//! applied to the finished arrays in one pass. `Auto` (the default)
//! subtracts one only when the smallest stored index is positive, which
//! rebases conventional one-based files and leaves zero-based files
//! alone.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::builder::DatasetBuilder;
use crate::compression::auto_detect_reader;
use crate::dataset::SparseDataset;
use crate::error::{Error, Result};
use crate::parser::{ParsedLine, parse_line};

/// On-disk column-index convention for file loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexBase {
    /// Subtract one from every index iff the smallest stored index is
    /// greater than zero.
    #[default]
    Auto,
    /// Indices are already zero-based; keep them as written.
    ZeroBased,
    /// Indices are one-based; subtract one unconditionally. A stored
    /// index 0 is rejected as [`Error::Runtime`].
    OneBased,
}

/// Configuration for file loads.
///
/// Chained setters, consumed by value:
///
/// ```no_run
/// use svmlight::{IndexBase, LoadOptions};
///
/// let dataset = LoadOptions::new()
///     .buffer_mb(8)
///     .index_base(IndexBase::ZeroBased)
///     .load_file("train.svm")?;
/// # Ok::<(), svmlight::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct LoadOptions {
    buffer_mb: usize,
    index_base: IndexBase,
    n_features: Option<usize>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        LoadOptions {
            buffer_mb: 40,
            index_base: IndexBase::Auto,
            n_features: None,
        }
    }
}

impl LoadOptions {
    pub fn new() -> Self {
        LoadOptions::default()
    }

    /// Read-ahead buffer size in MiB, minimum 1. Purely an I/O hint; the
    /// default of 40 suits large corpora on spinning storage.
    pub fn buffer_mb(mut self, buffer_mb: usize) -> Self {
        self.buffer_mb = buffer_mb;
        self
    }

    /// Column-index convention of the source, default [`IndexBase::Auto`].
    pub fn index_base(mut self, index_base: IndexBase) -> Self {
        self.index_base = index_base;
        self
    }

    /// Overrides the inferred column count. Loading fails when the
    /// override is smaller than what the data requires.
    pub fn n_features(mut self, n_features: usize) -> Self {
        self.n_features = Some(n_features);
        self
    }

    /// Loads one file with this configuration. Extended profile: the
    /// comments channel is present.
    ///
    /// **Compression**: `.gz`/`.bz2` sources are decompressed
    /// transparently, by extension or by magic bytes, when the matching
    /// feature is enabled.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be opened or read,
    /// [`Error::Syntax`] with a 1-based line number for malformed
    /// content, [`Error::Runtime`] for an impossible index-base or
    /// column-count request.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<SparseDataset> {
        let path = path.as_ref();
        let dataset = build_from_file(path, self.buffer_bytes())?;
        let dataset = apply_index_base(dataset, self.index_base)?;
        apply_n_features(dataset, self.n_features)
    }

    /// Loads several related files with this configuration.
    ///
    /// The files are parsed independently, then reconciled:
    /// - with [`IndexBase::Auto`], the shift decision looks at the
    ///   smallest index across *all* files, so a train/test pair never
    ///   rebases one side only;
    /// - every dataset is widened to a common column count, the largest
    ///   inferred one (or the configured override).
    ///
    /// # Errors
    ///
    /// As [`LoadOptions::load_file`]; the first failing file aborts the
    /// whole load.
    pub fn load_files(&self, paths: &[impl AsRef<Path>]) -> Result<Vec<SparseDataset>> {
        let mut datasets = Vec::with_capacity(paths.len());
        for path in paths {
            datasets.push(build_from_file(path.as_ref(), self.buffer_bytes())?);
        }

        let base = match self.index_base {
            IndexBase::Auto => {
                let min = datasets
                    .iter()
                    .filter_map(|dataset| dataset.indices().iter().min())
                    .min();
                if min.is_some_and(|&min| min > 0) {
                    IndexBase::OneBased
                } else {
                    IndexBase::ZeroBased
                }
            }
            fixed => fixed,
        };
        let mut rebased = Vec::with_capacity(datasets.len());
        for dataset in datasets {
            rebased.push(apply_index_base(dataset, base)?);
        }

        let common = self.n_features.unwrap_or_else(|| {
            rebased
                .iter()
                .map(SparseDataset::n_features)
                .max()
                .unwrap_or(0)
        });
        rebased
            .into_iter()
            .map(|dataset| dataset.with_n_features(common))
            .collect()
    }

    fn buffer_bytes(&self) -> usize {
        self.buffer_mb.max(1).saturating_mul(1024 * 1024)
    }
}

/// Loads one SVMlight / libSVM file with default options.
///
/// Extended profile: the result carries a comments channel, one entry per
/// row. Index base is [`IndexBase::Auto`].
///
/// # Errors
///
/// See [`LoadOptions::load_file`].
pub fn load_file(path: impl AsRef<Path>) -> Result<SparseDataset> {
    LoadOptions::default().load_file(path)
}

/// Loads several related SVMlight / libSVM files with default options.
///
/// # Errors
///
/// See [`LoadOptions::load_files`].
pub fn load_files(paths: &[impl AsRef<Path>]) -> Result<Vec<SparseDataset>> {
    LoadOptions::default().load_files(paths)
}

/// Parses SVMlight / libSVM text already in memory.
///
/// Legacy profile: no comments channel, and indices are kept exactly as
/// written; no index-base adjustment is applied.
///
/// # Examples
///
/// ```
/// let dataset = svmlight::load_str("-1 3:4.0\n1 2:1.0\n")?;
/// assert_eq!(dataset.labels(), &[-1.0, 1.0]);
/// assert_eq!(dataset.data(), &[4.0, 1.0]);
/// assert_eq!(dataset.indices(), &[3, 2]);
/// assert_eq!(dataset.indptr(), &[0, 1, 2]);
/// # Ok::<(), svmlight::Error>(())
/// ```
///
/// # Errors
///
/// [`Error::Syntax`] with a 1-based line number for malformed content.
pub fn load_str(content: &str) -> Result<SparseDataset> {
    let mut builder = DatasetBuilder::new();
    for (i, line) in content.lines().enumerate() {
        match parse_line(line) {
            Ok(ParsedLine::Comment) => {}
            Ok(ParsedLine::Record(record)) => builder.push_record(record)?,
            Err(source) => return Err(Error::syntax(i as u64 + 1, source)),
        }
    }
    builder.finish()
}

/// One sequential pass over one file: open, auto-detect compression,
/// parse line by line into an extended-profile builder.
fn build_from_file(path: &Path, buffer_bytes: usize) -> Result<SparseDataset> {
    let file = File::open(path).map_err(|e| Error::io(path, e))?;
    let reader = auto_detect_reader(file, path).map_err(|e| Error::io(path, e))?;
    let reader = BufReader::with_capacity(buffer_bytes, reader);

    let mut builder = DatasetBuilder::with_comments();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| Error::io(path, e))?;
        match parse_line(&line) {
            Ok(ParsedLine::Comment) => {}
            Ok(ParsedLine::Record(record)) => builder.push_record(record)?,
            Err(source) => return Err(Error::syntax(i as u64 + 1, source)),
        }
    }
    builder.finish()
}

/// Applies the index-base decision to a finished dataset. The shift is a
/// single pass over `indices`; `n_features` is re-inferred afterwards.
fn apply_index_base(dataset: SparseDataset, base: IndexBase) -> Result<SparseDataset> {
    let shift = match base {
        IndexBase::ZeroBased => false,
        IndexBase::Auto => dataset.indices().iter().min().is_some_and(|&min| min > 0),
        IndexBase::OneBased => {
            if dataset.indices().contains(&0) {
                return Err(Error::runtime(
                    "expected one-based indices but found index 0",
                ));
            }
            true
        }
    };
    if !shift {
        return Ok(dataset);
    }

    let (data, mut indices, indptr, labels, comments) = dataset.into_parts();
    for index in &mut indices {
        *index -= 1;
    }
    SparseDataset::from_parts(data, indices, indptr, labels, comments)
}

fn apply_n_features(dataset: SparseDataset, n_features: Option<usize>) -> Result<SparseDataset> {
    match n_features {
        Some(n) => dataset.with_n_features(n),
        None => Ok(dataset),
    }
}
