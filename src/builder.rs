//! Incremental CSR accumulation.
//!
//! [`DatasetBuilder`] flattens parsed records into the CSR arrays one at a
//! time. It owns the arrays exclusively while building; [`finish`] moves
//! them into an immutable [`SparseDataset`]. The driving loop (lines in,
//! records pushed, errors numbered) lives in the read module.
//!
//! Capacity is acquired with `try_reserve` before every append, so running
//! out of memory on a huge file surfaces as [`Error::Memory`] instead of
//! aborting the process. A failed build drops all accumulated state with
//! the builder; there is no partial dataset.
//!
//! [`finish`]: DatasetBuilder::finish

use crate::dataset::SparseDataset;
use crate::error::Result;
use crate::parser::Record;

/// Accumulates records into CSR arrays.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    data: Vec<f64>,
    indices: Vec<u32>,
    indptr: Vec<usize>,
    labels: Vec<f64>,
    comments: Option<Vec<String>>,
}

impl DatasetBuilder {
    /// Builder for the legacy profile: no comments channel.
    pub fn new() -> Self {
        DatasetBuilder::default()
    }

    /// Builder for the extended profile: inline comments are collected,
    /// one entry per row, empty string when a row has none.
    pub fn with_comments() -> Self {
        DatasetBuilder {
            comments: Some(Vec::new()),
            ..DatasetBuilder::default()
        }
    }

    /// Appends one record: label, row start offset, then the feature
    /// pairs in encountered order. A qid on the record is dropped; it is
    /// not part of the CSR outputs.
    ///
    /// # Errors
    ///
    /// [`Error::Memory`] when the arrays cannot grow.
    ///
    /// [`Error::Memory`]: crate::Error::Memory
    pub fn push_record(&mut self, record: Record) -> Result<()> {
        let Record {
            label,
            qid: _,
            features,
            comment,
        } = record;

        self.labels.try_reserve(1)?;
        self.indptr.try_reserve(1)?;
        self.data.try_reserve(features.len())?;
        self.indices.try_reserve(features.len())?;
        if let Some(comments) = &mut self.comments {
            comments.try_reserve(1)?;
        }

        self.labels.push(label);
        self.indptr.push(self.data.len());
        for (index, value) in features {
            self.indices.push(index);
            self.data.push(value);
        }
        if let Some(comments) = &mut self.comments {
            comments.push(comment.unwrap_or_default());
        }
        Ok(())
    }

    /// Number of records pushed so far.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Appends the closing offset and moves the arrays into a validated
    /// [`SparseDataset`]. An untouched builder yields the empty dataset
    /// (`labels = []`, `indptr = [0]`).
    pub fn finish(mut self) -> Result<SparseDataset> {
        self.indptr.try_reserve(1)?;
        self.indptr.push(self.data.len());
        SparseDataset::from_parts(
            self.data,
            self.indices,
            self.indptr,
            self.labels,
            self.comments,
        )
    }
}
