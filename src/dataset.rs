//! The in-memory CSR result bundle.
//!
//! A [`SparseDataset`] is what a load produces and what a dump consumes:
//! three CSR arrays (`data`, `indices`, `indptr`), one label per row, and
//! an optional per-row comments channel. Construction goes through
//! [`SparseDataset::from_parts`], which checks the CSR invariants once;
//! after that the dataset is immutable and safe to share between readers.
//!
//! Two profiles exist and stay distinct:
//! - extended (file loads): `comments` is `Some`, one entry per row, empty
//!   string meaning "no comment on this row";
//! - legacy (string loads): `comments` is `None`.

use crate::error::{Error, Result};

/// A sparse dataset in CSR form.
///
/// Invariants, checked at construction:
/// - `data.len() == indices.len()` (one column index per stored value),
/// - `indptr` is non-empty, starts at 0, is non-decreasing, and ends at
///   `data.len()`,
/// - `labels.len() == indptr.len() - 1`,
/// - when present, `comments.len() == labels.len()`.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseDataset {
    data: Vec<f64>,
    indices: Vec<u32>,
    indptr: Vec<usize>,
    labels: Vec<f64>,
    comments: Option<Vec<String>>,
    n_features: usize,
}

impl SparseDataset {
    /// Assembles a dataset from raw CSR arrays, validating the invariants
    /// above. `n_features` is inferred as the maximum column index plus
    /// one (zero for an empty dataset); widen it afterwards with
    /// [`SparseDataset::with_n_features`] if needed.
    ///
    /// # Errors
    ///
    /// [`Error::Runtime`] describing the first violated invariant.
    pub fn from_parts(
        data: Vec<f64>,
        indices: Vec<u32>,
        indptr: Vec<usize>,
        labels: Vec<f64>,
        comments: Option<Vec<String>>,
    ) -> Result<Self> {
        if data.len() != indices.len() {
            return Err(Error::runtime(format!(
                "data and indices length mismatch: {} vs {}",
                data.len(),
                indices.len()
            )));
        }
        let (Some(&first), Some(&last)) = (indptr.first(), indptr.last()) else {
            return Err(Error::runtime("indptr must not be empty"));
        };
        if first != 0 {
            return Err(Error::runtime(format!(
                "indptr must start at 0, found {first}"
            )));
        }
        if indptr.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(Error::runtime("indptr must be non-decreasing"));
        }
        if last != data.len() {
            return Err(Error::runtime(format!(
                "indptr must end at the stored-entry count: {} vs {}",
                last,
                data.len()
            )));
        }
        if labels.len() != indptr.len() - 1 {
            return Err(Error::runtime(format!(
                "labels length {} does not match row count {}",
                labels.len(),
                indptr.len() - 1
            )));
        }
        if let Some(comments) = &comments
            && comments.len() != labels.len()
        {
            return Err(Error::runtime(format!(
                "comments length {} does not match row count {}",
                comments.len(),
                labels.len()
            )));
        }

        let n_features = indices
            .iter()
            .max()
            .map(|&max| max as usize + 1)
            .unwrap_or(0);
        Ok(SparseDataset {
            data,
            indices,
            indptr,
            labels,
            comments,
            n_features,
        })
    }

    /// Widens the column count, keeping the arrays untouched. Used to line
    /// up train/test splits loaded from related files.
    ///
    /// # Errors
    ///
    /// [`Error::Runtime`] when `n_features` is smaller than the inferred
    /// count, which would leave stored indices out of range.
    pub fn with_n_features(mut self, n_features: usize) -> Result<Self> {
        if n_features < self.n_features {
            return Err(Error::runtime(format!(
                "n_features {} is smaller than the {} required by the data",
                n_features, self.n_features
            )));
        }
        self.n_features = n_features;
        Ok(self)
    }

    /// Concatenated feature values, record order.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Column index per stored value, parallel to [`SparseDataset::data`].
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Row offsets; row `i` owns entries `indptr[i]..indptr[i + 1]`.
    pub fn indptr(&self) -> &[usize] {
        &self.indptr
    }

    /// One target value per row.
    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Per-row comments for the extended profile, `None` for the legacy
    /// profile. An empty string means the row had no comment.
    pub fn comments(&self) -> Option<&[String]> {
        self.comments.as_deref()
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.labels.len()
    }

    /// Column count: inferred maximum index plus one, or a widened
    /// override.
    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.data.len()
    }

    /// True when the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Column indices and values of row `i`, or `None` out of range.
    pub fn row(&self, i: usize) -> Option<(&[u32], &[f64])> {
        let start = *self.indptr.get(i)?;
        let end = *self.indptr.get(i + 1)?;
        Some((&self.indices[start..end], &self.data[start..end]))
    }

    /// Hands the arrays back by move:
    /// `(data, indices, indptr, labels, comments)`.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        Vec<f64>,
        Vec<u32>,
        Vec<usize>,
        Vec<f64>,
        Option<Vec<String>>,
    ) {
        (
            self.data,
            self.indices,
            self.indptr,
            self.labels,
            self.comments,
        )
    }
}
