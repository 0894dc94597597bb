//! Fluent construction of test datasets.

use crate::dataset::SparseDataset;

/// A fluent builder for assembling a [`SparseDataset`] row by row in
/// tests, without going through the text format.
///
/// The comments channel is attached as soon as [`with_comments`] is
/// called or any row carries a comment; plain rows then hold an empty
/// string.
///
/// # Example
///
/// ```
/// use svmlight::testing::TestDatasetBuilder;
///
/// let dataset = TestDatasetBuilder::new()
///     .row(1.0, &[(0, 2.0), (4, -1.5)])
///     .row(-1.0, &[(2, 0.5)])
///     .build();
///
/// assert_eq!(dataset.n_rows(), 2);
/// assert_eq!(dataset.nnz(), 3);
/// assert_eq!(dataset.n_features(), 5);
/// ```
///
/// [`with_comments`]: TestDatasetBuilder::with_comments
#[derive(Debug, Default)]
pub struct TestDatasetBuilder {
    rows: Vec<(f64, Vec<(u32, f64)>, String)>,
    with_comments: bool,
}

impl TestDatasetBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        TestDatasetBuilder::default()
    }

    /// Attach the comments channel even if no row carries a comment.
    #[must_use]
    pub fn with_comments(mut self) -> Self {
        self.with_comments = true;
        self
    }

    /// Add one row.
    #[must_use]
    pub fn row(mut self, label: f64, features: &[(u32, f64)]) -> Self {
        self.rows.push((label, features.to_vec(), String::new()));
        self
    }

    /// Add one row with an inline comment. Implies [`with_comments`].
    ///
    /// [`with_comments`]: TestDatasetBuilder::with_comments
    #[must_use]
    pub fn commented_row(mut self, label: f64, features: &[(u32, f64)], comment: &str) -> Self {
        self.with_comments = true;
        self.rows.push((label, features.to_vec(), comment.to_string()));
        self
    }

    /// Add `n_rows` deterministic synthetic rows with `row_nnz` entries
    /// each. Labels alternate between 1 and -1; indices and values are
    /// derived arithmetically, so two builders produce identical data.
    ///
    /// # Example
    ///
    /// ```
    /// use svmlight::testing::TestDatasetBuilder;
    ///
    /// let dataset = TestDatasetBuilder::new().synthetic_rows(100, 4).build();
    /// assert_eq!(dataset.n_rows(), 100);
    /// assert_eq!(dataset.nnz(), 400);
    /// ```
    #[must_use]
    pub fn synthetic_rows(mut self, n_rows: usize, row_nnz: usize) -> Self {
        for r in 0..n_rows {
            let label = if r % 2 == 0 { 1.0 } else { -1.0 };
            let features: Vec<(u32, f64)> = (0..row_nnz)
                .map(|j| {
                    let index = (j * 7 + r % 5) as u32;
                    let value = (r * row_nnz + j) as f64 * 0.25 - 1.0;
                    (index, value)
                })
                .collect();
            self.rows.push((label, features, String::new()));
        }
        self
    }

    /// Number of rows added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when no rows were added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Flatten the rows into a validated [`SparseDataset`].
    ///
    /// # Panics
    ///
    /// Panics if the accumulated arrays fail CSR validation, which this
    /// API cannot produce.
    #[must_use]
    pub fn build(self) -> SparseDataset {
        let n_rows = self.rows.len();
        let mut data = Vec::new();
        let mut indices = Vec::new();
        let mut indptr = Vec::with_capacity(n_rows + 1);
        let mut labels = Vec::with_capacity(n_rows);
        let mut comments = Vec::with_capacity(n_rows);

        for (label, features, comment) in self.rows {
            labels.push(label);
            indptr.push(data.len());
            for (index, value) in features {
                indices.push(index);
                data.push(value);
            }
            comments.push(comment);
        }
        indptr.push(data.len());

        let comments = self.with_comments.then_some(comments);
        SparseDataset::from_parts(data, indices, indptr, labels, comments)
            .expect("builder rows form a consistent dataset")
    }
}
