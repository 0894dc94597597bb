//! Assertion functions for comparing datasets and float arrays.
//!
//! Labels and values are compared with a tolerance, since they may have
//! passed through a decimal rendering; the structural arrays (`indices`,
//! `indptr`) and the comments channel are compared exactly.

use crate::dataset::SparseDataset;

/// Default tolerance for float comparisons. `f64` display rendering is
/// read back exactly, so this only needs to absorb arithmetic done by the
/// test itself.
pub const DEFAULT_TOLERANCE: f64 = 1e-12;

/// Assert that two floats are equal within `tolerance`.
///
/// Exact equality short-circuits first, so infinities compare equal to
/// themselves. `NaN` never passes.
///
/// # Panics
///
/// Panics if the values differ by more than `tolerance`.
///
/// # Example
///
/// ```
/// use svmlight::testing::assert_close;
///
/// assert_close(0.1 + 0.2, 0.3, 1e-12);
/// ```
pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        actual == expected || (actual - expected).abs() <= tolerance,
        "Float mismatch:\n  Expected: {expected}\n  Actual: {actual}\n  Tolerance: {tolerance}"
    );
}

/// Assert that two float slices are equal element-wise within
/// `tolerance`.
///
/// # Panics
///
/// Panics if the slices differ in length or any element pair differs by
/// more than `tolerance`.
///
/// # Example
///
/// ```
/// use svmlight::testing::assert_slices_close;
///
/// assert_slices_close(&[1.0, 2.0], &[1.0, 2.0], 1e-12);
/// ```
pub fn assert_slices_close(actual: &[f64], expected: &[f64], tolerance: f64) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Slice length mismatch:\n  Expected length: {}\n  Actual length: {}\n  Expected: {expected:?}\n  Actual: {actual:?}",
        expected.len(),
        actual.len()
    );
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a == e || (a - e).abs() <= tolerance,
            "Slice mismatch at index {i}:\n  Expected: {e}\n  Actual: {a}\n  Full expected: {expected:?}\n  Full actual: {actual:?}"
        );
    }
}

/// Assert that two datasets are equal: structure and comments exactly,
/// labels and values within [`DEFAULT_TOLERANCE`].
///
/// # Panics
///
/// Panics on the first differing component, naming it.
///
/// # Example
///
/// ```
/// use svmlight::testing::{assert_datasets_close, sample_dataset};
///
/// assert_datasets_close(&sample_dataset(), &sample_dataset());
/// ```
pub fn assert_datasets_close(actual: &SparseDataset, expected: &SparseDataset) {
    assert_eq!(
        actual.n_rows(),
        expected.n_rows(),
        "Row count mismatch:\n  Expected: {}\n  Actual: {}",
        expected.n_rows(),
        actual.n_rows()
    );
    assert_eq!(
        actual.n_features(),
        expected.n_features(),
        "Feature count mismatch:\n  Expected: {}\n  Actual: {}",
        expected.n_features(),
        actual.n_features()
    );
    assert_eq!(
        actual.indptr(),
        expected.indptr(),
        "indptr mismatch:\n  Expected: {:?}\n  Actual: {:?}",
        expected.indptr(),
        actual.indptr()
    );
    assert_eq!(
        actual.indices(),
        expected.indices(),
        "indices mismatch:\n  Expected: {:?}\n  Actual: {:?}",
        expected.indices(),
        actual.indices()
    );
    assert_slices_close(actual.data(), expected.data(), DEFAULT_TOLERANCE);
    assert_slices_close(actual.labels(), expected.labels(), DEFAULT_TOLERANCE);
    assert_eq!(
        actual.comments(),
        expected.comments(),
        "Comments mismatch:\n  Expected: {:?}\n  Actual: {:?}",
        expected.comments(),
        actual.comments()
    );
}

/// Assert the CSR invariants of a dataset: offsets start at zero, never
/// decrease, and close at the stored-entry count; array lengths line up.
///
/// # Panics
///
/// Panics if any invariant is violated.
///
/// # Example
///
/// ```
/// use svmlight::testing::{assert_csr_consistent, sample_dataset};
///
/// assert_csr_consistent(&sample_dataset());
/// ```
pub fn assert_csr_consistent(dataset: &SparseDataset) {
    let indptr = dataset.indptr();
    assert_eq!(
        indptr.first(),
        Some(&0),
        "indptr must start at 0: {indptr:?}"
    );
    assert!(
        indptr.windows(2).all(|pair| pair[0] <= pair[1]),
        "indptr must be non-decreasing: {indptr:?}"
    );
    assert_eq!(
        indptr.last(),
        Some(&dataset.nnz()),
        "indptr must end at nnz {}: {indptr:?}",
        dataset.nnz()
    );
    assert_eq!(
        indptr.len(),
        dataset.n_rows() + 1,
        "indptr length must be row count + 1"
    );
    assert_eq!(
        dataset.data().len(),
        dataset.indices().len(),
        "data and indices must be parallel"
    );
    if let Some(comments) = dataset.comments() {
        assert_eq!(
            comments.len(),
            dataset.n_rows(),
            "comments must have one entry per row"
        );
    }
}
