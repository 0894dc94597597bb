//! Pre-built corpora and datasets for common testing scenarios.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::dataset::SparseDataset;
use crate::error::{Error, Result};

/// A small corpus exercising the whole line grammar: a comment-only line,
/// an inline comment, a qid annotation, and an exponent-form value.
/// Indices are one-based, the conventional disk form.
///
/// # Example
///
/// ```
/// use svmlight::testing::sample_corpus;
///
/// let dataset = svmlight::load_str(sample_corpus())?;
/// assert_eq!(dataset.n_rows(), 3);
/// # Ok::<(), svmlight::Error>(())
/// ```
#[must_use]
pub fn sample_corpus() -> &'static str {
    "# three-row sample corpus\n\
     -1 1:2.5 4:-0.5 # first row\n\
     2 qid:7 2:1 3:9.5\n\
     0.5 6:1e-3\n"
}

/// The dataset a default file load produces from [`sample_corpus`]:
/// extended profile, indices rebased to zero-based.
#[must_use]
pub fn sample_dataset() -> SparseDataset {
    SparseDataset::from_parts(
        vec![2.5, -0.5, 1.0, 9.5, 1e-3],
        vec![0, 3, 1, 2, 5],
        vec![0, 2, 4, 5],
        vec![-1.0, 2.0, 0.5],
        Some(vec!["first row".to_string(), String::new(), String::new()]),
    )
    .expect("sample arrays are consistent")
}

/// The dataset a string load produces from [`sample_corpus`]: legacy
/// profile, indices exactly as written.
#[must_use]
pub fn sample_dataset_raw() -> SparseDataset {
    SparseDataset::from_parts(
        vec![2.5, -0.5, 1.0, 9.5, 1e-3],
        vec![1, 4, 2, 3, 6],
        vec![0, 2, 4, 5],
        vec![-1.0, 2.0, 0.5],
        None,
    )
    .expect("sample arrays are consistent")
}

/// Writes `contents` to `dir/name` and returns the full path.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be created or written.
pub fn write_corpus(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut file = File::create(&path).map_err(|e| Error::io(&path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| Error::io(&path, e))?;
    Ok(path)
}

/// Writes `contents` into a fresh temporary directory as `corpus.svm`.
///
/// Returns the directory guard together with the file path; the file is
/// removed when the guard drops.
///
/// # Errors
///
/// [`Error::Io`] when the directory or file cannot be created.
pub fn temp_corpus(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().map_err(|e| Error::io(std::env::temp_dir(), e))?;
    let path = write_corpus(dir.path(), "corpus.svm", contents)?;
    Ok((dir, path))
}
