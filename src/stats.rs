//! Dataset summaries.
//!
//! The crate never logs; its observability surface is this module. A
//! [`DatasetStats`] is a plain snapshot of a loaded dataset (shape,
//! sparsity, label range) that can be printed for a quick look or saved
//! as JSON for tooling.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::dataset::SparseDataset;
use crate::error::{Error, Result};

/// Summary statistics of one [`SparseDataset`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetStats {
    /// Number of rows.
    pub n_rows: usize,
    /// Column count (inferred or widened).
    pub n_features: usize,
    /// Stored entries.
    pub nnz: usize,
    /// `nnz / (n_rows * n_features)`, 0 for an empty shape.
    pub density: f64,
    /// Smallest per-row entry count, 0 when there are no rows.
    pub min_row_nnz: usize,
    /// Largest per-row entry count, 0 when there are no rows.
    pub max_row_nnz: usize,
    /// Mean per-row entry count, 0 when there are no rows.
    pub avg_row_nnz: f64,
    /// Smallest label, `None` when there are no rows.
    pub label_min: Option<f64>,
    /// Largest label, `None` when there are no rows.
    pub label_max: Option<f64>,
}

impl DatasetStats {
    /// Computes the summary in one pass over the offsets and labels.
    #[must_use]
    pub fn collect(dataset: &SparseDataset) -> Self {
        let n_rows = dataset.n_rows();
        let n_features = dataset.n_features();
        let nnz = dataset.nnz();

        let cells = n_rows.saturating_mul(n_features);
        let density = if cells == 0 {
            0.0
        } else {
            nnz as f64 / cells as f64
        };

        let mut min_row_nnz = 0;
        let mut max_row_nnz = 0;
        if n_rows > 0 {
            min_row_nnz = usize::MAX;
            for pair in dataset.indptr().windows(2) {
                let row_nnz = pair[1] - pair[0];
                min_row_nnz = min_row_nnz.min(row_nnz);
                max_row_nnz = max_row_nnz.max(row_nnz);
            }
        }
        let avg_row_nnz = if n_rows == 0 {
            0.0
        } else {
            nnz as f64 / n_rows as f64
        };

        let label_min = dataset.labels().iter().copied().reduce(f64::min);
        let label_max = dataset.labels().iter().copied().reduce(f64::max);

        DatasetStats {
            n_rows,
            n_features,
            nnz,
            density,
            min_row_nnz,
            max_row_nnz,
            avg_row_nnz,
            label_min,
            label_max,
        }
    }

    /// The summary as a JSON value.
    #[must_use]
    pub fn to_json(&self) -> Value {
        serde_json::json!(self)
    }

    /// Prints the summary to stdout in a human-readable format.
    pub fn print(&self) {
        println!("\n========== Dataset Summary ==========");
        println!("rows:         {}", self.n_rows);
        println!("features:     {}", self.n_features);
        println!("stored nnz:   {}", self.nnz);
        println!("density:      {:.6}", self.density);
        println!(
            "row nnz:      min {} / avg {:.2} / max {}",
            self.min_row_nnz, self.avg_row_nnz, self.max_row_nnz
        );
        if let (Some(min), Some(max)) = (self.label_min, self.label_max) {
            println!("label range:  [{min}, {max}]");
        }
        println!("=====================================\n");
    }

    /// Saves the summary to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// [`Error::Io`] when the file cannot be created or written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let formatted = serde_json::to_string_pretty(self)
            .map_err(|e| Error::runtime(format!("serialize dataset stats: {e}")))?;
        let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
        file.write_all(formatted.as_bytes())
            .map_err(|e| Error::io(path, e))?;
        Ok(())
    }
}

impl SparseDataset {
    /// Shorthand for [`DatasetStats::collect`].
    #[must_use]
    pub fn stats(&self) -> DatasetStats {
        DatasetStats::collect(self)
    }
}
