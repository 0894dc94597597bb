//! Testing utilities for code that reads and writes sparse datasets.
//!
//! This module ships with the crate so downstream users can test their
//! own loading and dumping paths with the same helpers the crate's tests
//! use:
//!
//! - **Fixtures**: a known-good corpus plus its expected datasets, and
//!   temp-file helpers ([`sample_corpus`], [`temp_corpus`])
//! - **Builders**: assemble datasets row by row without text
//!   ([`TestDatasetBuilder`])
//! - **Assertions**: tolerance-aware dataset comparison and CSR invariant
//!   checks ([`assert_datasets_close`], [`assert_csr_consistent`])
//!
//! # Quick Start
//!
//! ```
//! use svmlight::testing::*;
//!
//! let (dir, path) = temp_corpus(sample_corpus())?;
//! let dataset = svmlight::load_file(&path)?;
//! assert_datasets_close(&dataset, &sample_dataset());
//! drop(dir);
//! # Ok::<(), svmlight::Error>(())
//! ```

pub mod assertions;
pub mod builders;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
