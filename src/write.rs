//! The inverse transform: CSR dataset back to SVMlight / libSVM text.
//!
//! Three surfaces:
//! - [`dump_string`]: render to an in-memory `String`, infallible;
//! - [`dump_file`]: one sequential pass to a file, transparently
//!   compressed by destination extension;
//! - [`dump_file_par`]: same bytes, rendered shard-by-shard in parallel
//!   (feature `parallel-io`).
//!
//! Record order and per-record feature order are preserved exactly.
//! Values go through `f64`'s `Display`, the shortest decimal that parses
//! back to the same float, so a write/load cycle is faithful. With
//! `zero_based = false` (the conventional disk form) every column index
//! is incremented by one on the way out.
//!
//! A record with zero stored features renders as a bare label line. The
//! parser rejects such a line on re-read; this mirrors the historical
//! behavior and is left as-is.

use std::fmt::Write as _;
use std::fs::{File, create_dir_all};
use std::io::Write;
use std::ops::Range;
use std::path::Path;

use crate::compression::auto_detect_writer;
use crate::dataset::SparseDataset;
use crate::error::{Error, Result};

/// Renders the whole dataset to a `String`, one record per line.
///
/// `zero_based = false` writes one-based column indices (the conventional
/// disk form); `true` writes them as stored.
///
/// # Examples
///
/// ```
/// let dataset = svmlight::load_str("-1 3:4.0\n1 2:1.0\n")?;
/// assert_eq!(svmlight::dump_string(&dataset, true), "-1 3:4\n1 2:1\n");
/// assert_eq!(svmlight::dump_string(&dataset, false), "-1 4:4\n1 3:1\n");
/// # Ok::<(), svmlight::Error>(())
/// ```
pub fn dump_string(dataset: &SparseDataset, zero_based: bool) -> String {
    render_rows(dataset, 0..dataset.n_rows(), zero_based)
}

/// Writes the dataset to `path`, one record per line, overwriting any
/// existing file. Parent directories are created as needed.
///
/// **Compression**: a `.gz`/`.bz2` destination extension selects the
/// matching codec when its feature is enabled.
///
/// # Errors
///
/// [`Error::Io`] when the destination cannot be created or written.
/// Bytes already flushed stay on disk; there is no rollback.
pub fn dump_file(path: impl AsRef<Path>, dataset: &SparseDataset, zero_based: bool) -> Result<()> {
    let path = path.as_ref();
    let mut writer = open_destination(path)?;

    let mut line = String::new();
    for row in 0..dataset.n_rows() {
        line.clear();
        render_row(&mut line, dataset, row, zero_based);
        writer
            .write_all(line.as_bytes())
            .map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Parallel [`dump_file`] with byte-identical output.
///
/// Contiguous row shards are rendered into in-memory buffers in parallel,
/// then concatenated in shard-index order through a single sequential
/// writer, so the file content never depends on thread scheduling and the
/// observable I/O stays one forward pass.
///
/// * `shards`: if `None`, defaults to `2 * num_cpus()`, clamped to the
///   row count.
///
/// # Errors
///
/// As [`dump_file`].
#[cfg(feature = "parallel-io")]
#[cfg_attr(docsrs, doc(cfg(feature = "parallel-io")))]
pub fn dump_file_par(
    path: impl AsRef<Path>,
    dataset: &SparseDataset,
    zero_based: bool,
    shards: Option<usize>,
) -> Result<()> {
    use rayon::prelude::*;

    let path = path.as_ref();
    let n = dataset.n_rows();
    let shard_count = shards.unwrap_or_else(|| 2 * num_cpus::get().max(2)).max(1);
    let ranges = split_ranges(n, shard_count);

    let mut buffers: Vec<(usize, String)> = ranges
        .into_par_iter()
        .map(|(idx, start, end)| (idx, render_rows(dataset, start..end, zero_based)))
        .collect();
    buffers.sort_by_key(|(idx, _)| *idx);

    let mut writer = open_destination(path)?;
    for (_, buf) in buffers {
        writer
            .write_all(buf.as_bytes())
            .map_err(|e| Error::io(path, e))?;
    }
    writer.flush().map_err(|e| Error::io(path, e))?;
    Ok(())
}

/// Creates the destination file (and parents) and wraps it per the
/// extension-selected codec.
fn open_destination(path: &Path) -> Result<Box<dyn Write>> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| Error::io(path, e))?;
    auto_detect_writer(file, path).map_err(|e| Error::io(path, e))
}

fn render_rows(dataset: &SparseDataset, rows: Range<usize>, zero_based: bool) -> String {
    let mut out = String::new();
    for row in rows {
        render_row(&mut out, dataset, row, zero_based);
    }
    out
}

/// Appends one rendered record plus newline. Row index must be in range.
fn render_row(out: &mut String, dataset: &SparseDataset, row: usize, zero_based: bool) {
    let indptr = dataset.indptr();
    let (start, end) = (indptr[row], indptr[row + 1]);
    // Disk indices go one-based unless asked otherwise; u64 arithmetic so
    // u32::MAX + 1 cannot wrap.
    let offset: u64 = if zero_based { 0 } else { 1 };

    // Formatting into a String cannot fail.
    let _ = write!(out, "{}", dataset.labels()[row]);
    for j in start..end {
        let index = dataset.indices()[j] as u64 + offset;
        let _ = write!(out, " {}:{}", index, dataset.data()[j]);
    }
    if let Some(comments) = dataset.comments()
        && !comments[row].is_empty()
    {
        let _ = write!(out, " # {}", comments[row]);
    }
    out.push('\n');
}

/// Split `[0, len)` into `parts` contiguous ranges as
/// `(shard_idx, start, end)`. Ranges are non-empty and cover the whole
/// domain; the remainder is spread over the leading shards.
#[cfg(feature = "parallel-io")]
fn split_ranges(len: usize, parts: usize) -> Vec<(usize, usize, usize)> {
    let parts = parts.max(1).min(len.max(1));
    let base = len / parts;
    let rem = len % parts;

    let mut out = Vec::with_capacity(parts);
    let mut start = 0usize;
    for idx in 0..parts {
        let extra = if idx < rem { 1 } else { 0 };
        let end = start + base + extra;
        if start < end {
            out.push((idx, start, end));
        }
        start = end;
    }
    out
}
