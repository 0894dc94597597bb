//! Transparent compression for dataset files.
//!
//! SVMlight corpora are routinely shipped gzip- or bzip2-compressed. This
//! module lets the load and dump paths treat `train.svm.gz` exactly like
//! `train.svm`: readers are auto-detected, writers are chosen from the
//! destination extension.
//!
//! Detection strategy for reads: the path extension is checked first, then
//! the stream's leading magic bytes, so a compressed file survives being
//! renamed without its extension. Writes go by extension alone.
//!
//! Built-in codecs, each behind its feature flag:
//! - gzip (`.gz`, `.gzip`) via `flate2` (feature `compression-gzip`)
//! - bzip2 (`.bz2`, `.bzip2`) via `bzip2` (feature `compression-bzip2`)
//!
//! Additional formats can be plugged in through [`register_codec`] without
//! touching this crate. With no compression features enabled, the
//! auto-detection functions degrade to plain buffered pass-throughs.
//!
//! Compressed writers finish their stream when dropped; callers flush
//! before dropping so everything except the trailing checksum block has
//! been pushed through error reporting.

use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Global codec registry.
static CODEC_REGISTRY: RwLock<Option<Vec<Arc<dyn CompressionCodec>>>> = RwLock::new(None);

fn init_registry() -> Vec<Arc<dyn CompressionCodec>> {
    vec![
        #[cfg(feature = "compression-gzip")]
        Arc::new(GzipCodec),
        #[cfg(feature = "compression-bzip2")]
        Arc::new(Bzip2Codec),
    ]
}

fn get_registry() -> Vec<Arc<dyn CompressionCodec>> {
    let mut lock = CODEC_REGISTRY.write().unwrap();
    if lock.is_none() {
        *lock = Some(init_registry());
    }
    lock.as_ref().unwrap().clone()
}

/// Registers a custom compression codec alongside the built-in ones.
///
/// # Examples
/// ```
/// use svmlight::compression::{register_codec, CompressionCodec};
/// use std::io::{Read, Write};
/// use std::sync::Arc;
///
/// struct Passthrough;
/// impl CompressionCodec for Passthrough {
///     fn name(&self) -> &str { "passthrough" }
///     fn extensions(&self) -> &[&str] { &[".raw"] }
///     fn magic_bytes(&self) -> Option<&[u8]> { None }
///     fn wrap_reader_dyn(&self, r: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
///         Ok(r)
///     }
///     fn wrap_writer_dyn(&self, w: Box<dyn Write>) -> std::io::Result<Box<dyn Write>> {
///         Ok(w)
///     }
/// }
///
/// register_codec(Arc::new(Passthrough));
/// ```
pub fn register_codec(codec: Arc<dyn CompressionCodec>) {
    let mut lock = CODEC_REGISTRY.write().unwrap();
    if lock.is_none() {
        *lock = Some(init_registry());
    }
    lock.as_mut().unwrap().push(codec);
}

/// A pluggable compression algorithm.
///
/// Codecs are matched by file extension first and magic bytes second.
/// Implementations must be `Send + Sync`; they live in a global registry
/// shared across threads.
pub trait CompressionCodec: Send + Sync {
    /// Codec name (e.g. "gzip").
    fn name(&self) -> &str;

    /// Matching file extensions, lowercase with the leading dot.
    fn extensions(&self) -> &[&str];

    /// Leading magic bytes, or `None` when the format has no reliable
    /// signature.
    fn magic_bytes(&self) -> Option<&[u8]>;

    /// Wraps a reader so the stream comes out decompressed.
    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>>;

    /// Wraps a writer so the stream goes down compressed. The returned
    /// writer finishes its stream on drop.
    fn wrap_writer_dyn(&self, writer: Box<dyn Write>) -> io::Result<Box<dyn Write>>;
}

/// First registered codec whose extension matches the path,
/// case-insensitively.
fn detect_from_extension(path: impl AsRef<Path>) -> Option<Arc<dyn CompressionCodec>> {
    let path_str = path.as_ref().to_string_lossy().to_lowercase();
    for codec in get_registry() {
        for ext in codec.extensions() {
            if path_str.ends_with(ext) {
                return Some(codec.clone());
            }
        }
    }
    None
}

/// First registered codec whose magic bytes lead the stream. Peeks via the
/// buffer; the reader is not advanced.
fn detect_from_magic<R: BufRead>(reader: &mut R) -> Option<Arc<dyn CompressionCodec>> {
    let buf = reader.fill_buf().ok()?;
    if buf.is_empty() {
        return None;
    }
    for codec in get_registry() {
        if let Some(magic) = codec.magic_bytes()
            && buf.len() >= magic.len()
            && buf.starts_with(magic)
        {
            return Some(codec.clone());
        }
    }
    None
}

/// Wraps `reader` with decompression when `path_hint`'s extension or the
/// stream's magic bytes match a registered codec; otherwise returns the
/// stream buffered and untouched.
pub fn auto_detect_reader<R: Read + 'static>(
    reader: R,
    path_hint: impl AsRef<Path>,
) -> io::Result<Box<dyn Read>> {
    if let Some(codec) = detect_from_extension(&path_hint) {
        return codec.wrap_reader_dyn(Box::new(reader));
    }

    let mut buf_reader = BufReader::new(reader);
    if let Some(codec) = detect_from_magic(&mut buf_reader) {
        return codec.wrap_reader_dyn(Box::new(buf_reader));
    }

    Ok(Box::new(buf_reader))
}

/// Wraps `writer` with compression when `path_hint`'s extension matches a
/// registered codec; otherwise returns it buffered and untouched.
pub fn auto_detect_writer<W: Write + 'static>(
    writer: W,
    path_hint: impl AsRef<Path>,
) -> io::Result<Box<dyn Write>> {
    if let Some(codec) = detect_from_extension(&path_hint) {
        return codec.wrap_writer_dyn(Box::new(writer));
    }
    Ok(Box::new(BufWriter::new(writer)))
}

#[cfg(feature = "compression-gzip")]
struct GzipCodec;

#[cfg(feature = "compression-gzip")]
impl CompressionCodec for GzipCodec {
    fn name(&self) -> &str {
        "gzip"
    }

    fn extensions(&self) -> &[&str] {
        &[".gz", ".gzip"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x1f, 0x8b])
    }

    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    fn wrap_writer_dyn(&self, writer: Box<dyn Write>) -> io::Result<Box<dyn Write>> {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        Ok(Box::new(GzEncoder::new(writer, Compression::default())))
    }
}

#[cfg(feature = "compression-bzip2")]
struct Bzip2Codec;

#[cfg(feature = "compression-bzip2")]
impl CompressionCodec for Bzip2Codec {
    fn name(&self) -> &str {
        "bzip2"
    }

    fn extensions(&self) -> &[&str] {
        &[".bz2", ".bzip2"]
    }

    fn magic_bytes(&self) -> Option<&[u8]> {
        Some(&[0x42, 0x5a])
    }

    fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> io::Result<Box<dyn Read>> {
        use bzip2::read::BzDecoder;
        Ok(Box::new(BzDecoder::new(reader)))
    }

    fn wrap_writer_dyn(&self, writer: Box<dyn Write>) -> io::Result<Box<dyn Write>> {
        use bzip2::Compression;
        use bzip2::write::BzEncoder;
        Ok(Box::new(BzEncoder::new(writer, Compression::default())))
    }
}
