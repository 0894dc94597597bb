#[cfg(any(feature = "compression-gzip", feature = "compression-bzip2"))]
mod compression_tests {
    use std::fs;
    use std::io::{Cursor, Read, Write};
    use std::sync::Arc;

    use svmlight::compression::{CompressionCodec, auto_detect_reader, register_codec};
    use svmlight::testing::{TestDatasetBuilder, assert_datasets_close};
    use svmlight::{SparseDataset, dump_file, dump_string, load_file};

    /// File loads come back in the extended profile, so the comparison
    /// fixture carries an (empty) comments channel too.
    fn fixture() -> SparseDataset {
        TestDatasetBuilder::new()
            .with_comments()
            .synthetic_rows(200, 5)
            .build()
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn gzip_roundtrip_by_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.svm.gz");
        let dataset = fixture();

        dump_file(&path, &dataset, false)?;
        assert_datasets_close(&load_file(&path)?, &dataset);

        // The bytes on disk are really compressed.
        let on_disk = fs::metadata(&path)?.len();
        assert!(on_disk < dump_string(&dataset, false).len() as u64);
        Ok(())
    }

    #[cfg(feature = "compression-bzip2")]
    #[test]
    fn bzip2_roundtrip_by_extension() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.svm.bz2");
        let dataset = fixture();

        dump_file(&path, &dataset, false)?;
        assert_datasets_close(&load_file(&path)?, &dataset);

        let on_disk = fs::metadata(&path)?.len();
        assert!(on_disk < dump_string(&dataset, false).len() as u64);
        Ok(())
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn renamed_gzip_file_is_detected_by_magic_bytes() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let gz = dir.path().join("corpus.svm.gz");
        let disguised = dir.path().join("corpus.dat");
        let dataset = fixture();

        dump_file(&gz, &dataset, false)?;
        fs::rename(&gz, &disguised)?;
        assert_datasets_close(&load_file(&disguised)?, &dataset);
        Ok(())
    }

    #[cfg(feature = "compression-gzip")]
    #[test]
    fn extension_matching_is_case_insensitive() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("CORPUS.SVM.GZ");
        let dataset = fixture();

        dump_file(&path, &dataset, false)?;
        let on_disk = fs::read(&path)?;
        assert!(on_disk.starts_with(&[0x1f, 0x8b]));
        assert_datasets_close(&load_file(&path)?, &dataset);
        Ok(())
    }

    #[test]
    fn plain_destination_passes_through_untouched() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.svm");
        let dataset = fixture();

        dump_file(&path, &dataset, false)?;
        assert_eq!(fs::read_to_string(&path)?, dump_string(&dataset, false));
        Ok(())
    }

    #[test]
    fn custom_codecs_participate_in_detection() -> anyhow::Result<()> {
        struct NoOpCodec;

        impl CompressionCodec for NoOpCodec {
            fn name(&self) -> &str {
                "noop"
            }

            fn extensions(&self) -> &[&str] {
                &[".noop"]
            }

            fn magic_bytes(&self) -> Option<&[u8]> {
                None
            }

            fn wrap_reader_dyn(&self, reader: Box<dyn Read>) -> std::io::Result<Box<dyn Read>> {
                Ok(reader)
            }

            fn wrap_writer_dyn(&self, writer: Box<dyn Write>) -> std::io::Result<Box<dyn Write>> {
                Ok(writer)
            }
        }

        register_codec(Arc::new(NoOpCodec));

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("corpus.svm.noop");
        let dataset = fixture();

        dump_file(&path, &dataset, false)?;
        assert_eq!(fs::read_to_string(&path)?, dump_string(&dataset, false));
        assert_datasets_close(&load_file(&path)?, &dataset);
        Ok(())
    }

    #[test]
    fn short_streams_do_not_confuse_magic_detection() -> anyhow::Result<()> {
        // One byte is less than any registered magic sequence; detection
        // must fall back to a pass-through without consuming the stream.
        let mut reader = auto_detect_reader(Cursor::new(vec![0x1f]), "stub.dat")?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        assert_eq!(bytes, [0x1f]);
        Ok(())
    }

    #[test]
    fn empty_streams_pass_through() -> anyhow::Result<()> {
        let mut reader = auto_detect_reader(Cursor::new(Vec::new()), "stub.dat")?;
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        assert!(bytes.is_empty());
        Ok(())
    }
}

#[cfg(not(any(feature = "compression-gzip", feature = "compression-bzip2")))]
#[test]
fn compression_tests_skipped() {
    // Keeps this test target compiling when no compression feature is on.
}
