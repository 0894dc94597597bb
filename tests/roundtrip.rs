use svmlight::testing::{TestDatasetBuilder, assert_datasets_close};
use svmlight::{IndexBase, LoadOptions, dump_file, dump_string, load_file, load_str};

#[test]
fn write_then_load_preserves_the_dataset() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("cycle.svm");
    let dataset = TestDatasetBuilder::new()
        .commented_row(1.0, &[(0, 2.5), (4, -0.5)], "first")
        .row(-1.0, &[(2, 1e-3)])
        .commented_row(0.5, &[(1, 9.5), (3, 0.25)], "third")
        .build();

    dump_file(&path, &dataset, false)?;
    let reloaded = load_file(&path)?;
    assert_datasets_close(&reloaded, &dataset);
    Ok(())
}

#[test]
fn string_roundtrip_is_exact_for_stored_indices() -> anyhow::Result<()> {
    let dataset = TestDatasetBuilder::new().synthetic_rows(50, 3).build();
    let reloaded = load_str(&dump_string(&dataset, true))?;
    assert_eq!(reloaded, dataset);
    Ok(())
}

#[test]
fn zero_based_write_and_pinned_read_are_an_identity() -> anyhow::Result<()> {
    // Index 0 appears in the data, so an auto read would also leave the
    // indices alone; pinning the base makes the contract explicit.
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("zero.svm");
    let dataset = TestDatasetBuilder::new()
        .with_comments()
        .row(1.0, &[(0, 1.5), (2, -2.0)])
        .row(-1.0, &[(1, 0.5)])
        .build();

    dump_file(&path, &dataset, true)?;
    let reloaded = LoadOptions::new()
        .index_base(IndexBase::ZeroBased)
        .load_file(&path)?;
    assert_datasets_close(&reloaded, &dataset);
    Ok(())
}

#[test]
fn output_is_a_fixed_point_of_the_load_dump_cycle() -> anyhow::Result<()> {
    // Irregular spacing and comment layout normalize on the first pass;
    // after that the text reproduces itself exactly.
    let dir = tempfile::tempdir()?;
    let messy = dir.path().join("messy.svm");
    std::fs::write(&messy, "  1   1:2.5   #  note\n-1\t3:4 7:0.5\n")?;

    let normalized = dump_string(&load_file(&messy)?, false);
    let again = dir.path().join("again.svm");
    std::fs::write(&again, &normalized)?;
    assert_eq!(dump_string(&load_file(&again)?, false), normalized);
    Ok(())
}

#[cfg(feature = "parallel-io")]
mod parallel {
    use std::fs;

    use svmlight::dump_file_par;

    use super::*;

    #[test]
    fn parallel_dump_is_byte_identical() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let sequential = dir.path().join("seq.svm");
        let parallel = dir.path().join("par.svm");
        let dataset = TestDatasetBuilder::new().synthetic_rows(1000, 4).build();

        dump_file(&sequential, &dataset, false)?;
        dump_file_par(&parallel, &dataset, false, Some(7))?;
        assert_eq!(fs::read(&sequential)?, fs::read(&parallel)?);
        Ok(())
    }

    #[test]
    fn parallel_dump_with_default_shards() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("par.svm");
        let dataset = TestDatasetBuilder::new().synthetic_rows(33, 2).build();

        dump_file_par(&path, &dataset, true, None)?;
        assert_eq!(fs::read_to_string(&path)?, dump_string(&dataset, true));
        Ok(())
    }

    #[test]
    fn parallel_dump_of_an_empty_dataset() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("empty.svm");
        let dataset = svmlight::load_str("")?;

        dump_file_par(&path, &dataset, false, Some(4))?;
        assert_eq!(fs::read_to_string(&path)?, "");
        Ok(())
    }
}
