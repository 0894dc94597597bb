//! Example demonstrating corpus loading, index rebasing, and conversion.
//!
//! This example shows:
//! - Loading a conventional one-based corpus into CSR arrays
//! - Automatic index rebasing and explicit index-base control
//! - Writing the normalized corpus back out, optionally compressed
//!
//! Run with: `cargo run --example convert`

use std::fs::{read_to_string, remove_file, write};

use anyhow::Result as AnyhowResult;
use svmlight::{IndexBase, LoadOptions, dump_file, dump_string, load_file};

fn main() -> AnyhowResult<()> {
    println!("=== SVMlight Conversion Demo ===\n");

    // A deliberately messy corpus: irregular spacing, a header comment,
    // an inline comment, and a qid annotation.
    let corpus = "\
# synthetic ranking corpus
3   1:0.5  7:2 # relevant
1 qid:4 2:1.5 3:-0.25
0.5\t5:1e-2
";
    write("demo_corpus.svm", corpus)?;
    println!("📝 Wrote demo_corpus.svm:\n{corpus}");

    // 1. Default load: comments preserved, indices rebased to zero-based
    //    because the smallest index on disk is 1.
    let dataset = load_file("demo_corpus.svm")?;
    println!(
        "📖 Loaded {} rows x {} features ({} stored entries)",
        dataset.n_rows(),
        dataset.n_features(),
        dataset.nnz()
    );
    println!("   indices after auto rebase: {:?}\n", dataset.indices());

    // 2. The same file with the rebase disabled.
    let raw = LoadOptions::new()
        .index_base(IndexBase::ZeroBased)
        .load_file("demo_corpus.svm")?;
    println!("🔧 Raw indices without rebasing: {:?}\n", raw.indices());

    // 3. Write the normalized corpus back out, one-based again.
    dump_file("converted.svm", &dataset, false)?;
    println!("✅ Normalized corpus in converted.svm:");
    print!("{}", read_to_string("converted.svm")?);
    println!();

    // The normalized text is a fixed point: converting it again changes
    // nothing.
    let again = load_file("converted.svm")?;
    assert_eq!(dump_string(&again, false), dump_string(&dataset, false));
    println!("✅ Second conversion is byte-identical\n");

    #[cfg(feature = "compression-gzip")]
    {
        use std::fs::metadata;

        // 4. A .gz destination compresses transparently.
        dump_file("converted.svm.gz", &dataset, false)?;
        let plain = metadata("converted.svm")?.len();
        let packed = metadata("converted.svm.gz")?.len();
        println!("📦 Compressed conversion: {plain} bytes -> {packed} bytes");

        let reloaded = load_file("converted.svm.gz")?;
        assert_eq!(reloaded, dataset);
        println!("✅ Compressed file loads back identically\n");

        remove_file("converted.svm.gz")?;
    }

    remove_file("demo_corpus.svm")?;
    remove_file("converted.svm")?;

    println!("=== Demo Complete ===");
    Ok(())
}
