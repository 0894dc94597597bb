//! Example demonstrating dataset summary reports.
//!
//! This example shows:
//! - Collecting shape, sparsity, and label-range statistics
//! - Printing a human-readable summary
//! - Saving the summary as JSON for downstream tooling
//! - Loading a train/test pair with a shared column count
//!
//! Run with: `cargo run --example dataset_report`

use std::fs::{read_to_string, remove_file, write};

use anyhow::Result as AnyhowResult;
use svmlight::load_files;

fn main() -> AnyhowResult<()> {
    println!("=== Dataset Report Demo ===\n");

    // A small train/test split. The test file mentions fewer columns, so
    // a joint load widens it to match.
    write(
        "demo_train.svm",
        "1 1:0.5 4:2 9:-1\n-1 2:1.5 3:0.25\n1 1:1 9:3.5\n-1 5:0.75\n",
    )?;
    write("demo_test.svm", "1 2:0.5 3:1\n-1 4:2.25\n")?;

    let datasets = load_files(&["demo_train.svm", "demo_test.svm"])?;
    println!(
        "📖 Loaded train ({} rows) and test ({} rows), both {} columns wide\n",
        datasets[0].n_rows(),
        datasets[1].n_rows(),
        datasets[0].n_features()
    );

    // 1. Human-readable summary of the training split.
    let stats = datasets[0].stats();
    stats.print();

    // 2. The same summary as JSON, for dashboards or CI checks.
    stats.save_to_file("dataset_report.json")?;
    println!("💾 Saved dataset_report.json:");
    println!("{}\n", read_to_string("dataset_report.json")?);

    // 3. Quick checks against the report fields.
    let json = stats.to_json();
    println!("🔎 density from JSON view: {}", json["density"]);
    println!("🔎 label range: [{:?}, {:?}]", stats.label_min, stats.label_max);

    remove_file("demo_train.svm")?;
    remove_file("demo_test.svm")?;
    remove_file("dataset_report.json")?;

    println!("\n=== Demo Complete ===");
    Ok(())
}
