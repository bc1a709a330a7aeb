//! Generate a toy regression dataset and print the pieces a model-fitting
//! script would consume.
//!
//! Run with:
//! ```bash
//! cargo run --example quickstart
//! ```

use synthreg::{generate, GenerateConfig};

fn main() -> Result<(), synthreg::GenerateError> {
    // =========================================================================
    // 1. Configure
    // =========================================================================
    // 50 observations of a single noisy-linear feature; the diagnostic
    // scatter goes to stdout.
    let config = GenerateConfig::builder()
        .feature_count(1)
        .sample_count(50)
        .noise(10.0)
        .build();

    // =========================================================================
    // 2. Generate
    // =========================================================================
    let data = generate(&config)?;

    // =========================================================================
    // 3. Inspect
    // =========================================================================
    println!("\n=== Generated Artifacts ===");
    println!("features:    {:?}", data.features.dim());
    println!("targets:     {} values", data.targets.len());
    println!(
        "raw grid:    {} points in [{:.3}, {:.3}]",
        data.raw_grid.len(),
        data.raw_grid[0],
        data.raw_grid[data.raw_grid.len() - 1]
    );
    println!("tensor grid: {:?} (f32 column)", data.tensor_grid.dim());

    // A fitted model would be evaluated on the tensor grid; here we just show
    // the first few grid rows.
    for row in data.tensor_grid.rows().into_iter().take(3) {
        println!("  grid row: {:.4}", row[0]);
    }

    Ok(())
}
