//! Writes 50 random personas to `personas.csv` in the working directory.
//!
//! Run with:
//! ```
//! cargo run -p personas --bin personas
//! ```

use anyhow::Context;
use personas::config::OUTPUT_FILE;
use personas::{generate_dataset, write_csv};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Silent unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut rng = rand::thread_rng();
    let dataset = generate_dataset(&mut rng);

    write_csv(&dataset, OUTPUT_FILE)
        .with_context(|| format!("Failed to write {OUTPUT_FILE}"))?;

    tracing::debug!("Dataset lines: {}", dataset.line_count());

    Ok(())
}
