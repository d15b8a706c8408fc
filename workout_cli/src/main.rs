//! # Workout Tracker CLI
//!
//! Reports on the built-in batch of sensor packages, one summary line per
//! package on stdout. Diagnostics go to stderr; set `RUST_LOG=debug` to see
//! each dispatch.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use workout_core::dispatch::{default_packages, process_package};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    for package in default_packages() {
        match process_package(&package) {
            Ok(line) => println!("{}", line),
            Err(e) => {
                tracing::error!(
                    code = e.error_code(),
                    details = %serde_json::to_string(&e).unwrap_or_default(),
                    "failed to process sensor package"
                );
                return Err(e).with_context(|| {
                    format!(
                        "processing '{}' package with {} readings",
                        package.workout_type,
                        package.readings.len()
                    )
                });
            }
        }
    }

    Ok(())
}
