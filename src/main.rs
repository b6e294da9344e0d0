//! listwizard-packaging - Bundle descriptor resolver for List-Wizard desktop builds.
//!
//! This binary resolves the packaging descriptor's location into the paths
//! and flags the external freezing pipeline consumes, and emits them as a
//! JSON manifest.

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match listwizard_packaging::cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
