//! Command line interface for the descriptor resolver.
//!
//! Parses arguments, builds the packaging configuration and emits the
//! JSON manifest to stdout or a file.

mod args;

pub use args::Args;

use crate::descriptor;
use crate::error::{CliError, Result};

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = Args::parse_args();
    run_with_args(args).await
}

/// Executes the resolver for already-parsed arguments.
pub async fn run_with_args(args: Args) -> Result<i32> {
    if let Err(reason) = args.validate() {
        return Err(CliError::InvalidArguments { reason }.into());
    }

    log::info!("resolving descriptor at {}", args.descriptor.display());
    let config = descriptor::build_configuration(&args.descriptor, args.name.as_deref()).await?;

    let manifest = config.to_manifest_json()?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, manifest.as_bytes()).await?;
            log::info!("manifest written to {}", path.display());
        }
        None => println!("{manifest}"),
    }

    Ok(0)
}
