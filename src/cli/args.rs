//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with proper
//! validation and error handling.

use clap::Parser;
use std::path::PathBuf;

/// Bundle descriptor resolver for List-Wizard desktop builds
#[derive(Parser, Debug)]
#[command(
    name = "listwizard-packaging",
    version,
    about = "Bundle descriptor resolver for List-Wizard desktop builds",
    long_about = "Resolves the packaging descriptor's location into the project root, \
packaging directory and icon resource, and emits the packaging configuration as a \
JSON manifest for the external freezing pipeline.

Usage:
  listwizard-packaging packaging/listwizard.toml
  listwizard-packaging packaging/listwizard.toml --output target/bundle-manifest.json
  listwizard-packaging packaging/listwizard.toml --name \"RA-moon's List-Wizard\"

A missing icon resource is not fatal: the manifest is emitted without an icon
and packaging proceeds windowed with no console."
)]
pub struct Args {
    /// Path to the packaging descriptor; its directory holds AppIcon.icns
    #[arg(value_name = "DESCRIPTOR")]
    pub descriptor: PathBuf,

    /// Override the display name the bundle is created under
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Write the manifest to this path instead of stdout
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.descriptor.as_os_str().is_empty() {
            return Err("Descriptor path cannot be empty".to_string());
        }

        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err("Display name cannot be blank".to_string());
            }
        }

        Ok(())
    }
}
