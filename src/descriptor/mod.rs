//! Packaging descriptor resolution and configuration assembly.
//!
//! A single-pass, stateless transformation: from the descriptor's own
//! file location to the configuration record the external pipeline reads.
//! [`resolve_paths`] derives the locations, [`icon_or_none`] probes the
//! icon resource, and [`build_configuration`] ties both together with the
//! static flag set.

mod config;
mod paths;

// Re-export all public types
pub use config::{
    AnalysisSettings, BundleConfig, BundleConfigBuilder, PackagingFlags, DEFAULT_PRODUCT_NAME,
    ENTRY_SCRIPT,
};
pub use paths::{icon_or_none, resolve_paths, ResolvedPaths, ICON_FILE_NAME};

use crate::error::Result;
use std::path::Path;

/// Resolves the descriptor location and assembles the full configuration.
///
/// A missing icon resource is not an error: the configuration is built
/// without one and the pipeline proceeds windowed with no console, same
/// as when the icon is present.
///
/// # Errors
///
/// Returns [`crate::DescriptorError::Configuration`] when the descriptor
/// location cannot be resolved into a packaging directory and project root.
pub async fn build_configuration(
    descriptor: &Path,
    product_name: Option<&str>,
) -> Result<BundleConfig> {
    let paths = resolve_paths(descriptor)?;

    let icon = icon_or_none(&paths.icon_path).await;
    if icon.is_none() {
        log::warn!(
            "no icon resource at {}, bundling without an icon",
            paths.icon_path.display()
        );
    }

    let mut builder = BundleConfig::builder().paths(paths).icon(icon);
    if let Some(name) = product_name {
        builder = builder.product_name(name);
    }
    builder.build()
}
