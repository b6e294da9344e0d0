//! Bundle configuration and its builder.

use super::ResolvedPaths;
use crate::error::{DescriptorError, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Display name the bundle is created under when no override is given.
pub const DEFAULT_PRODUCT_NAME: &str = "RA-moon's List-Wizard";

/// Entry-point script the pipeline freezes, relative to the project root.
pub const ENTRY_SCRIPT: &str = "run_app.py";

/// Static packaging flags handed to the external pipeline.
///
/// Fixed per packaging invocation; there is no runtime mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PackagingFlags {
    /// Launch as a windowed application.
    pub windowed: bool,

    /// Attach a console to the executable.
    pub console: bool,

    /// Compress the intermediate archive.
    pub compress: bool,

    /// Strip symbols from the executable stub.
    pub strip: bool,

    /// Code signing identity name.
    ///
    /// Default: None (unsigned)
    pub codesign_identity: Option<String>,

    /// Bundle identifier in reverse domain notation.
    ///
    /// Default: None (the pipeline picks one)
    pub bundle_identifier: Option<String>,
}

impl Default for PackagingFlags {
    fn default() -> Self {
        Self {
            windowed: true,
            console: false,
            compress: true,
            strip: false,
            codesign_identity: None,
            bundle_identifier: None,
        }
    }
}

/// Analysis hints the external pipeline reads verbatim.
///
/// Opaque contract: none of these fields are interpreted here, they are
/// carried through to the pipeline's import analysis unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AnalysisSettings {
    /// Application entry-point script.
    pub entry_script: PathBuf,

    /// Path list for import resolution.
    pub pathex: Vec<PathBuf>,

    /// Extra binaries to include.
    pub binaries: Vec<PathBuf>,

    /// Data files to include (source, destination).
    pub datas: Vec<(PathBuf, PathBuf)>,

    /// Modules the analysis cannot discover on its own.
    pub hidden_imports: Vec<String>,

    /// Additional hook search paths.
    pub hooks_path: Vec<PathBuf>,

    /// Modules to exclude from the bundle.
    pub excludes: Vec<String>,

    /// Bytecode optimization level.
    pub optimize: u8,
}

impl AnalysisSettings {
    /// Defaults for the List-Wizard layout: the entry script at the project
    /// root and the root itself on the import path.
    pub fn for_project_root(project_root: &Path) -> Self {
        Self {
            entry_script: project_root.join(ENTRY_SCRIPT),
            pathex: vec![project_root.to_path_buf()],
            ..Default::default()
        }
    }
}

/// The packaging configuration the external pipeline consumes.
///
/// Constructed once per packaging invocation via [`BundleConfigBuilder`]
/// and serialized as a JSON manifest.
///
/// # Examples
///
/// ```no_run
/// use listwizard_packaging::descriptor::{resolve_paths, BundleConfig};
/// use std::path::Path;
///
/// # fn example() -> listwizard_packaging::Result<()> {
/// let paths = resolve_paths(Path::new("/repo/packaging/listwizard.toml"))?;
/// let config = BundleConfig::builder()
///     .paths(paths)
///     .product_name("My App")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BundleConfig {
    /// Display name of the bundle, passed through unmodified.
    ///
    /// May contain spaces and apostrophes.
    pub product_name: String,

    /// Root of the project being packaged.
    pub project_root: PathBuf,

    /// Directory holding the descriptor and packaging assets.
    pub packaging_dir: PathBuf,

    /// Icon resource, present only when the file existed at build time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,

    /// Static packaging flags.
    pub flags: PackagingFlags,

    /// Analysis hints for the pipeline's import resolution.
    pub analysis: AnalysisSettings,
}

impl BundleConfig {
    /// Creates a builder for constructing a configuration.
    pub fn builder() -> BundleConfigBuilder {
        BundleConfigBuilder::new()
    }

    /// Serializes the configuration as the JSON manifest the pipeline reads.
    pub fn to_manifest_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Builder for constructing [`BundleConfig`].
///
/// Resolved paths are required; everything else falls back to the static
/// defaults of the List-Wizard descriptor.
#[derive(Default)]
pub struct BundleConfigBuilder {
    product_name: Option<String>,
    paths: Option<ResolvedPaths>,
    icon: Option<PathBuf>,
    flags: PackagingFlags,
    analysis: Option<AnalysisSettings>,
}

impl BundleConfigBuilder {
    /// Creates a new configuration builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the display name.
    ///
    /// Default: [`DEFAULT_PRODUCT_NAME`]
    pub fn product_name<S: Into<String>>(mut self, name: S) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Sets the resolved paths.
    ///
    /// # Required
    ///
    /// This field is required for building.
    pub fn paths(mut self, paths: ResolvedPaths) -> Self {
        self.paths = Some(paths);
        self
    }

    /// Sets the icon resource path.
    ///
    /// Callers are expected to have probed existence already, see
    /// [`super::icon_or_none`].
    pub fn icon(mut self, icon: Option<PathBuf>) -> Self {
        self.icon = icon;
        self
    }

    /// Sets the packaging flags.
    ///
    /// Default: windowed, no console, compressed, unstripped, unsigned.
    pub fn flags(mut self, flags: PackagingFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Sets the analysis hints.
    ///
    /// Default: [`AnalysisSettings::for_project_root`] of the resolved root.
    pub fn analysis(mut self, analysis: AnalysisSettings) -> Self {
        self.analysis = Some(analysis);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DescriptorError::Configuration`] when the resolved paths
    /// are missing.
    pub fn build(self) -> Result<BundleConfig> {
        let paths = self.paths.ok_or_else(|| DescriptorError::Configuration {
            reason: "resolved paths are required".to_string(),
        })?;

        let analysis = self
            .analysis
            .unwrap_or_else(|| AnalysisSettings::for_project_root(&paths.project_root));

        Ok(BundleConfig {
            product_name: self
                .product_name
                .unwrap_or_else(|| DEFAULT_PRODUCT_NAME.to_string()),
            project_root: paths.project_root,
            packaging_dir: paths.packaging_dir,
            icon: self.icon,
            flags: self.flags,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo_paths() -> ResolvedPaths {
        ResolvedPaths {
            project_root: PathBuf::from("/repo"),
            packaging_dir: PathBuf::from("/repo/packaging"),
            icon_path: PathBuf::from("/repo/packaging/AppIcon.icns"),
        }
    }

    #[test]
    fn default_flags_are_windowed_without_console() {
        let flags = PackagingFlags::default();
        assert!(flags.windowed);
        assert!(!flags.console);
        assert!(flags.compress);
        assert!(!flags.strip);
        assert!(flags.codesign_identity.is_none());
        assert!(flags.bundle_identifier.is_none());
    }

    #[test]
    fn builder_fills_defaults_from_resolved_paths() {
        let config = BundleConfig::builder()
            .paths(repo_paths())
            .build()
            .expect("build");

        assert_eq!(config.product_name, DEFAULT_PRODUCT_NAME);
        assert_eq!(
            config.analysis.entry_script,
            PathBuf::from("/repo").join(ENTRY_SCRIPT)
        );
        assert_eq!(config.analysis.pathex, vec![PathBuf::from("/repo")]);
        assert_eq!(config.analysis.optimize, 0);
        assert!(config.icon.is_none());
    }

    #[test]
    fn builder_requires_paths() {
        let err = BundleConfig::builder().build().expect_err("must fail");
        assert!(matches!(err, DescriptorError::Configuration { .. }));
    }

    #[test]
    fn product_name_keeps_apostrophes_and_spaces() {
        let config = BundleConfig::builder()
            .paths(repo_paths())
            .product_name("RA-moon's List-Wizard")
            .build()
            .expect("build");

        assert_eq!(config.product_name, "RA-moon's List-Wizard");
    }

    #[test]
    fn manifest_omits_absent_icon() {
        let config = BundleConfig::builder()
            .paths(repo_paths())
            .build()
            .expect("build");

        let manifest = config.to_manifest_json().expect("serialize");
        let value: serde_json::Value = serde_json::from_str(&manifest).expect("parse");

        assert!(value.get("icon").is_none());
        assert_eq!(value["flags"]["windowed"], true);
        assert_eq!(value["flags"]["console"], false);
    }

    #[test]
    fn manifest_carries_present_icon() {
        let icon = PathBuf::from("/repo/packaging/AppIcon.icns");
        let config = BundleConfig::builder()
            .paths(repo_paths())
            .icon(Some(icon.clone()))
            .build()
            .expect("build");

        let value: serde_json::Value =
            serde_json::from_str(&config.to_manifest_json().expect("serialize")).expect("parse");

        assert_eq!(value["icon"], "/repo/packaging/AppIcon.icns");
        assert_eq!(config.icon, Some(icon));
    }
}
