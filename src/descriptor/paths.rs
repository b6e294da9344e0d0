//! Filesystem locations derived from the descriptor's own path.

use crate::error::{DescriptorError, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// File name of the icon resource expected next to the descriptor.
pub const ICON_FILE_NAME: &str = "AppIcon.icns";

/// Locations the packaging pipeline needs, derived from the descriptor path.
///
/// Invariant: `project_root` is the parent of `packaging_dir`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root of the project being packaged.
    ///
    /// The application entry-point script lives here.
    pub project_root: PathBuf,

    /// Directory holding the descriptor and its packaging assets.
    pub packaging_dir: PathBuf,

    /// Expected icon resource location inside `packaging_dir`.
    ///
    /// Existence is not checked here; see [`icon_or_none`].
    pub icon_path: PathBuf,
}

/// Derives the packaging locations from the descriptor's own location.
///
/// The packaging directory is the directory containing the descriptor,
/// the project root is that directory's parent, and the icon path points
/// at `AppIcon.icns` inside the packaging directory. Relative descriptor
/// paths are absolutized against the current working directory; the
/// descriptor file itself does not have to exist.
///
/// # Errors
///
/// Returns [`DescriptorError::Configuration`] for an empty location and
/// [`DescriptorError::OrphanLocation`] when no parent directories exist
/// to serve as packaging directory and project root.
pub fn resolve_paths(descriptor: &Path) -> Result<ResolvedPaths> {
    if descriptor.as_os_str().is_empty() {
        return Err(DescriptorError::Configuration {
            reason: "descriptor location is empty".to_string(),
        });
    }

    let descriptor = descriptor.absolutize()?;

    let packaging_dir = descriptor
        .parent()
        .ok_or_else(|| DescriptorError::OrphanLocation {
            path: descriptor.to_path_buf(),
        })?
        .to_path_buf();

    let project_root = packaging_dir
        .parent()
        .ok_or_else(|| DescriptorError::OrphanLocation {
            path: packaging_dir.clone(),
        })?
        .to_path_buf();

    let icon_path = packaging_dir.join(ICON_FILE_NAME);

    Ok(ResolvedPaths {
        project_root,
        packaging_dir,
        icon_path,
    })
}

/// Returns the icon path when a regular file exists there, `None` otherwise.
///
/// The emitted configuration must never point the pipeline at a missing
/// icon; a bundle without an icon beats a failed packaging run.
pub async fn icon_or_none(icon_path: &Path) -> Option<PathBuf> {
    match tokio::fs::metadata(icon_path).await {
        Ok(meta) if meta.is_file() => Some(icon_path.to_path_buf()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn project_root_is_parent_of_packaging_dir() {
        let paths = resolve_paths(Path::new("/repo/packaging/listwizard.toml")).expect("resolve");

        assert_eq!(paths.packaging_dir, Path::new("/repo/packaging"));
        assert_eq!(paths.project_root, Path::new("/repo"));
        assert_eq!(
            paths.icon_path,
            Path::new("/repo/packaging").join(ICON_FILE_NAME)
        );
        assert_eq!(
            paths.project_root,
            paths.packaging_dir.parent().expect("parent")
        );
    }

    #[test]
    fn empty_location_fails_loudly() {
        let err = resolve_paths(Path::new("")).expect_err("must fail");
        assert!(matches!(err, DescriptorError::Configuration { .. }));
    }

    #[test]
    fn descriptor_at_filesystem_root_has_no_project_root() {
        let err = resolve_paths(Path::new("/listwizard.toml")).expect_err("must fail");
        assert!(matches!(err, DescriptorError::OrphanLocation { .. }));
    }

    #[test]
    fn resolution_is_idempotent() {
        let descriptor = Path::new("/repo/packaging/listwizard.toml");
        let first = resolve_paths(descriptor).expect("first");
        let second = resolve_paths(descriptor).expect("second");
        assert_eq!(first, second);
    }

    #[test]
    fn relative_descriptor_is_absolutized() {
        let paths = resolve_paths(Path::new("packaging/listwizard.toml")).expect("resolve");
        assert!(paths.packaging_dir.is_absolute());
        assert!(paths.project_root.is_absolute());
    }

    #[tokio::test]
    async fn icon_present_resolves_to_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let icon = dir.path().join(ICON_FILE_NAME);
        fs::write(&icon, b"icns").expect("write icon");

        assert_eq!(icon_or_none(&icon).await, Some(icon.clone()));
    }

    #[tokio::test]
    async fn icon_absent_resolves_to_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let icon = dir.path().join(ICON_FILE_NAME);

        assert_eq!(icon_or_none(&icon).await, None);
    }

    #[tokio::test]
    async fn icon_directory_is_not_a_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let icon = dir.path().join(ICON_FILE_NAME);
        fs::create_dir(&icon).expect("mkdir");

        assert_eq!(icon_or_none(&icon).await, None);
    }
}
