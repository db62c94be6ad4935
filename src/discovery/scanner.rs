//! Source tree scanning and output path mirroring

use crate::config::settings::CONTAINER_EXTENSION;
use crate::error::{AcbripError, Result};
use crate::types::path_has_suffix_ci;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Recursively find all container files under the source root.
///
/// Matching is by filename suffix, case-insensitively. Files are returned
/// in the order walkdir yields them; jobs run in that order.
pub fn scan_containers(source_root: &Path) -> Result<Vec<PathBuf>> {
    if !source_root.is_dir() {
        return Err(AcbripError::SourceNotFound(source_root.to_path_buf()));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(source_root).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_file() && path_has_suffix_ci(path, CONTAINER_EXTENSION) {
            debug!("Discovered: {}", path.display());
            files.push(path.to_path_buf());
        }
    }

    info!("Discovered {} container files", files.len());

    if files.is_empty() {
        warn!(
            "No {} files found in {}",
            CONTAINER_EXTENSION,
            source_root.display()
        );
    }

    Ok(files)
}

/// Compute the output directory mirroring a container's position in the
/// source tree.
///
/// Pure function: the path of `containing_dir` relative to `source_root` is
/// re-rooted under `output_root`. A container directly in the source root
/// maps to the output root itself. A containing directory outside the source
/// root (which the walker never produces) falls back to the output root.
pub fn mirror_output_dir(source_root: &Path, containing_dir: &Path, output_root: &Path) -> PathBuf {
    match containing_dir.strip_prefix(source_root) {
        Ok(rel) if rel.as_os_str().is_empty() => output_root.to_path_buf(),
        Ok(rel) => output_root.join(rel),
        Err(_) => output_root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn mirror_keeps_relative_structure() {
        let out = mirror_output_dir(
            Path::new("/game/audio"),
            Path::new("/game/audio/bgm/field"),
            Path::new("/out"),
        );
        assert_eq!(out, PathBuf::from("/out/bgm/field"));
    }

    #[test]
    fn mirror_root_level_maps_to_output_root() {
        let out = mirror_output_dir(
            Path::new("/game/audio"),
            Path::new("/game/audio"),
            Path::new("/out"),
        );
        assert_eq!(out, PathBuf::from("/out"));
    }

    #[test]
    fn mirror_foreign_dir_falls_back_to_output_root() {
        let out = mirror_output_dir(
            Path::new("/game/audio"),
            Path::new("/elsewhere/bgm"),
            Path::new("/out"),
        );
        assert_eq!(out, PathBuf::from("/out"));
    }

    #[test]
    fn scan_finds_containers_case_insensitively() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("bgm")).unwrap();
        fs::write(dir.path().join("a.acb"), b"x").unwrap();
        fs::write(dir.path().join("bgm").join("b.ACB"), b"x").unwrap();
        fs::write(dir.path().join("bgm").join("notes.txt"), b"x").unwrap();

        let found = scan_containers(dir.path()).unwrap();
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.extension().is_some()));
    }

    #[test]
    fn scan_missing_root_is_fatal() {
        let result = scan_containers(Path::new("/nonexistent/audio/root"));
        assert!(matches!(result, Err(AcbripError::SourceNotFound(_))));
    }
}
