//! Batch renamer: strips the .bytes suffix from container files
//!
//! Scans a directory (optionally the whole tree) for files whose name ends
//! with the rename suffix, case-insensitively, and renames each by removing
//! that suffix. A file already present at the target name is never
//! overwritten; the candidate is skipped and counted.

use crate::config::settings::RENAME_SUFFIX;
use crate::config::RenameSettings;
use crate::error::{AcbripError, Result};
use crate::types::{strip_suffix_ci, RenameResult};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Run the renamer over the configured directory.
///
/// Fatal only when the target directory is missing or unlistable; individual
/// rename failures are logged, counted as skips, and do not stop the run.
pub fn run(settings: &RenameSettings) -> Result<RenameResult> {
    if !settings.directory.is_dir() {
        return Err(AcbripError::SourceNotFound(settings.directory.clone()));
    }
    // An unlistable directory is as fatal as a missing one.
    fs::read_dir(&settings.directory)?;

    println!("--- Starting Renamer ---");
    println!("Target directory: {}", settings.directory.display());
    println!("Recursive: {}", settings.recursive);
    println!("Dry run: {}", settings.dry_run);
    println!("Stripping '{}' suffix", RENAME_SUFFIX);

    let walker = if settings.recursive {
        WalkDir::new(&settings.directory)
    } else {
        WalkDir::new(&settings.directory).max_depth(1)
    };

    let mut result = RenameResult::default();

    for entry in walker.into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match rename_one(path, settings.dry_run) {
            Some(true) => result.renamed += 1,
            Some(false) => result.skipped += 1,
            None => {}
        }
    }

    print_summary(&result, settings.dry_run);

    Ok(result)
}

/// Attempt one rename. Returns None when the file is not a candidate,
/// Some(true) on success (or a planned dry-run rename), Some(false) on skip.
fn rename_one(path: &Path, dry_run: bool) -> Option<bool> {
    let file_name = path.file_name()?.to_str()?;
    let new_name = strip_suffix_ci(file_name, RENAME_SUFFIX)?;

    let target = path.with_file_name(new_name);
    println!("Found: '{}'", path.display());

    if target.exists() {
        println!(
            "  [!] Skipping: target '{}' already exists",
            target.display()
        );
        return Some(false);
    }

    let action = if dry_run {
        "[DRY RUN] Would rename"
    } else {
        "Renaming"
    };
    println!("  -> {} to '{}'", action, target.display());

    if dry_run {
        return Some(true);
    }

    match fs::rename(path, &target) {
        Ok(()) => {
            debug!("Renamed {} -> {}", path.display(), target.display());
            Some(true)
        }
        Err(e) => {
            warn!("Could not rename '{}': {}", path.display(), e);
            Some(false)
        }
    }
}

fn print_summary(result: &RenameResult, dry_run: bool) {
    println!("--- Finished {}---", if dry_run { "(Dry Run) " } else { "" });
    if dry_run {
        println!("Files that would be renamed: {}", result.renamed);
    } else {
        println!("Successfully renamed: {} file(s)", result.renamed);
    }
    if result.skipped > 0 {
        println!("Skipped/errors: {} file(s)", result.skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn settings(dir: &Path, recursive: bool, dry_run: bool) -> RenameSettings {
        RenameSettings {
            directory: dir.to_path_buf(),
            recursive,
            dry_run,
        }
    }

    /// Snapshot of a tree: relative path -> file contents
    fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
        let mut map = BTreeMap::new();
        for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
            if entry.path().is_file() {
                let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
                map.insert(rel, fs::read(entry.path()).unwrap());
            }
        }
        map
    }

    #[test]
    fn strips_suffix_to_bare_stem() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("vs_enemy01.bytes"), b"acb data").unwrap();

        let result = run(&settings(dir.path(), false, false)).unwrap();
        assert_eq!(result.renamed, 1);
        assert_eq!(result.skipped, 0);
        assert!(dir.path().join("vs_enemy01").exists());
        assert!(!dir.path().join("vs_enemy01.bytes").exists());
    }

    #[test]
    fn suffix_match_is_case_insensitive() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("track.BYTES"), b"x").unwrap();

        let result = run(&settings(dir.path(), false, false)).unwrap();
        assert_eq!(result.renamed, 1);
        assert!(dir.path().join("track").exists());
    }

    #[test]
    fn never_overwrites_existing_target() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("song.bytes"), b"new").unwrap();
        fs::write(dir.path().join("song"), b"old").unwrap();

        let result = run(&settings(dir.path(), false, false)).unwrap();
        assert_eq!(result.renamed, 0);
        assert_eq!(result.skipped, 1);
        // Both files untouched.
        assert_eq!(fs::read(dir.path().join("song")).unwrap(), b"old");
        assert_eq!(fs::read(dir.path().join("song.bytes")).unwrap(), b"new");
    }

    #[test]
    fn non_recursive_ignores_subdirectories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.bytes"), b"x").unwrap();
        fs::write(dir.path().join("sub").join("nested.bytes"), b"x").unwrap();

        let result = run(&settings(dir.path(), false, false)).unwrap();
        assert_eq!(result.renamed, 1);
        assert!(dir.path().join("sub").join("nested.bytes").exists());
    }

    #[test]
    fn recursive_covers_the_tree() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("top.bytes"), b"x").unwrap();
        fs::write(dir.path().join("sub").join("nested.bytes"), b"x").unwrap();

        let result = run(&settings(dir.path(), true, false)).unwrap();
        assert_eq!(result.renamed, 2);
        assert!(dir.path().join("sub").join("nested").exists());
    }

    #[test]
    fn dry_run_reports_but_mutates_nothing() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("a.bytes"), b"one").unwrap();
        fs::write(dir.path().join("sub").join("b.bytes"), b"two").unwrap();

        let before = snapshot(dir.path());
        let result = run(&settings(dir.path(), true, true)).unwrap();
        let after = snapshot(dir.path());

        assert_eq!(result.renamed, 2);
        assert_eq!(before, after, "dry run must not touch the filesystem");
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = run(&settings(Path::new("/nonexistent/renamer/dir"), false, false));
        assert!(matches!(result, Err(AcbripError::SourceNotFound(_))));
    }
}
