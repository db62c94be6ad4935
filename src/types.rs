//! Core data types for acbrip
//!
//! These types represent the domain model and flow through the pipeline.

use std::path::{Path, PathBuf};

/// One input container file being converted to one or more compressed outputs
#[derive(Debug, Clone)]
pub struct ConversionJob {
    /// Full path to the input container file
    pub input: PathBuf,
    /// Directory where this job's outputs go (mirrors the source tree)
    pub output_dir: PathBuf,
    /// Input filename without its extension
    pub base_name: String,
}

impl ConversionJob {
    /// Build a job from a discovered container path and its mirrored output directory
    pub fn new(input: PathBuf, output_dir: PathBuf) -> Self {
        let base_name = input
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            input,
            output_dir,
            base_name,
        }
    }
}

/// One intermediate decoded waveform belonging to a job
#[derive(Debug, Clone)]
pub struct WaveformUnit {
    /// Path of the waveform file inside the job's scratch directory
    pub path: PathBuf,
    /// Filename without the .wav extension (decoder numbering baked in)
    pub stem: String,
    /// Position in the scratch directory listing (reporting only)
    pub index: usize,
    /// True when this is the job's only unit
    pub is_only: bool,
}

impl WaveformUnit {
    pub fn new(path: PathBuf, index: usize, is_only: bool) -> Self {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        Self {
            path,
            stem,
            index,
            is_only,
        }
    }

    /// Filename of the waveform (for operator-facing reports)
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Batch conversion summary
#[derive(Debug, Default)]
pub struct BatchResult {
    /// Container files found and attempted
    pub attempted: usize,
    /// Jobs where every track encoded cleanly
    pub successful: usize,
    /// Jobs with at least one error
    pub failed: usize,
}

/// Renamer run summary
#[derive(Debug, Default)]
pub struct RenameResult {
    /// Files renamed (or that would be renamed in dry-run mode)
    pub renamed: usize,
    /// Files skipped because the target existed, plus rename failures
    pub skipped: usize,
}

/// Check whether a filename ends with the given suffix, case-insensitively.
///
/// ASCII-only comparison; the suffixes used in this tool (".acb", ".bytes",
/// ".wav") are all ASCII. Returns the name with the suffix removed.
pub fn strip_suffix_ci<'a>(name: &'a str, suffix: &str) -> Option<&'a str> {
    if name.len() < suffix.len() {
        return None;
    }
    let split = name.len() - suffix.len();
    match name.get(split..) {
        Some(tail) if tail.eq_ignore_ascii_case(suffix) => Some(&name[..split]),
        _ => None,
    }
}

/// Check whether a path's filename ends with the given suffix, case-insensitively
pub fn path_has_suffix_ci(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| strip_suffix_ci(n, suffix).is_some())
        .unwrap_or(false)
}
