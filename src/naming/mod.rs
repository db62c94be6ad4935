//! Track naming and output layout resolution
//!
//! Given a job's base name and the waveform units the decoder produced,
//! deterministically assigns each unit its published output path:
//!
//! - a job with exactly one unit publishes under the job's own base name
//!   (no ordinal is ever appended);
//! - a job with several units publishes each under that unit's waveform
//!   stem, which carries the decoder-assigned numbering;
//! - a known category prefix ("vs_", "an_", ...) is then stripped from the
//!   candidate, at most once, first match wins.
//!
//! Units that reduce to the same published basename after stripping are not
//! deduplicated; the later encode overwrites the earlier output. Pure
//! string/path manipulation, no filesystem access.

use std::path::{Path, PathBuf};

use crate::config::settings::OUTPUT_EXTENSION;
use crate::types::WaveformUnit;

/// Remove the first matching known prefix from a candidate basename.
///
/// Prefixes are tested in table order and compared case-insensitively
/// (the table is ASCII). At most one prefix is removed; a name with no
/// matching prefix is returned unchanged.
pub fn strip_known_prefix<'a>(name: &'a str, prefixes: &[&str]) -> &'a str {
    for prefix in prefixes {
        match name.get(..prefix.len()) {
            Some(head) if head.eq_ignore_ascii_case(prefix) => {
                return &name[prefix.len()..];
            }
            _ => {}
        }
    }
    name
}

/// Resolve the published basename for one waveform unit.
///
/// Single-track jobs keep the job's original base name; multi-track jobs
/// keep the decoder-numbered stem of each unit.
pub fn published_basename(job_base: &str, unit: &WaveformUnit, prefixes: &[&str]) -> String {
    let candidate = if unit.is_only { job_base } else { &unit.stem };
    strip_known_prefix(candidate, prefixes).to_string()
}

/// Final published path for a unit: output dir, stripped basename, output extension
pub fn published_path(output_dir: &Path, basename: &str) -> PathBuf {
    output_dir.join(format!("{}{}", basename, OUTPUT_EXTENSION))
}
