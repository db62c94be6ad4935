//! Batch walker and aggregator
//!
//! Setup (tool resolution, quality tokenization, output root creation) is
//! fatal when it fails; after that the batch is best-effort. Jobs run
//! strictly sequentially in discovery order, a failed job is counted and
//! the walk continues.

use super::converter::{self, Tools};
use crate::config::settings::{
    CONTAINER_EXTENSION, DEFAULT_LAME_PATH, DEFAULT_VGMSTREAM_PATH, LAME_TOOL, VGMSTREAM_TOOL,
};
use crate::config::ConvertSettings;
use crate::discovery;
use crate::error::{AcbripError, Result};
use crate::tools::find_executable;
use crate::types::{BatchResult, ConversionJob};
use std::fs;
use std::path::Path;
use tracing::{debug, error, info};

/// Run the full conversion batch
pub fn run(settings: &ConvertSettings) -> Result<BatchResult> {
    if !settings.source.is_dir() {
        return Err(AcbripError::SourceNotFound(settings.source.clone()));
    }

    let tools = resolve_tools(settings)?;
    info!("Using vgmstream-cli: {}", tools.vgmstream.display());
    info!("Using LAME: {}", tools.lame.display());
    debug!("LAME options: {:?}", tools.lame_opts);

    if settings.dry_run {
        println!("--- DRY RUN MODE: no files will be created or converted ---");
    } else {
        fs::create_dir_all(&settings.output).map_err(|e| AcbripError::OutputRootError {
            path: settings.output.clone(),
            reason: e.to_string(),
        })?;
        debug!("Ensured output root exists: {}", settings.output.display());
    }

    let containers = discovery::scan_containers(&settings.source)?;

    let mut result = BatchResult::default();
    for input in containers {
        result.attempted += 1;

        let containing = input.parent().unwrap_or(settings.source.as_path());
        let output_dir =
            discovery::mirror_output_dir(&settings.source, containing, &settings.output);
        let job = ConversionJob::new(input, output_dir);

        match converter::process_job(&job, &tools, settings) {
            Ok(()) => {
                if !settings.dry_run {
                    result.successful += 1;
                }
            }
            Err(e) if e.is_recoverable() => {
                error!("Job failed for '{}': {}", job.input.display(), e);
                result.failed += 1;
            }
            Err(e) => return Err(e),
        }
    }

    print_summary(&result, settings);

    Ok(result)
}

/// Resolve both external executables and tokenize the quality string.
/// Any failure here is fatal; nothing has been processed yet.
fn resolve_tools(settings: &ConvertSettings) -> Result<Tools> {
    let vgmstream = find_executable(
        VGMSTREAM_TOOL,
        settings.vgmstream_path.as_deref(),
        Path::new(DEFAULT_VGMSTREAM_PATH),
    )?;
    let lame = find_executable(
        LAME_TOOL,
        settings.lame_path.as_deref(),
        Path::new(DEFAULT_LAME_PATH),
    )?;
    let lame_opts = shlex::split(&settings.lame_quality)
        .ok_or_else(|| AcbripError::InvalidQuality(settings.lame_quality.clone()))?;

    Ok(Tools {
        vgmstream,
        lame,
        lame_opts,
    })
}

fn print_summary(result: &BatchResult, settings: &ConvertSettings) {
    println!();
    println!("--- Conversion Summary ---");
    if settings.dry_run {
        println!(
            "Dry run complete. Would have attempted to process {} {} file(s).",
            result.attempted, CONTAINER_EXTENSION
        );
        return;
    }

    println!(
        "Attempted processing {} {} file(s).",
        result.attempted, CONTAINER_EXTENSION
    );
    println!(
        "Successful conversions (all tracks encoded): {}",
        result.successful
    );
    println!(
        "Failed conversions (at least one error): {}",
        result.failed
    );
    if settings.keep_wav {
        println!("Intermediate WAV files were kept.");
    }
    if result.failed > 0 {
        println!("Check the log above; scratch directories of failed jobs were retained for inspection.");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn settings_with_tools(source: &Path, output: &Path, tool: &Path) -> ConvertSettings {
        ConvertSettings {
            source: source.to_path_buf(),
            output: output.to_path_buf(),
            vgmstream_path: Some(tool.to_path_buf()),
            lame_path: Some(tool.to_path_buf()),
            ..ConvertSettings::default()
        }
    }

    fn fake_tool(dir: &Path) -> PathBuf {
        let path = dir.join("fake-tool");
        fs::write(&path, b"#!/bin/sh\nexit 0\n").unwrap();
        path
    }

    #[test]
    fn missing_source_dir_is_fatal() {
        let settings = ConvertSettings {
            source: PathBuf::from("/nonexistent/source/tree"),
            ..ConvertSettings::default()
        };
        let result = run(&settings);
        assert!(matches!(result, Err(AcbripError::SourceNotFound(_))));
    }

    #[test]
    fn unresolvable_tools_are_fatal_even_in_dry_run() {
        let source = TempDir::new().unwrap();
        let settings = ConvertSettings {
            source: source.path().to_path_buf(),
            vgmstream_path: Some(PathBuf::from("/nonexistent/vgmstream-cli")),
            lame_path: Some(PathBuf::from("/nonexistent/lame")),
            dry_run: true,
            ..ConvertSettings::default()
        };
        // PATH lookup for "vgmstream-cli" is expected to fail on test hosts.
        let result = run(&settings);
        assert!(matches!(result, Err(AcbripError::ToolNotFound { .. })));
    }

    #[test]
    fn malformed_quality_string_is_fatal() {
        let source = TempDir::new().unwrap();
        let tools_dir = TempDir::new().unwrap();
        let tool = fake_tool(tools_dir.path());

        let mut settings = settings_with_tools(
            source.path(),
            &source.path().join("out"),
            &tool,
        );
        settings.lame_quality = "-V '2".to_string(); // unbalanced quote
        let result = run(&settings);
        assert!(matches!(result, Err(AcbripError::InvalidQuality(_))));
    }

    #[test]
    fn empty_source_tree_yields_empty_batch() {
        let source = TempDir::new().unwrap();
        let output = TempDir::new().unwrap();
        let tools_dir = TempDir::new().unwrap();
        let tool = fake_tool(tools_dir.path());

        let settings = settings_with_tools(source.path(), output.path(), &tool);
        let result = run(&settings).unwrap();
        assert_eq!(result.attempted, 0);
        assert_eq!(result.successful, 0);
        assert_eq!(result.failed, 0);
    }

    #[test]
    fn dry_run_counts_attempts_without_outcomes() {
        let source = TempDir::new().unwrap();
        fs::write(source.path().join("vs_theme.acb"), b"acb").unwrap();
        let tools_dir = TempDir::new().unwrap();
        let tool = fake_tool(tools_dir.path());

        let output_root = source.path().join("never-created");
        let mut settings = settings_with_tools(source.path(), &output_root, &tool);
        settings.dry_run = true;

        let result = run(&settings).unwrap();
        assert_eq!(result.attempted, 1);
        assert_eq!(result.successful, 0);
        assert_eq!(result.failed, 0);
        assert!(!output_root.exists(), "dry run must not create the output root");
    }
}
