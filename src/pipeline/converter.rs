//! Per-job conversion driver
//!
//! One job = one container file. The driver creates a uniquely-named scratch
//! directory, runs the decoder into it, resolves a published name for every
//! waveform it finds, runs the encoder per waveform, and applies the scratch
//! retention policy: scratch contents survive a failed job (for inspection)
//! and survive any job when --keep-wav was requested.

use crate::config::settings::{KNOWN_PREFIXES, WAV_EXTENSION};
use crate::config::ConvertSettings;
use crate::error::{AcbripError, Result};
use crate::naming;
use crate::tools::{self, lame, vgmstream};
use crate::types::{path_has_suffix_ci, ConversionJob, WaveformUnit};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolved external tools, shared by every job in a batch
#[derive(Debug, Clone)]
pub struct Tools {
    /// Absolute path of the decoder executable
    pub vgmstream: PathBuf,
    /// Absolute path of the encoder executable
    pub lame: PathBuf,
    /// Tokenized encoder quality options
    pub lame_opts: Vec<String>,
}

/// Convert one container file, best-effort across its tracks.
///
/// An error return means the job failed; the batch walker counts it and
/// moves on.
pub fn process_job(job: &ConversionJob, tools: &Tools, settings: &ConvertSettings) -> Result<()> {
    println!("---");
    println!("Processing: {}", job.input.display());
    println!("Output dir: {}", job.output_dir.display());

    if settings.dry_run {
        return preview_job(job, tools);
    }

    fs::create_dir_all(&job.output_dir).map_err(|e| AcbripError::OutputDirError {
        path: job.output_dir.clone(),
        reason: e.to_string(),
    })?;

    let scratch = tempfile::Builder::new()
        .prefix(&format!("{}_wav_", job.base_name))
        .tempdir()
        .map_err(|e| AcbripError::scratch_error(std::env::temp_dir(), e))?
        .keep();
    debug!("Scratch dir: {}", scratch.display());

    let outcome = convert_in_scratch(job, &scratch, tools, settings);

    match &outcome {
        Ok(()) if !settings.keep_wav => {
            if let Err(e) = fs::remove_dir_all(&scratch) {
                warn!("Could not remove scratch dir '{}': {}", scratch.display(), e);
            } else {
                debug!("Removed scratch dir: {}", scratch.display());
            }
        }
        Ok(()) => info!("Keeping scratch dir as requested: {}", scratch.display()),
        Err(_) => info!("Keeping scratch dir for inspection: {}", scratch.display()),
    }

    outcome
}

fn convert_in_scratch(
    job: &ConversionJob,
    scratch: &Path,
    tools: &Tools,
    settings: &ConvertSettings,
) -> Result<()> {
    let pattern = wav_pattern(scratch, &job.base_name);
    let pattern_display = pattern.to_string_lossy();
    let input_display = job.input.to_string_lossy();
    println!(
        "  Running vgmstream: {}",
        tools::display_command(
            &tools.vgmstream,
            ["-o", pattern_display.as_ref(), input_display.as_ref()],
        )
    );
    vgmstream::decode(&tools.vgmstream, &job.input, &pattern)?;

    let units = list_waveforms(scratch, &job.input)?;
    encode_units(job, &units, tools, settings)
}

/// Scratch output pattern handed to the decoder; `%s` is its subsong
/// number placeholder.
fn wav_pattern(scratch: &Path, base_name: &str) -> PathBuf {
    scratch.join(format!("{}_%s{}", base_name, WAV_EXTENSION))
}

/// List the waveform files the decoder left in the scratch directory.
///
/// The listing order is whatever `read_dir` yields; it drives ordinal
/// assignment and is deliberately not sorted, matching the decoder-plus-
/// filesystem behavior downstream tooling expects.
pub(crate) fn list_waveforms(scratch: &Path, input: &Path) -> Result<Vec<WaveformUnit>> {
    let mut paths = Vec::new();
    let entries =
        fs::read_dir(scratch).map_err(|e| AcbripError::scratch_error(scratch, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AcbripError::scratch_error(scratch, e))?;
        let path = entry.path();
        if path.is_file() && path_has_suffix_ci(&path, WAV_EXTENSION) {
            paths.push(path);
        }
    }

    if paths.is_empty() {
        return Err(AcbripError::NoWaveforms(input.to_path_buf()));
    }

    let is_only = paths.len() == 1;
    Ok(paths
        .into_iter()
        .enumerate()
        .map(|(index, path)| WaveformUnit::new(path, index, is_only))
        .collect())
}

/// Encode every unit, best-effort: a failed unit marks the job failed but
/// the remaining units are still attempted.
fn encode_units(
    job: &ConversionJob,
    units: &[WaveformUnit],
    tools: &Tools,
    settings: &ConvertSettings,
) -> Result<()> {
    println!("  Found {} WAV file(s) to encode", units.len());
    let mut failed = 0usize;

    for unit in units {
        let basename = naming::published_basename(&job.base_name, unit, KNOWN_PREFIXES);
        let target = naming::published_path(&job.output_dir, &basename);
        println!("    {} -> {}", unit.file_name(), target.display());

        match lame::encode(&tools.lame, &tools.lame_opts, &unit.path, &target) {
            Ok(()) => {
                if !settings.keep_wav {
                    if let Err(e) = fs::remove_file(&unit.path) {
                        warn!(
                            "Could not remove intermediate '{}': {}",
                            unit.path.display(),
                            e
                        );
                    } else {
                        debug!("Removed intermediate {}", unit.file_name());
                    }
                }
            }
            Err(e) => {
                warn!("{}", e);
                // The failed unit's wav stays behind for inspection.
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(AcbripError::encode_failed(
            &job.input,
            format!("{} of {} track(s) failed to encode", failed, units.len()),
        ));
    }

    Ok(())
}

/// Dry-run path: report the commands that would run without touching the
/// filesystem. The decoder outcome is simulated deterministically from the
/// base name so single- and multi-track layouts can both be demonstrated.
fn preview_job(job: &ConversionJob, tools: &Tools) -> Result<()> {
    let scratch = std::env::temp_dir().join(format!("{}_wav_XXXX", job.base_name));
    let pattern = wav_pattern(&scratch, &job.base_name);

    let pattern_display = pattern.to_string_lossy();
    let input_display = job.input.to_string_lossy();
    println!(
        "  Would run vgmstream: {}",
        tools::display_command(
            &tools.vgmstream,
            ["-o", pattern_display.as_ref(), input_display.as_ref()],
        )
    );

    let listing = simulate_decoder_listing(&job.base_name);
    println!(
        "  (Dry run) Simulating {} track(s) found",
        listing.len()
    );

    let is_only = listing.len() == 1;
    for (index, name) in listing.iter().enumerate() {
        let unit = WaveformUnit::new(scratch.join(name), index, is_only);
        let basename = naming::published_basename(&job.base_name, &unit, KNOWN_PREFIXES);
        let target = naming::published_path(&job.output_dir, &basename);
        let mut args = tools.lame_opts.clone();
        args.push(unit.path.to_string_lossy().to_string());
        args.push(target.to_string_lossy().to_string());
        println!(
            "    Would run LAME: {}",
            tools::display_command(&tools.lame, args.iter().map(String::as_str))
        );
    }

    Ok(())
}

/// Deterministic stand-in for the decoder in dry-run mode: multi-track when
/// the base name contains "_multi_" or its first '_'-separated token has an
/// odd length, single-track otherwise.
pub(crate) fn simulate_decoder_listing(base_name: &str) -> Vec<String> {
    let first = base_name.split('_').next().unwrap_or(base_name);
    if base_name.contains("_multi_") || first.chars().count() % 2 != 0 {
        vec![
            format!("{}_0{}", base_name, WAV_EXTENSION),
            format!("{}_1{}", base_name, WAV_EXTENSION),
        ]
    } else {
        vec![format!("{}_0{}", base_name, WAV_EXTENSION)]
    }
}
