//! LAME encoder wrapper
//!
//! Invoked as `lame <quality tokens...> <input.wav> <output.mp3>`. LAME
//! writes its progress report to stderr, so stderr is logged at debug
//! level on success and folded into the error on failure.

use crate::error::{AcbripError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// Encode one waveform to its published path, blocking until LAME exits.
pub fn encode(exe: &Path, quality_opts: &[String], wav: &Path, output: &Path) -> Result<()> {
    let mut cmd = Command::new(exe);
    cmd.args(quality_opts).arg(wav).arg(output);

    debug!(
        "Running: {} {} {} {}",
        exe.display(),
        quality_opts.join(" "),
        wav.display(),
        output.display()
    );

    let result = cmd.output().map_err(|e| {
        let reason = if e.kind() == ErrorKind::NotFound {
            format!("LAME not found at '{}'", exe.display())
        } else {
            format!("failed to run LAME: {}", e)
        };
        AcbripError::encode_failed(wav, reason)
    })?;

    let stderr = String::from_utf8_lossy(&result.stderr);
    if !stderr.trim().is_empty() {
        debug!("LAME output:\n{}", stderr.trim_end());
    }

    if !result.status.success() {
        return Err(AcbripError::encode_failed(
            wav,
            format!(
                "exit code {}: {}",
                result.status.code().unwrap_or(-1),
                stderr.trim()
            ),
        ));
    }

    Ok(())
}
