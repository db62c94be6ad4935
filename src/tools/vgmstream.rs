//! vgmstream-cli decoder wrapper
//!
//! Invoked as `vgmstream-cli -o <scratch>/<base>_%s.wav <input>`; vgmstream
//! substitutes the subsong number for `%s` and writes one WAV per stream.
//! The numbering convention is not parsed here beyond listing the files it
//! leaves behind.

use crate::error::{AcbripError, Result};
use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use tracing::{debug, info, warn};

/// Run the decoder for one container, blocking until it exits.
///
/// Success is exit code zero. Captured stdout/stderr is surfaced for
/// diagnosis either way.
pub fn decode(exe: &Path, input: &Path, output_pattern: &Path) -> Result<()> {
    let mut cmd = Command::new(exe);
    cmd.arg("-o").arg(output_pattern).arg(input);

    debug!(
        "Running: {} -o {} {}",
        exe.display(),
        output_pattern.display(),
        input.display()
    );

    let output = cmd.output().map_err(|e| {
        let reason = if e.kind() == ErrorKind::NotFound {
            format!("vgmstream-cli not found at '{}'", exe.display())
        } else {
            format!("failed to run vgmstream-cli: {}", e)
        };
        AcbripError::decode_failed(input, reason)
    })?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    if !stdout.trim().is_empty() {
        info!("vgmstream output:\n{}", stdout.trim_end());
    }
    if !stderr.trim().is_empty() {
        warn!("vgmstream stderr:\n{}", stderr.trim_end());
    }

    if !output.status.success() {
        return Err(AcbripError::decode_failed(
            input,
            format!(
                "exit code {}: {}",
                output.status.code().unwrap_or(-1),
                stderr.trim()
            ),
        ));
    }

    Ok(())
}
