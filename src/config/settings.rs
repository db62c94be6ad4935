//! Runtime configuration settings and project constants

use std::path::PathBuf;

/// Suffix of input container files (case-insensitive match)
pub const CONTAINER_EXTENSION: &str = ".acb";

/// Suffix stripped by the renamer (case-insensitive match)
pub const RENAME_SUFFIX: &str = ".bytes";

/// Extension of intermediate decoded waveforms
pub const WAV_EXTENSION: &str = ".wav";

/// Extension of final encoded outputs
pub const OUTPUT_EXTENSION: &str = ".mp3";

/// Known filename prefixes from the source game's audio naming convention.
/// Ordered; the first case-insensitive match is stripped, exactly once.
pub const KNOWN_PREFIXES: &[&str] = &["vs_", "af_", "an_", "in_", "se_", "cl_", "collabo_es_"];

/// Default LAME quality/options string
pub const DEFAULT_LAME_QUALITY: &str = "-V 2";

/// PATH lookup name of the decoder executable
pub const VGMSTREAM_TOOL: &str = "vgmstream-cli";

/// PATH lookup name of the encoder executable
pub const LAME_TOOL: &str = "lame";

/// Fallback location of the decoder, relative to the working directory
/// (matches the layout of the distributed vgmstream Windows build)
#[cfg(windows)]
pub const DEFAULT_VGMSTREAM_PATH: &str = r".\vgmstream-win64\vgmstream-cli.exe";
#[cfg(not(windows))]
pub const DEFAULT_VGMSTREAM_PATH: &str = "./vgmstream-win64/vgmstream-cli";

/// Fallback location of the encoder, relative to the working directory
#[cfg(windows)]
pub const DEFAULT_LAME_PATH: &str = r".\Lame\lame.exe";
#[cfg(not(windows))]
pub const DEFAULT_LAME_PATH: &str = "./Lame/lame";

/// Runtime settings for the conversion pipeline
#[derive(Debug, Clone)]
pub struct ConvertSettings {
    /// Source root searched recursively for containers
    pub source: PathBuf,
    /// Output root mirroring the source structure
    pub output: PathBuf,
    /// Explicit decoder path, if given on the command line
    pub vgmstream_path: Option<PathBuf>,
    /// Explicit encoder path, if given on the command line
    pub lame_path: Option<PathBuf>,
    /// Raw encoder quality string, tokenized at setup
    pub lame_quality: String,
    /// Keep intermediate WAV files regardless of outcome
    pub keep_wav: bool,
    /// Report planned actions without touching the filesystem
    pub dry_run: bool,
}

impl ConvertSettings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::ConvertCli) -> Self {
        Self {
            source: cli.source_dir.clone(),
            output: cli.output_dir.clone(),
            vgmstream_path: cli.vgmstream_path.clone(),
            lame_path: cli.lame_path.clone(),
            lame_quality: cli.lame_quality.clone(),
            keep_wav: cli.keep_wav,
            dry_run: cli.dry_run,
        }
    }
}

impl Default for ConvertSettings {
    fn default() -> Self {
        Self {
            source: PathBuf::from("."),
            output: PathBuf::from("./output"),
            vgmstream_path: None,
            lame_path: None,
            lame_quality: DEFAULT_LAME_QUALITY.to_string(),
            keep_wav: false,
            dry_run: false,
        }
    }
}

/// Runtime settings for the renamer
#[derive(Debug, Clone)]
pub struct RenameSettings {
    /// Directory scanned for files carrying the rename suffix
    pub directory: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Report planned renames without performing them
    pub dry_run: bool,
}

impl RenameSettings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::RenameCli) -> Self {
        Self {
            directory: cli.directory.clone(),
            recursive: cli.recursive,
            dry_run: cli.dry_run,
        }
    }
}

impl Default for RenameSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            recursive: false,
            dry_run: false,
        }
    }
}
