//! CLI argument parsing for both binaries

use clap::Parser;
use std::path::PathBuf;

/// acb-convert - Batch convert ACB containers to MP3
///
/// Walks a source tree for .acb files, decodes each with vgmstream-cli into
/// intermediate WAV tracks, encodes the tracks with LAME, and mirrors the
/// source directory structure into the output tree.
#[derive(Parser, Debug)]
#[command(name = "acb-convert")]
#[command(author, version, about, long_about = None)]
pub struct ConvertCli {
    /// Root directory containing the .acb files (searched recursively)
    #[arg(value_name = "SOURCE_DIR")]
    pub source_dir: PathBuf,

    /// Root directory for converted MP3s (structure is mirrored)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: PathBuf,

    /// Path to the vgmstream-cli executable (defaults to searching PATH)
    #[arg(long, value_name = "PATH")]
    pub vgmstream_path: Option<PathBuf>,

    /// Path to the LAME executable (defaults to searching PATH)
    #[arg(long, value_name = "PATH")]
    pub lame_path: Option<PathBuf>,

    /// Quality/options string for LAME (e.g. '-V 2', '-b 320')
    #[arg(long, value_name = "STR", allow_hyphen_values = true, default_value = super::settings::DEFAULT_LAME_QUALITY)]
    pub lame_quality: String,

    /// Keep the intermediate WAV files (useful for debugging)
    #[arg(long, default_value = "false")]
    pub keep_wav: bool,

    /// Show the commands that would run without executing them
    #[arg(short = 'd', long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// acb-rename - Strip the .bytes suffix from container files
///
/// Scans a directory (optionally recursively) for files ending in .bytes and
/// renames them by removing that suffix. Never overwrites an existing file.
#[derive(Parser, Debug)]
#[command(name = "acb-rename")]
#[command(author, version, about, long_about = None)]
pub struct RenameCli {
    /// Target directory containing the .bytes files
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Search for files recursively in subdirectories
    #[arg(short, long, default_value = "false")]
    pub recursive: bool,

    /// Show which files would be renamed without renaming them
    #[arg(short = 'd', long, default_value = "false")]
    pub dry_run: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Map verbosity flags to a default tracing filter string
pub fn log_filter(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_cli_parses_positional_args() {
        let cli = ConvertCli::parse_from(["acb-convert", "./src", "./out"]);
        assert_eq!(cli.source_dir, PathBuf::from("./src"));
        assert_eq!(cli.output_dir, PathBuf::from("./out"));
        assert_eq!(cli.lame_quality, "-V 2");
        assert!(!cli.keep_wav);
        assert!(!cli.dry_run);
    }

    #[test]
    fn convert_cli_parses_tool_overrides() {
        let cli = ConvertCli::parse_from([
            "acb-convert",
            "./src",
            "./out",
            "--vgmstream-path",
            "/opt/vgmstream-cli",
            "--lame-quality",
            "-b 320",
            "--keep-wav",
            "-d",
        ]);
        assert_eq!(
            cli.vgmstream_path,
            Some(PathBuf::from("/opt/vgmstream-cli"))
        );
        assert_eq!(cli.lame_quality, "-b 320");
        assert!(cli.keep_wav);
        assert!(cli.dry_run);
    }

    #[test]
    fn rename_cli_defaults_to_current_dir() {
        let cli = RenameCli::parse_from(["acb-rename"]);
        assert_eq!(cli.directory, PathBuf::from("."));
        assert!(!cli.recursive);
        assert!(!cli.dry_run);
    }

    #[test]
    fn log_filter_levels() {
        assert_eq!(log_filter(0, false), "info");
        assert_eq!(log_filter(2, false), "trace");
        assert_eq!(log_filter(3, true), "error");
    }
}
