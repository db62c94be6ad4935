//! acbrip - Batch Game-Audio Extraction Toolkit
//!
//! Command-line utilities for an ACB audio modding workflow: rename
//! `.bytes` containers back to `.acb`-style names, and batch-convert ACB
//! containers to MP3 by driving vgmstream-cli and LAME as external tools.
//! The codec work is entirely external; this crate does the directory
//! walking, track naming, process invocation, and reporting.
//!
//! # Architecture
//!
//! The library is organized into several key modules:
//!
//! - `config`: CLI argument parsing, runtime settings, project constants
//! - `discovery`: container scanning and output tree mirroring
//! - `naming`: published-name resolution (single/multi track, prefix stripping)
//! - `tools`: external executable location and invocation wrappers
//! - `rename`: the .bytes suffix-stripping renamer
//! - `pipeline`: per-job driver and batch orchestration
//!
//! # Example
//!
//! ```no_run
//! use acbrip::{config::ConvertSettings, pipeline};
//!
//! let settings = ConvertSettings::default();
//! let result = pipeline::run(&settings).expect("Conversion failed");
//! println!("Converted {} containers", result.successful);
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod naming;
pub mod pipeline;
pub mod rename;
pub mod tools;
pub mod types;

// Re-export key types at crate root
pub use error::{AcbripError, Result};
pub use types::{BatchResult, ConversionJob, RenameResult, WaveformUnit};
