//! Container file discovery

pub mod scanner;

pub use scanner::{mirror_output_dir, scan_containers};
