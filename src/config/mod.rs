//! Configuration and CLI handling

pub mod cli;
pub mod settings;

pub use cli::{ConvertCli, RenameCli};
pub use settings::{ConvertSettings, RenameSettings};
