//! Conversion pipeline
//!
//! `converter` drives one job end to end (scratch dir, decode, naming,
//! encode, cleanup); `orchestrator` resolves the external tools, walks the
//! source tree, and aggregates per-job outcomes into a batch summary.

pub mod converter;
pub mod orchestrator;

pub use converter::Tools;
pub use orchestrator::run;
