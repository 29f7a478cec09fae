//! CLI library for testing purposes

pub mod config;
pub mod logging;
pub mod preview;
pub mod run;
pub mod walk;

pub use config::{Config, load_config};
pub use run::{RunSummary, TranslateArgs, TranslateRequest, run_translate};
