pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{ConsoleSink, RecordingSink};
pub use config::settings::RunSettings;
pub use crate::core::{facade::Computer, shell::Shell};
pub use utils::error::{PatternError, Result};
