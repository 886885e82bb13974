use crate::config::settings::{LogFormat, RunSettings};
use crate::config::toml_config::{LOG_FORMATS, LOG_LEVELS};
use crate::core::factory_method::CreatorKind;
use crate::domain::model::Demo;
use crate::utils::error::Result;
use crate::utils::validation::{parse_all, validate_one_of, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "gof-patterns")]
#[command(about = "Gang-of-Four design pattern demonstrations")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Demos to run in order: facade, factory-method, singleton
    #[arg(long, value_delimiter = ',')]
    pub demo: Vec<String>,

    /// Creators for the factory method demo, e.g. A,B
    #[arg(long, value_delimiter = ',')]
    pub creators: Vec<String>,

    /// Do not wait for Enter after the factory method demo
    #[arg(long)]
    pub no_pause: bool,

    /// Require acknowledgement after every message
    #[arg(long)]
    pub modal: bool,

    /// Read button presses from stdin instead of running demos
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format: compact or json
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log level when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}

impl CliConfig {
    /// Applies flags that were given on top of `settings`.
    pub fn apply(&self, settings: &mut RunSettings) -> Result<()> {
        if !self.demo.is_empty() {
            settings.demos = parse_all::<Demo>(&self.demo)?;
        }
        if !self.creators.is_empty() {
            settings.creators = parse_all::<CreatorKind>(&self.creators)?;
        }
        if self.no_pause {
            settings.pause = false;
        }
        if self.modal {
            settings.modal = true;
        }
        if self.interactive {
            settings.interactive = true;
        }
        if self.verbose {
            settings.verbose = true;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = Some(level.clone());
        }
        if let Some(format) = &self.log_format {
            settings.log_format = format.parse::<LogFormat>()?;
        }
        Ok(())
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        parse_all::<Demo>(&self.demo)?;
        parse_all::<CreatorKind>(&self.creators)?;
        if let Some(level) = &self.log_level {
            validate_one_of("log_level", level, &LOG_LEVELS)?;
        }
        if let Some(format) = &self.log_format {
            validate_one_of("log_format", format, &LOG_FORMATS)?;
        }
        Ok(())
    }
}
