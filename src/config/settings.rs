use crate::config::toml_config::TomlConfig;
use crate::core::factory_method::CreatorKind;
use crate::core::shell::ShellSettings;
use crate::domain::model::Demo;
use crate::utils::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "json" => Ok(LogFormat::Json),
            _ => Err(PatternError::invalid_value(
                "log_format",
                s,
                "expected compact or json",
            )),
        }
    }
}

/// Effective settings for one run: defaults, then the TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSettings {
    pub demos: Vec<Demo>,
    pub interactive: bool,
    pub creators: Vec<CreatorKind>,
    pub pause: bool,
    pub modal: bool,
    pub verbose: bool,
    pub log_level: Option<String>,
    pub log_format: LogFormat,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            demos: vec![Demo::Facade],
            interactive: false,
            creators: vec![CreatorKind::A, CreatorKind::B],
            pause: true,
            modal: false,
            verbose: false,
            log_level: None,
            log_format: LogFormat::Compact,
        }
    }
}

impl RunSettings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        let mut settings = Self::default();

        if let Some(demos) = config.demos()? {
            settings.demos = demos;
        }
        if let Some(interactive) = config.shell.interactive {
            settings.interactive = interactive;
        }
        if let Some(creators) = config.creators()? {
            settings.creators = creators;
        }
        if let Some(pause) = config.factory_method.pause {
            settings.pause = pause;
        }
        if let Some(modal) = config.output.modal {
            settings.modal = modal;
        }
        settings.log_level = config.logging.level.clone();
        if let Some(format) = &config.logging.format {
            settings.log_format = format.parse()?;
        }

        Ok(settings)
    }

    pub fn shell_settings(&self) -> ShellSettings {
        ShellSettings {
            creators: self.creators.clone(),
            pause: self.pause,
        }
    }
}
