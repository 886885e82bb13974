use crate::core::factory_method::CreatorKind;
use crate::domain::model::Demo;
use crate::utils::error::{PatternError, Result};
use crate::utils::validation::{parse_all, validate_non_empty_list, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];

/// File configuration. Every section and key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub shell: ShellConfig,
    #[serde(default)]
    pub factory_method: FactoryMethodConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShellConfig {
    pub demos: Option<Vec<String>>,
    pub interactive: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FactoryMethodConfig {
    pub creators: Option<Vec<String>>,
    pub pause: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub modal: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            PatternError::config(format!(
                "cannot read {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PatternError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| PatternError::config(format!("bad substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn demos(&self) -> Result<Option<Vec<Demo>>> {
        self.shell.demos.as_deref().map(parse_all).transpose()
    }

    pub fn creators(&self) -> Result<Option<Vec<CreatorKind>>> {
        self.factory_method
            .creators
            .as_deref()
            .map(parse_all)
            .transpose()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.demos()?;

        if let Some(creators) = &self.factory_method.creators {
            validate_non_empty_list("factory_method.creators", creators)?;
        }
        self.creators()?;

        if let Some(level) = &self.logging.level {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }
        if let Some(format) = &self.logging.format {
            validate_one_of("logging.format", format, &LOG_FORMATS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[shell]
demos = ["facade", "factory-method"]
interactive = false

[factory_method]
creators = ["B", "A"]
pause = false

[output]
modal = true

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.demos().unwrap(),
            Some(vec![Demo::Facade, Demo::FactoryMethod])
        );
        assert_eq!(
            config.creators().unwrap(),
            Some(vec![CreatorKind::B, CreatorKind::A])
        );
        assert_eq!(config.output.modal, Some(true));
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.demos().unwrap(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("GOF_PATTERNS_TEST_LEVEL", "warn");

        let config = TomlConfig::from_toml_str(
            r#"
[logging]
level = "${GOF_PATTERNS_TEST_LEVEL}"
format = "${GOF_PATTERNS_TEST_UNSET_FORMAT}"
"#,
        )
        .unwrap();

        assert_eq!(config.logging.level.as_deref(), Some("warn"));
        assert_eq!(
            config.logging.format.as_deref(),
            Some("${GOF_PATTERNS_TEST_UNSET_FORMAT}")
        );

        std::env::remove_var("GOF_PATTERNS_TEST_LEVEL");
    }

    #[test]
    fn test_config_validation() {
        let unknown_creator = TomlConfig::from_toml_str("[factory_method]\ncreators = [\"C\"]\n").unwrap();
        assert!(unknown_creator.validate().is_err());

        let no_creators = TomlConfig::from_toml_str("[factory_method]\ncreators = []\n").unwrap();
        assert!(no_creators.validate().is_err());

        let bad_format = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(TomlConfig::from_toml_str("[shell\ndemos = 3").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[shell]\ndemos = [\"singleton\"]\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.demos().unwrap(), Some(vec![Demo::Singleton]));
    }
}
