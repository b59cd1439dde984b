use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_one_of, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Optional settings file. Every section and key may be left out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub store: Option<StoreConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

impl AppConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(InventoryError::MissingConfigError {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| InventoryError::ConfigError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| InventoryError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
        let re = PLACEHOLDER.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn store_path(&self) -> Option<&str> {
        self.store.as_ref().and_then(|s| s.path.as_deref())
    }

    pub fn log_format(&self) -> LogFormat {
        match self.logging.as_ref().and_then(|l| l.format.as_deref()) {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = self.store_path() {
            validate_path("store.path", path)?;
        }
        if let Some(format) = self.logging.as_ref().and_then(|l| l.format.as_deref()) {
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
[store]
path = "lot/inventory.csv"

[logging]
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.store_path(), Some("lot/inventory.csv"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.store_path(), None);
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DEALERSHIP_TEST_DATA_DIR", "/srv/dealer");

        let toml_content = r#"
[store]
path = "${DEALERSHIP_TEST_DATA_DIR}/inventory.csv"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.store_path(), Some("/srv/dealer/inventory.csv"));

        std::env::remove_var("DEALERSHIP_TEST_DATA_DIR");
    }

    #[test]
    fn test_config_validation() {
        let config = AppConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = AppConfig::from_toml_str("[store]\npath = \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        assert!(matches!(
            AppConfig::from_toml_str("[store\npath ="),
            Err(InventoryError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[store]\npath = \"file-test.csv\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.store_path(), Some("file-test.csv"));
    }

    #[test]
    fn test_missing_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::from_file(temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(InventoryError::MissingConfigError { .. })));
    }

    #[test]
    fn test_unreadable_config_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = AppConfig::from_file(temp_dir.path());
        assert!(matches!(result, Err(InventoryError::ConfigError { .. })));
    }
}
