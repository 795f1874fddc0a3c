use crate::adapters::memory::InMemoryPromotionCatalog;
use crate::utils::error::{LendingError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_FORMATS: [&str; 2] = ["compact", "json"];
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LendingConfig {
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub promotions: Vec<PromotionEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PromotionEntry {
    pub name: String,
    /// Kept as text so that amounts like `"10.50"` keep their scale.
    pub discount: String,
}

impl LendingConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LendingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LendingError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the environment value, leaving unknown variables as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LendingError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logs(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .map(|format| format == "json")
            .unwrap_or(false)
    }

    /// Fails with `MissingConfigError` unless a promotion with this name is configured.
    pub fn require_promotion(&self, name: &str) -> Result<()> {
        let entry = self.promotions.iter().find(|entry| entry.name == name);
        validation::validate_required_field(&format!("promotions.{}", name), &entry)?;
        Ok(())
    }

    pub fn promotion_catalog(&self) -> Result<InMemoryPromotionCatalog> {
        self.promotions
            .iter()
            .map(|entry| {
                validation::parse_non_negative_decimal("promotions.discount", &entry.discount)
                    .map(|discount| (entry.name.clone(), discount))
            })
            .collect()
    }
}

impl Validate for LendingConfig {
    fn validate(&self) -> Result<()> {
        if let Some(logging) = &self.logging {
            if let Some(level) = &logging.level {
                validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
            }
            if let Some(format) = &logging.format {
                validation::validate_one_of("logging.format", format, &LOG_FORMATS)?;
            }
        }

        for entry in &self.promotions {
            validation::validate_non_empty_string("promotions.name", &entry.name)?;
            validation::parse_non_negative_decimal("promotions.discount", &entry.discount)?;
        }
        validation::validate_unique(
            "promotions.name",
            self.promotions.iter().map(|entry| entry.name.as_str()),
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::DocumentStoreAccessor;
    use bigdecimal::BigDecimal;
    use std::io::Write;
    use std::str::FromStr;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r#"
[logging]
level = "debug"
format = "json"

[[promotions]]
name = "Student Promo"
discount = "10"

[[promotions]]
name = "Spring Sale"
discount = "2.50"
"#;

        let config = LendingConfig::from_toml_str(toml_content).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), Some("debug"));
        assert!(config.json_logs());
        assert_eq!(config.promotions.len(), 2);

        let catalog = config.promotion_catalog().unwrap();
        assert_eq!(
            catalog.promotion_discount("Spring Sale").unwrap(),
            BigDecimal::from_str("2.50").unwrap()
        );
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = LendingConfig::from_toml_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.log_level(), None);
        assert!(!config.json_logs());
        assert!(config.promotion_catalog().unwrap().is_empty());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LOAN_DESK_TEST_STUDENT_DISCOUNT", "15");

        let toml_content = r#"
[[promotions]]
name = "Student Promo"
discount = "${LOAN_DESK_TEST_STUDENT_DISCOUNT}"
"#;

        let config = LendingConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.promotions[0].discount, "15");

        std::env::remove_var("LOAN_DESK_TEST_STUDENT_DISCOUNT");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let toml_content = r#"
[logging]
level = "${LOAN_DESK_TEST_UNSET_VARIABLE}"
"#;

        let config = LendingConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.log_level(), Some("${LOAN_DESK_TEST_UNSET_VARIABLE}"));
    }

    #[test]
    fn test_config_validation() {
        let bad_format = LendingConfig::from_toml_str("[logging]\nformat = \"pretty\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let negative = LendingConfig::from_toml_str(
            "[[promotions]]\nname = \"Student Promo\"\ndiscount = \"-5\"\n",
        )
        .unwrap();
        assert!(negative.validate().is_err());
        assert!(negative.promotion_catalog().is_err());

        let duplicated = LendingConfig::from_toml_str(
            r#"
[[promotions]]
name = "Student Promo"
discount = "10"

[[promotions]]
name = "Student Promo"
discount = "20"
"#,
        )
        .unwrap();
        assert!(duplicated.validate().is_err());
    }

    #[test]
    fn test_log_level_must_be_a_tracing_level() {
        let loud = LendingConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        match loud.validate() {
            Err(LendingError::InvalidConfigValueError { field, value, .. }) => {
                assert_eq!(field, "logging.level");
                assert_eq!(value, "loud");
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }

        for level in LOG_LEVELS {
            let config =
                LendingConfig::from_toml_str(&format!("[logging]\nlevel = \"{}\"\n", level))
                    .unwrap();
            assert!(config.validate().is_ok(), "level {}", level);
        }
    }

    #[test]
    fn test_require_promotion() {
        let config = LendingConfig::from_toml_str(
            "[[promotions]]\nname = \"Student Promo\"\ndiscount = \"10\"\n",
        )
        .unwrap();
        assert!(config.require_promotion("Student Promo").is_ok());

        match config.require_promotion("Spring Sale") {
            Err(LendingError::MissingConfigError { field }) => {
                assert_eq!(field, "promotions.Spring Sale")
            }
            other => panic!("expected MissingConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let result = LendingConfig::from_toml_str("[[promotions]\nname = ");
        assert!(matches!(result, Err(LendingError::ConfigError { .. })));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[[promotions]]
name = "Student Promo"
discount = "10"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = LendingConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.promotions[0].name, "Student Promo");
    }
}
