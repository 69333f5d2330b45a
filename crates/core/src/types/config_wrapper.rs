use crate::form::field_array::FieldArray;
use eyre::{Result, eyre};
use std::path::Path;
use std::{env, fs};
use toml::Value;

pub struct ConfigWrapper {
    raw_config: Value,
}

impl ConfigWrapper {
    pub const DEFAULT_PATH: &'static str = "action_list.toml";
    const DEFAULT_LOG_FILTER: &'static str = "info";

    pub fn new(raw_config: Value) -> Self {
        Self { raw_config }
    }

    pub fn from_toml_str(config_content: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(config_content)?;
        Ok(Self::new(Value::Table(table)))
    }

    /// Reads the given file, or `action_list.toml` when no path is given.
    /// Only the default file may be absent, in which case defaults apply.
    pub fn from_file(path: Option<&str>) -> Result<Self> {
        let config_content = match path {
            Some(p) => fs::read_to_string(p)
                .map_err(|e| eyre!("Failed to read config {}: {}", p, e))?,
            None if Path::new(Self::DEFAULT_PATH).exists() => {
                fs::read_to_string(Self::DEFAULT_PATH)?
            }
            None => return Ok(Self::new(Value::Table(toml::Table::new()))),
        };
        Self::from_toml_str(&config_content)
    }

    pub fn form_field_name(&self) -> String {
        self.raw_config
            .get("form")
            .and_then(|f| f.get("field"))
            .and_then(|f| f.as_str())
            .unwrap_or(FieldArray::DEFAULT_NAME)
            .to_string()
    }

    pub fn log_filter(&self) -> Result<String> {
        let filter = self
            .raw_config
            .get("logging")
            .and_then(|l| l.get("filter"))
            .and_then(|l| l.as_str())
            .unwrap_or(Self::DEFAULT_LOG_FILTER);

        if let Some(env_var) = filter.strip_prefix("env:") {
            env::var(env_var).map_err(|_| eyre!("Environment variable {} not set", env_var))
        } else {
            Ok(filter.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() -> Result<()> {
        let config = ConfigWrapper::from_toml_str("")?;
        assert_eq!(config.form_field_name(), "actions");
        assert_eq!(config.log_filter()?, "info");
        Ok(())
    }

    #[test]
    fn test_values_from_toml() -> Result<()> {
        let config = ConfigWrapper::from_toml_str(
            r#"
            [form]
            field = "proposal_actions"

            [logging]
            filter = "action_list=debug"
            "#,
        )?;
        assert_eq!(config.form_field_name(), "proposal_actions");
        assert_eq!(config.log_filter()?, "action_list=debug");
        Ok(())
    }

    #[test]
    fn test_log_filter_from_env() -> Result<()> {
        let config = ConfigWrapper::from_toml_str("[logging]\nfilter = \"env:PATH\"")?;
        assert_eq!(config.log_filter()?, env::var("PATH")?);

        let config = ConfigWrapper::from_toml_str(
            "[logging]\nfilter = \"env:ACTION_LIST_UNSET_FILTER_VARIABLE\"",
        )?;
        assert!(config.log_filter().is_err());
        Ok(())
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(ConfigWrapper::from_file(Some("does/not/exist.toml")).is_err());
    }
}
