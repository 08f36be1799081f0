use crate::core::calculator::SECONDS_IN_YEAR;
use crate::core::ConfigProvider;
use crate::domain::model::HoursPolicy;
use crate::utils::error::{Result, UptimeError};
use crate::utils::validation::{validate_one_of, validate_positive_number, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub calculator: Option<CalculatorConfig>,
    pub input: Option<InputConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculatorConfig {
    pub seconds_in_year: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub hours_policy: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub clear_screen: Option<bool>,
    pub color: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(UptimeError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UptimeError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UptimeError::ConfigParseError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(seconds) = self.calculator.as_ref().and_then(|c| c.seconds_in_year) {
            validate_positive_number("calculator.seconds_in_year", seconds)?;
        }

        if let Some(policy) = self.input.as_ref().and_then(|i| i.hours_policy.as_deref()) {
            validate_one_of("input.hours_policy", policy, &HoursPolicy::NAMES)?;
        }

        Ok(())
    }

    pub fn color(&self) -> bool {
        self.display.as_ref().and_then(|d| d.color).unwrap_or(true)
    }
}

impl ConfigProvider for TomlConfig {
    fn seconds_in_year(&self) -> f64 {
        self.calculator
            .as_ref()
            .and_then(|c| c.seconds_in_year)
            .unwrap_or(SECONDS_IN_YEAR)
    }

    fn hours_policy(&self) -> HoursPolicy {
        self.input
            .as_ref()
            .and_then(|i| i.hours_policy.as_deref())
            .and_then(HoursPolicy::from_name)
            .unwrap_or_default()
    }

    fn clear_screen(&self) -> bool {
        self.display.as_ref().and_then(|d| d.clear_screen).unwrap_or(true)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
