#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::calculator::SECONDS_IN_YEAR;
use crate::core::ConfigProvider;
use crate::domain::model::HoursPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::TimeField;
#[cfg(feature = "cli")]
use cli::PromptChannel;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

/// Effective settings after merging defaults, the TOML file and command-line flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub seconds_in_year: f64,
    pub hours_policy: HoursPolicy,
    pub clear_screen: bool,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seconds_in_year: SECONDS_IN_YEAR,
            hours_policy: HoursPolicy::default(),
            clear_screen: true,
            color: true,
        }
    }
}

impl Settings {
    pub fn from_toml(config: &TomlConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            seconds_in_year: config.seconds_in_year(),
            hours_policy: config.hours_policy(),
            clear_screen: config.clear_screen(),
            color: config.color(),
        })
    }
}

impl ConfigProvider for Settings {
    fn seconds_in_year(&self) -> f64 {
        self.seconds_in_year
    }

    fn hours_policy(&self) -> HoursPolicy {
        self.hours_policy
    }

    fn clear_screen(&self) -> bool {
        self.clear_screen
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_positive_number("seconds_in_year", self.seconds_in_year)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "uptime-calc")]
#[command(about = "Calculate the yearly uptime of your application from its downtime")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Downtime hours; skips the hours prompt
    #[arg(long, allow_negative_numbers = true)]
    pub hours: Option<f64>,

    /// Downtime minutes; skips the minutes prompt
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: Option<f64>,

    /// Downtime seconds; skips the seconds prompt
    #[arg(long, allow_negative_numbers = true)]
    pub seconds: Option<f64>,

    /// Upper bound for the hours field
    #[arg(long, value_parser = HoursPolicy::NAMES)]
    pub hours_policy: Option<String>,

    /// Length of the reference year in seconds
    #[arg(long, allow_negative_numbers = true)]
    pub seconds_in_year: Option<f64>,

    #[arg(long, help = "Do not clear the screen before prompting")]
    pub no_clear: bool,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, help = "Print the report as JSON after the run")]
    pub json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Flags override the file, which overrides the defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("Loading configuration from {}", path.display());
                Settings::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Settings::default(),
        };

        if let Some(seconds) = self.seconds_in_year {
            settings.seconds_in_year = seconds;
        }
        if let Some(policy) = self.hours_policy.as_deref().and_then(HoursPolicy::from_name) {
            settings.hours_policy = policy;
        }
        if self.no_clear {
            settings.clear_screen = false;
        }
        if self.no_color {
            settings.color = false;
        }

        settings.validate()?;
        tracing::debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }

    pub fn prompt_channel(&self) -> PromptChannel {
        PromptChannel::for_run(self.json)
    }

    pub fn preset(&self, field: TimeField) -> Option<f64> {
        match field {
            TimeField::Hours => self.hours,
            TimeField::Minutes => self.minutes,
            TimeField::Seconds => self.seconds,
        }
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_flags() {
        let cli = CliConfig::parse_from(["uptime-calc"]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(cli.preset(TimeField::Hours), None);
        assert_eq!(cli.prompt_channel(), PromptChannel::Stdout);
    }

    #[test]
    fn test_json_leaves_stdout_to_the_report() {
        let cli = CliConfig::parse_from(["uptime-calc", "--json"]);
        assert_eq!(cli.prompt_channel(), PromptChannel::Stderr);
    }

    #[test]
    fn test_flags_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[input]\nhours_policy = \"unbounded\"\n[display]\ncolor = true\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "uptime-calc",
            "--config",
            path.as_str(),
            "--hours-policy",
            "day",
            "--no-color",
            "--minutes",
            "-5",
        ]);
        let settings = cli.resolve().unwrap();

        assert_eq!(settings.hours_policy, HoursPolicy::Day);
        assert!(!settings.color);
        assert!(settings.clear_screen);
        assert_eq!(cli.preset(TimeField::Minutes), Some(-5.0));
    }

    #[test]
    fn test_rejects_non_positive_year() {
        let cli = CliConfig::parse_from(["uptime-calc", "--seconds-in-year", "-1"]);
        assert!(cli.resolve().is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let cli = CliConfig::parse_from(["uptime-calc", "--config", "/nonexistent/uptime.toml"]);
        assert!(cli.resolve().is_err());
    }
}
