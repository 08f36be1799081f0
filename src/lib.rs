pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{
    cli::{ConsoleSink, PromptChannel, TerminalInput},
    CliConfig,
};

pub use adapters::memory::{RecordingSink, ScriptedInput};
pub use config::{toml_config::TomlConfig, Settings};
pub use core::calculator::{
    classify_fault_tolerance, compute_uptime_percentage, is_valid_time, seconds_from_hours,
    seconds_from_minutes, UptimeCalculator, SECONDS_IN_YEAR,
};
pub use core::session::UptimeSession;
pub use domain::model::{
    Downtime, FaultToleranceTier, HoursPolicy, TimeField, Tone, UptimePercentage, UptimeReport,
};
pub use utils::error::{Result, UptimeError};
