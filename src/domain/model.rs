use serde::Serialize;
use std::fmt;

/// Upper bound policy for the hours field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoursPolicy {
    /// Any non-negative number of hours; downtime may span several days.
    #[default]
    Unbounded,
    /// At most 24 hours.
    Day,
}

impl HoursPolicy {
    pub const NAMES: [&'static str; 2] = ["unbounded", "day"];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "unbounded" => Some(HoursPolicy::Unbounded),
            "day" => Some(HoursPolicy::Day),
            _ => None,
        }
    }

    pub fn max_hours(&self) -> f64 {
        match self {
            HoursPolicy::Unbounded => f64::MAX,
            HoursPolicy::Day => 24.0,
        }
    }
}

/// One of the three prompted duration components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Hours,
    Minutes,
    Seconds,
}

impl TimeField {
    pub const ALL: [TimeField; 3] = [TimeField::Hours, TimeField::Minutes, TimeField::Seconds];

    pub fn name(&self) -> &'static str {
        match self {
            TimeField::Hours => "hours",
            TimeField::Minutes => "minutes",
            TimeField::Seconds => "seconds",
        }
    }

    pub fn question(&self) -> String {
        format!("How long ({}) your system is down?", self.name())
    }

    pub fn invalid_message(&self) -> &'static str {
        match self {
            TimeField::Hours => "Please enter a valid hour",
            TimeField::Minutes => "Please enter a valid minute",
            TimeField::Seconds => "Please enter a valid second",
        }
    }

    pub fn max_value(&self, policy: HoursPolicy) -> f64 {
        match self {
            TimeField::Hours => policy.max_hours(),
            TimeField::Minutes | TimeField::Seconds => 60.0,
        }
    }
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Validated downtime components as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Downtime {
    pub hours: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl Downtime {
    pub fn new(hours: f64, minutes: f64, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    pub fn set(&mut self, field: TimeField, value: f64) {
        match field {
            TimeField::Hours => self.hours = value,
            TimeField::Minutes => self.minutes = value,
            TimeField::Seconds => self.seconds = value,
        }
    }
}

/// Annual uptime, already rounded to three decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct UptimePercentage(f64);

impl UptimePercentage {
    pub const DECIMALS: i32 = 3;

    /// Rounds half away from zero to [`Self::DECIMALS`] places.
    pub fn rounded(raw: f64) -> Self {
        let scale = 10f64.powi(Self::DECIMALS);
        // adding 0.0 turns -0.0 into 0.0
        Self((raw * scale).round() / scale + 0.0)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for UptimePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.*}", Self::DECIMALS as usize, self.0)
    }
}

/// Presentation tone, mapped to a color by the output sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FaultToleranceTier {
    Low,
    Medium,
    High,
}

impl FaultToleranceTier {
    pub fn tone(&self) -> Tone {
        match self {
            FaultToleranceTier::Low => Tone::Danger,
            FaultToleranceTier::Medium => Tone::Warning,
            FaultToleranceTier::High => Tone::Success,
        }
    }

    pub fn describe(&self, percentage: UptimePercentage) -> String {
        let verdict = match self {
            FaultToleranceTier::Low => "Be careful, it doesn't indicate a good fault tolerance.",
            FaultToleranceTier::Medium => "It indicates a good fault tolerance.",
            FaultToleranceTier::High => "It indicates a great fault tolerance!",
        };
        format!("Your uptime is {}% in a year. {}", percentage, verdict)
    }
}

impl fmt::Display for FaultToleranceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaultToleranceTier::Low => "low",
            FaultToleranceTier::Medium => "medium",
            FaultToleranceTier::High => "high",
        };
        f.write_str(name)
    }
}

/// Outcome of one calculator run.
#[derive(Debug, Clone, Serialize)]
pub struct UptimeReport {
    pub downtime: Downtime,
    pub downtime_seconds: f64,
    #[serde(serialize_with = "serialize_percentage")]
    pub uptime_percentage: UptimePercentage,
    pub tier: FaultToleranceTier,
    pub message: String,
}

impl UptimeReport {
    pub fn to_json(&self) -> crate::utils::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn serialize_percentage<S>(value: &UptimePercentage, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&value.to_string())
}
