use crate::domain::model::{Downtime, FaultToleranceTier, TimeField, UptimePercentage};

/// A 365-day year. No leap-year adjustment.
pub const SECONDS_IN_YEAR: f64 = 31_536_000.0;

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;

pub const MEDIUM_TIER_FLOOR: f64 = 99.5;
pub const HIGH_TIER_FLOOR: f64 = 99.9;

/// True iff `0 <= time <= max_time`. NaN is never valid.
pub fn is_valid_time(time: f64, max_time: f64) -> bool {
    time <= max_time && time >= 0.0
}

pub fn seconds_from_hours(hours: f64) -> f64 {
    hours * SECONDS_PER_HOUR
}

pub fn seconds_from_minutes(minutes: f64) -> f64 {
    minutes * SECONDS_PER_MINUTE
}

pub fn field_seconds(field: TimeField, value: f64) -> f64 {
    match field {
        TimeField::Hours => seconds_from_hours(value),
        TimeField::Minutes => seconds_from_minutes(value),
        TimeField::Seconds => value,
    }
}

/// In range and still finite once converted to seconds.
pub fn is_usable_time(field: TimeField, value: f64, max_time: f64) -> bool {
    is_valid_time(value, max_time) && field_seconds(field, value).is_finite()
}

pub fn downtime_seconds(downtime: &Downtime) -> f64 {
    seconds_from_hours(downtime.hours) + seconds_from_minutes(downtime.minutes) + downtime.seconds
}

/// Uptime over a standard 365-day year.
pub fn compute_uptime_percentage(downtime_seconds: f64) -> UptimePercentage {
    UptimeCalculator::default().compute_uptime_percentage(downtime_seconds)
}

/// Bands are closed on their lower edge.
pub fn classify_fault_tolerance(percentage: f64) -> FaultToleranceTier {
    let low = percentage < MEDIUM_TIER_FLOOR;
    let medium = percentage >= MEDIUM_TIER_FLOOR && percentage < HIGH_TIER_FLOOR;

    if low {
        FaultToleranceTier::Low
    } else if medium {
        FaultToleranceTier::Medium
    } else {
        FaultToleranceTier::High
    }
}

/// Uptime arithmetic over a configurable year length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UptimeCalculator {
    seconds_in_year: f64,
}

impl UptimeCalculator {
    /// `seconds_in_year` must be non-zero; config validation enforces a positive value.
    pub fn new(seconds_in_year: f64) -> Self {
        Self { seconds_in_year }
    }

    pub fn seconds_in_year(&self) -> f64 {
        self.seconds_in_year
    }

    pub fn compute_uptime_percentage(&self, downtime_seconds: f64) -> UptimePercentage {
        let uptime_in_year = self.seconds_in_year - downtime_seconds;
        let percentage = UptimePercentage::rounded((uptime_in_year / self.seconds_in_year) * 100.0);

        tracing::debug!(
            "downtime {}s over a {}s year -> {}%",
            downtime_seconds,
            self.seconds_in_year,
            percentage
        );

        percentage
    }

    /// Classification uses the rounded percentage, the same value the user sees.
    pub fn classify(&self, percentage: UptimePercentage) -> FaultToleranceTier {
        classify_fault_tolerance(percentage.value())
    }
}

impl Default for UptimeCalculator {
    fn default() -> Self {
        Self::new(SECONDS_IN_YEAR)
    }
}
