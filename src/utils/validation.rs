use crate::core::calculator::{field_seconds, is_valid_time};
use crate::domain::model::TimeField;
use crate::utils::error::{Result, UptimeError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Result-returning wrapper over [`is_valid_time`] for values that cannot be re-prompted.
pub fn validate_time_value(field_name: &str, value: f64, max_value: f64) -> Result<()> {
    if is_valid_time(value, max_value) {
        return Ok(());
    }

    let reason = if max_value == f64::MAX {
        "Value must be a non-negative number".to_string()
    } else {
        format!("Value must be between 0 and {}", max_value)
    };

    Err(UptimeError::InvalidTimeValue {
        field: field_name.to_string(),
        value: value.to_string(),
        reason,
    })
}

/// Like [`validate_time_value`], and also rejects values whose seconds overflow.
pub fn validate_time_field(field: TimeField, value: f64, max_value: f64) -> Result<()> {
    validate_time_value(field.name(), value, max_value)?;

    if !field_seconds(field, value).is_finite() {
        return Err(UptimeError::InvalidTimeValue {
            field: field.name().to_string(),
            value: value.to_string(),
            reason: "Value is too large to convert to seconds".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(UptimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a positive, finite number".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(UptimeError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}
