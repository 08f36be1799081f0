use crate::core::calculator::{downtime_seconds, is_usable_time, UptimeCalculator};
use crate::core::{ConfigProvider, InputSource, OutputSink};
use crate::domain::model::{Downtime, HoursPolicy, TimeField, Tone, UptimeReport};
use crate::utils::error::{Result, UptimeError};
use crate::utils::validation::validate_time_field;

pub const GREETING: &str = "Hello! Calculate the uptime of your application.";
pub const INSTRUCTIONS: &str =
    "Input the downtime in hours (24 format), minutes (60 format) and seconds (60 format)";

/// One interactive run: greet, gather the three fields, compute, report.
pub struct UptimeSession<I: InputSource, O: OutputSink> {
    input: I,
    output: O,
    calculator: UptimeCalculator,
    hours_policy: HoursPolicy,
    clear_screen: bool,
    presets: [Option<f64>; 3],
}

impl<I: InputSource, O: OutputSink> UptimeSession<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            calculator: UptimeCalculator::default(),
            hours_policy: HoursPolicy::default(),
            clear_screen: true,
            presets: [None; 3],
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C, input: I, output: O) -> Self {
        Self::new(input, output)
            .with_calculator(UptimeCalculator::new(config.seconds_in_year()))
            .with_hours_policy(config.hours_policy())
            .with_clear_screen(config.clear_screen())
    }

    pub fn with_calculator(mut self, calculator: UptimeCalculator) -> Self {
        self.calculator = calculator;
        self
    }

    pub fn with_hours_policy(mut self, policy: HoursPolicy) -> Self {
        self.hours_policy = policy;
        self
    }

    pub fn with_clear_screen(mut self, clear_screen: bool) -> Self {
        self.clear_screen = clear_screen;
        self
    }

    /// A preset field is validated once and never prompted for.
    pub fn with_preset(mut self, field: TimeField, value: Option<f64>) -> Self {
        self.presets[field as usize] = value;
        self
    }

    pub fn run(&mut self) -> Result<UptimeReport> {
        if self.clear_screen {
            self.output.clear()?;
        }
        self.output.emit(Tone::Success, GREETING)?;
        self.output.emit(Tone::Success, INSTRUCTIONS)?;

        let mut downtime = Downtime::default();
        for field in TimeField::ALL {
            let value = self.resolve_field(field)?;
            downtime.set(field, value);
        }
        tracing::info!(
            "Downtime entered: {}h {}m {}s",
            downtime.hours,
            downtime.minutes,
            downtime.seconds
        );

        let report = self.evaluate(downtime);
        self.output.emit(report.tier.tone(), &report.message)?;
        Ok(report)
    }

    pub fn evaluate(&self, downtime: Downtime) -> UptimeReport {
        let total = downtime_seconds(&downtime);
        let uptime_percentage = self.calculator.compute_uptime_percentage(total);
        let tier = self.calculator.classify(uptime_percentage);
        tracing::info!("Uptime {}% classified as {} fault tolerance", uptime_percentage, tier);

        UptimeReport {
            downtime,
            downtime_seconds: total,
            uptime_percentage,
            tier,
            message: tier.describe(uptime_percentage),
        }
    }

    fn resolve_field(&mut self, field: TimeField) -> Result<f64> {
        let max = field.max_value(self.hours_policy);

        if let Some(value) = self.presets[field as usize] {
            validate_time_field(field, value, max)?;
            tracing::debug!("Using preset {} = {}", field, value);
            return Ok(value);
        }

        self.prompt_field(field, max)
    }

    fn prompt_field(&mut self, field: TimeField, max: f64) -> Result<f64> {
        let question = field.question();
        loop {
            let answer = self
                .input
                .ask(&question, 0.0)?
                .ok_or_else(|| UptimeError::InputClosed {
                    field: field.name().to_string(),
                })?;

            match parse_answer(&answer) {
                Some(value) if is_usable_time(field, value, max) => return Ok(value),
                _ => {
                    // re-prompting is the normal path, not a fault
                    tracing::debug!("Rejected {} answer: {:?}", field, answer.trim());
                    self.output.emit(Tone::Danger, field.invalid_message())?;
                }
            }
        }
    }
}

/// Blank means the default of 0. Anything unparsable is `None`.
pub fn parse_answer(answer: &str) -> Option<f64> {
    let trimmed = answer.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok()
}
