use anyhow::Result;
use uptime_calc::core::session::{GREETING, INSTRUCTIONS};
use uptime_calc::{
    FaultToleranceTier, HoursPolicy, RecordingSink, ScriptedInput, Settings, TimeField, Tone,
    UptimeError, UptimeReport, UptimeSession,
};

fn run_with(
    answers: &[&str],
    policy: HoursPolicy,
) -> (uptime_calc::Result<UptimeReport>, ScriptedInput, RecordingSink) {
    let mut input = ScriptedInput::new(answers.iter().copied());
    let mut output = RecordingSink::new();
    let result = UptimeSession::new(&mut input, &mut output)
        .with_hours_policy(policy)
        .run();
    (result, input, output)
}

#[test]
fn test_no_downtime_is_great_fault_tolerance() -> Result<()> {
    let (result, input, output) = run_with(&["", "", ""], HoursPolicy::Unbounded);
    let report = result?;

    assert_eq!(report.downtime_seconds, 0.0);
    assert_eq!(report.uptime_percentage.to_string(), "100.000");
    assert_eq!(report.tier, FaultToleranceTier::High);

    assert_eq!(output.clears, 1);
    assert_eq!(output.messages()[0], GREETING);
    assert_eq!(output.messages()[1], INSTRUCTIONS);
    assert_eq!(
        output.last(),
        Some(&(
            Tone::Success,
            "Your uptime is 100.000% in a year. It indicates a great fault tolerance!".to_string()
        ))
    );

    assert_eq!(
        input.questions,
        vec![
            "How long (hours) your system is down?",
            "How long (minutes) your system is down?",
            "How long (seconds) your system is down?",
        ]
    );
    Ok(())
}

#[test]
fn test_one_hour_of_downtime() -> Result<()> {
    let (result, _, _) = run_with(&["1", "0", "0"], HoursPolicy::Unbounded);
    let report = result?;

    assert_eq!(report.downtime_seconds, 3600.0);
    assert_eq!(report.uptime_percentage.to_string(), "99.989");
    assert_eq!(report.tier, FaultToleranceTier::High);
    Ok(())
}

#[test]
fn test_full_day_at_hours_cap_is_medium() -> Result<()> {
    let (result, _, output) = run_with(&["24", "", ""], HoursPolicy::Day);
    let report = result?;

    assert_eq!(report.downtime_seconds, 86_400.0);
    assert_eq!(report.uptime_percentage.to_string(), "99.726");
    assert_eq!(report.tier, FaultToleranceTier::Medium);
    assert_eq!(
        output.last(),
        Some(&(
            Tone::Warning,
            "Your uptime is 99.726% in a year. It indicates a good fault tolerance.".to_string()
        ))
    );
    Ok(())
}

#[test]
fn test_medium_tier_lower_edge() -> Result<()> {
    let (result, _, _) = run_with(&["43", "48", "0"], HoursPolicy::Unbounded);
    let report = result?;

    assert_eq!(report.downtime_seconds, 157_680.0);
    assert_eq!(report.uptime_percentage.to_string(), "99.500");
    assert_eq!(report.tier, FaultToleranceTier::Medium);
    Ok(())
}

#[test]
fn test_multi_day_downtime_is_low() -> Result<()> {
    let (result, _, output) = run_with(&["48", "0", "0"], HoursPolicy::Unbounded);
    let report = result?;

    assert_eq!(report.uptime_percentage.to_string(), "99.452");
    assert_eq!(report.tier, FaultToleranceTier::Low);
    assert_eq!(
        output.last(),
        Some(&(
            Tone::Danger,
            "Your uptime is 99.452% in a year. Be careful, it doesn't indicate a good fault tolerance."
                .to_string()
        ))
    );
    Ok(())
}

#[test]
fn test_invalid_answers_are_reprompted() -> Result<()> {
    let (result, input, output) =
        run_with(&["abc", "-1", "2", "61", "30", ""], HoursPolicy::Unbounded);
    let report = result?;

    assert_eq!(report.downtime.hours, 2.0);
    assert_eq!(report.downtime.minutes, 30.0);
    assert_eq!(report.downtime.seconds, 0.0);
    assert_eq!(report.uptime_percentage.to_string(), "99.971");

    let rejections: Vec<&str> = output
        .lines
        .iter()
        .filter(|(tone, _)| *tone == Tone::Danger)
        .map(|(_, line)| line.as_str())
        .collect();
    assert_eq!(
        rejections,
        vec![
            "Please enter a valid hour",
            "Please enter a valid hour",
            "Please enter a valid minute",
        ]
    );
    assert_eq!(input.questions.len(), 6);
    assert_eq!(input.remaining(), 0);
    Ok(())
}

#[test]
fn test_day_policy_rejects_more_than_24_hours() -> Result<()> {
    let (result, _, output) = run_with(&["25", "24", "0", "0"], HoursPolicy::Day);
    let report = result?;

    assert_eq!(report.downtime.hours, 24.0);
    assert!(output.messages().contains(&"Please enter a valid hour"));
    Ok(())
}

#[test]
fn test_closed_input_reports_pending_field() {
    let (result, _, _) = run_with(&["1"], HoursPolicy::Unbounded);

    match result {
        Err(UptimeError::InputClosed { field }) => assert_eq!(field, "minutes"),
        other => panic!("expected InputClosed, got {:?}", other),
    }
}

#[test]
fn test_presets_skip_prompts() -> Result<()> {
    let mut input = ScriptedInput::new(["15"]);
    let mut output = RecordingSink::new();

    let report = UptimeSession::new(&mut input, &mut output)
        .with_preset(TimeField::Hours, Some(1.0))
        .with_preset(TimeField::Seconds, Some(30.0))
        .run()?;

    assert_eq!(input.questions, vec!["How long (minutes) your system is down?"]);
    assert_eq!(report.downtime_seconds, 3600.0 + 900.0 + 30.0);
    Ok(())
}

#[test]
fn test_invalid_preset_fails_without_prompting() {
    let mut input = ScriptedInput::new(["0", "0", "0"]);
    let mut output = RecordingSink::new();

    let result = UptimeSession::new(&mut input, &mut output)
        .with_preset(TimeField::Minutes, Some(75.0))
        .run();

    assert!(matches!(
        result,
        Err(UptimeError::InvalidTimeValue { ref field, .. }) if field == "minutes"
    ));
    assert_eq!(input.questions.len(), 1);
}

#[test]
fn test_settings_drive_session() -> Result<()> {
    let settings = Settings {
        seconds_in_year: 1000.0,
        hours_policy: HoursPolicy::Day,
        clear_screen: false,
        color: false,
    };
    let mut input = ScriptedInput::new(["", "", "1"]);
    let mut output = RecordingSink::new();

    let report = UptimeSession::from_config(&settings, &mut input, &mut output).run()?;

    assert_eq!(output.clears, 0);
    assert_eq!(report.uptime_percentage.to_string(), "99.900");
    assert_eq!(report.tier, FaultToleranceTier::High);
    Ok(())
}
