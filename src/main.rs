use clap::Parser;
use uptime_calc::utils::logger;
use uptime_calc::{CliConfig, ConsoleSink, TerminalInput, TimeField, UptimeError, UptimeSession};

fn exit_with(e: &UptimeError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting uptime-calc");
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with(&e),
    };

    let channel = config.prompt_channel();
    let mut session = UptimeSession::from_config(
        &settings,
        TerminalInput::new(channel),
        ConsoleSink::new(channel, settings.color),
    );
    for field in TimeField::ALL {
        session = session.with_preset(field, config.preset(field));
    }

    let report = match session.run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    if config.json {
        println!("{}", report.to_json()?);
    }

    Ok(())
}
