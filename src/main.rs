use clap::Parser;
use joke_fanout::utils::logger;
use joke_fanout::{
    write_report, CliConfig, FanoutError, FetchSettings, HttpJokeSource, JokeCoordinator,
    TomlConfig,
};

fn resolve_settings(config: &CliConfig) -> joke_fanout::Result<FetchSettings> {
    match &config.config {
        Some(path) => {
            tracing::info!("Loading fetch settings from {}", path);
            let file_config = TomlConfig::from_file(path)?;
            FetchSettings::from_provider(&file_config)
        }
        None => FetchSettings::from_provider(config),
    }
}

fn exit_with(e: FanoutError) -> ! {
    tracing::error!("❌ Startup failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting joke-fanout");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = resolve_settings(&config).unwrap_or_else(|e| exit_with(e));
    let source = HttpJokeSource::from_settings(&settings).unwrap_or_else(|e| exit_with(e));
    let endpoint = source.endpoint().to_string();

    let coordinator = JokeCoordinator::new(source, settings.workers);
    tracing::info!(
        "Fetching {} jokes from {}",
        coordinator.workers(),
        endpoint
    );
    let results = coordinator.run().await;

    // Per-request failures are part of the report, not the exit status.
    let stdout = std::io::stdout();
    write_report(&mut stdout.lock(), &results)?;

    Ok(())
}
