use clap::Parser;
use resource_specs::utils::error::{ClientError, ErrorSeverity};
use resource_specs::utils::logger;
use resource_specs::{show_resources, CliConfig, HttpFacade, SpecClient};

fn exit_code(e: &ClientError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2, // 可重試的錯誤
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: ClientError) -> ! {
    tracing::error!(
        "❌ show-resources failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting show-resources for {}", config.service);
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let settings = config.resolve_settings().unwrap_or_else(|e| fail(e));
    tracing::debug!(
        "Using controller {} (facade {}, timeout {}s)",
        settings.endpoint,
        settings.facade,
        settings.timeout_seconds
    );

    let facade = HttpFacade::new(&settings).unwrap_or_else(|e| fail(e));
    let client = SpecClient::new(facade);

    let output = show_resources(&client, &config.service, settings.format)
        .await
        .unwrap_or_else(|e| fail(e));
    print!("{}", output);

    tracing::info!("✅ Done");
    Ok(())
}
