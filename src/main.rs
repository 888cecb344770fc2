use clap::Parser;
use translation_patcher::app;
use translation_patcher::utils::logger;
use translation_patcher::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting translation-patcher");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let stdout = std::io::stdout();
    if let Err(e) = app::run(&config, &mut stdout.lock()) {
        tracing::error!("❌ Translation patch failed: {} (Category: {:?})", e, e.category());
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    Ok(())
}
