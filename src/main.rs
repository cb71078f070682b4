use clap::Parser;
use scry_relay::adapters::telegram;
use scry_relay::utils::{logger, validation::Validate};
use scry_relay::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init(config.verbose, config.json_logs);

    tracing::info!("Starting scry-relay");
    if let Some(path) = cli.config.as_ref() {
        tracing::info!("📁 Loaded configuration from: {}", path);
    }
    if config.verbose {
        tracing::debug!("Bot config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    if let Err(e) = telegram::run(config).await {
        tracing::error!("❌ Bot stopped with error: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
