use crate::config::toml_config::TomlConfig;
use crate::config::BotConfig;
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scry-relay")]
#[command(about = "Answers [[card name]] mentions in Telegram chats with Scryfall lookups")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Scryfall API base URL
    #[arg(long, env = "SCRYFALL_API_BASE")]
    pub api_base: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Maximum number of suggested names in a "not found" reply
    #[arg(long)]
    pub max_suggestions: Option<usize>,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 預設值 → TOML 檔案 → 命令列
    pub fn resolve(&self) -> Result<BotConfig> {
        let mut config = BotConfig::default();

        if let Some(path) = self.config.as_ref() {
            let file = TomlConfig::from_file(path)?;
            config = config.merge_toml(&file);
        }

        if let Some(token) = self.token.as_ref() {
            config.token = token.clone();
        }
        if let Some(api_base) = self.api_base.as_ref() {
            config.api_base = api_base.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(max) = self.max_suggestions {
            config.max_suggestions = max;
        }
        config.json_logs |= self.json_logs;
        config.verbose = self.verbose;

        Ok(config)
    }
}
