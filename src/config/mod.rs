#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_token, validate_url, Validate,
};

pub const DEFAULT_API_BASE: &str = "https://api.scryfall.com";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;
pub const TOKEN_ENV_VAR: &str = "TELEGRAM_API_TOKEN";

pub fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// 啟動時組好、之後唯讀的設定
#[derive(Clone)]
pub struct BotConfig {
    pub token: String,
    pub api_base: String,
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub max_suggestions: usize,
    pub silent: bool,
    pub json_logs: bool,
    pub verbose: bool,
}

impl std::fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BotConfig")
            .field("token", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("user_agent", &self.user_agent)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("max_suggestions", &self.max_suggestions)
            .field("silent", &self.silent)
            .finish_non_exhaustive()
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: default_user_agent(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            silent: true,
            json_logs: false,
            verbose: false,
        }
    }
}

impl BotConfig {
    /// Apply values present in a TOML file on top of `self`.
    pub fn merge_toml(mut self, file: &toml_config::TomlConfig) -> Self {
        if let Some(token) = file.bot.token.as_ref() {
            self.token = token.clone();
        }
        if let Some(api_base) = file.scryfall.api_base.as_ref() {
            self.api_base = api_base.clone();
        }
        if let Some(user_agent) = file.scryfall.user_agent.as_ref() {
            self.user_agent = user_agent.clone();
        }
        if let Some(timeout) = file.scryfall.timeout_seconds {
            self.timeout_seconds = timeout;
        }
        if let Some(max) = file.replies.max_suggestions {
            self.max_suggestions = max;
        }
        if let Some(silent) = file.replies.silent {
            self.silent = silent;
        }
        if let Some(json) = file.logging.json {
            self.json_logs = json;
        }
        self
    }
}

impl ConfigProvider for BotConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn user_agent(&self) -> &str {
        &self.user_agent
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    fn silent(&self) -> bool {
        self.silent
    }
}

impl Validate for BotConfig {
    fn validate(&self) -> Result<()> {
        validate_token(TOKEN_ENV_VAR, &self.token)?;
        validate_url("api_base", &self.api_base)?;
        validate_non_empty_string("user_agent", &self.user_agent)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        validate_range("max_suggestions", self.max_suggestions, 1, 50)?;

        tracing::debug!("✅ Bot configuration validation passed");
        Ok(())
    }
}
