pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{scryfall::ScryfallClient, telegram::TelegramReplier};
pub use config::BotConfig;
pub use core::{extract::extract_queries, relay::LookupRelay};
pub use utils::error::{RelayError, Result};
