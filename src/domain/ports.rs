use crate::domain::model::{CardMatch, Reply};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Card database lookup.
#[async_trait]
pub trait CardLookup: Send + Sync {
    async fn lookup(&self, query: &str) -> Result<CardMatch>;
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait ChatReplier: Send + Sync {
    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn user_agent(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
    fn max_suggestions(&self) -> usize;
    fn silent(&self) -> bool;
}
