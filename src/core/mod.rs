pub mod extract;
pub mod format;
pub mod relay;

pub use crate::domain::model::{CardMatch, RelayOutcome, Reply};
pub use crate::domain::ports::{CardLookup, ChatReplier, ConfigProvider};
pub use crate::utils::error::Result;
