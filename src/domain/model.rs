/// Scryfall 查詢結果的三種形狀
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardMatch {
    /// Exact match with a single face image. `image` is `None` when Scryfall
    /// returned no image at all.
    Single {
        name: String,
        image: Option<String>,
        url: String,
    },
    /// Exact match of a card whose faces carry separate images.
    MultiFace {
        name: String,
        images: Vec<String>,
        url: String,
    },
    /// No exact match. `suggestions` keeps upstream order and `total` is the
    /// upstream result count, which may exceed `suggestions.len()`.
    NotFound {
        query: String,
        suggestions: Vec<String>,
        total: u64,
    },
}

/// 要送回聊天室的訊息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Photo { image_url: String, caption: String },
    MediaGroup { image_urls: Vec<String>, caption: String },
    /// `markdown` selects Telegram's Markdown parse mode
    Text { body: String, markdown: bool },
}

impl Reply {
    pub fn kind(&self) -> &'static str {
        match self {
            Reply::Photo { .. } => "photo",
            Reply::MediaGroup { .. } => "media_group",
            Reply::Text { .. } => "text",
        }
    }
}

/// 處理一則訊息後的統計
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RelayOutcome {
    pub queries: usize,
    pub replies_sent: usize,
    pub lookup_failures: usize,
    pub send_failures: usize,
}
