use crate::adapters::scryfall::ScryfallClient;
use crate::config::BotConfig;
use crate::core::relay::LookupRelay;
use crate::domain::model::Reply;
use crate::domain::ports::{ChatReplier, ConfigProvider};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use teloxide::{
    payloads::{SendMediaGroupSetters, SendMessageSetters, SendPhotoSetters},
    prelude::*,
    types::{InputFile, InputMedia, InputMediaPhoto, MessageEntityKind, ParseMode},
};
use url::Url;

pub type ScryfallRelay = LookupRelay<ScryfallClient, TelegramReplier>;

/// Sends relay replies through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramReplier {
    bot: Bot,
    silent: bool,
}

impl TelegramReplier {
    pub fn new(bot: Bot, silent: bool) -> Self {
        Self { bot, silent }
    }
}

#[async_trait]
impl ChatReplier for TelegramReplier {
    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<()> {
        let chat = ChatId(chat_id);
        match reply {
            Reply::Photo { image_url, caption } => {
                let photo = InputFile::url(Url::parse(image_url)?);
                self.bot
                    .send_photo(chat, photo)
                    .caption(caption.clone())
                    .disable_notification(self.silent)
                    .await?;
            }
            Reply::MediaGroup {
                image_urls,
                caption,
            } => {
                // caption 只放在第一張，Telegram 會顯示成整組的說明
                let mut media = Vec::with_capacity(image_urls.len());
                for (i, image_url) in image_urls.iter().enumerate() {
                    let photo = InputMediaPhoto::new(InputFile::url(Url::parse(image_url)?));
                    let photo = if i == 0 {
                        photo.caption(caption.clone())
                    } else {
                        photo
                    };
                    media.push(InputMedia::Photo(photo));
                }
                self.bot
                    .send_media_group(chat, media)
                    .disable_notification(self.silent)
                    .await?;
            }
            Reply::Text { body, markdown } => {
                let mut request = self
                    .bot
                    .send_message(chat, body.clone())
                    .disable_notification(self.silent);
                if *markdown {
                    request = request.parse_mode(ParseMode::Markdown);
                }
                request.await?;
            }
        }
        Ok(())
    }
}

/// A message starting with a bot command entity (`/start`, `/help@bot`).
/// Plain text that merely begins with `/` is not a command.
pub fn is_command(msg: &Message) -> bool {
    msg.entities().is_some_and(|entities| {
        entities
            .iter()
            .any(|e| e.offset == 0 && matches!(e.kind, MessageEntityKind::BotCommand))
    })
}

/// 只處理一般文字訊息；圖片、語音與指令都略過
pub fn card_text(msg: &Message) -> Option<&str> {
    let text = msg.text()?;
    if is_command(msg) {
        tracing::debug!(chat_id = msg.chat.id.0, "ignoring bot command");
        return None;
    }
    Some(text)
}

async fn on_message(msg: Message, relay: Arc<ScryfallRelay>) -> ResponseResult<()> {
    let Some(text) = card_text(&msg) else {
        return Ok(());
    };

    let outcome = relay.handle_message(msg.chat.id.0, text).await;
    if outcome.queries > 0 {
        tracing::debug!(
            chat_id = msg.chat.id.0,
            queries = outcome.queries,
            replies_sent = outcome.replies_sent,
            lookup_failures = outcome.lookup_failures,
            send_failures = outcome.send_failures,
            "message handled"
        );
    }
    Ok(())
}

/// Connects to Telegram and long-polls until Ctrl-C.
pub async fn run(config: BotConfig) -> Result<()> {
    let bot = Bot::new(config.token.clone());

    let me = bot.get_me().await?;
    tracing::info!(username = ?me.username, "🤖 telegram bot connected");

    let lookup = ScryfallClient::new(&config)?;
    let replier = TelegramReplier::new(bot.clone(), config.silent());
    let relay: Arc<ScryfallRelay> = Arc::new(LookupRelay::new(lookup, replier));

    let handler = Update::filter_message().endpoint(on_message);

    tracing::info!("🚀 Listening for [[card]] mentions");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![relay])
        .default_handler(|update| async move {
            tracing::debug!(update_id = ?update.id, "ignoring non-message update");
        })
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    tracing::info!("telegram polling stopped");
    Ok(())
}
