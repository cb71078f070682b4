use crate::core::extract::extract_queries;
use crate::core::format::{error_reply, reply_for};
use crate::domain::model::{RelayOutcome, Reply};
use crate::domain::ports::{CardLookup, ChatReplier};

/// Turns chat text into card lookups and sends one reply per query.
pub struct LookupRelay<L: CardLookup, R: ChatReplier> {
    lookup: L,
    replier: R,
}

impl<L: CardLookup, R: ChatReplier> LookupRelay<L, R> {
    pub fn new(lookup: L, replier: R) -> Self {
        Self { lookup, replier }
    }

    /// 處理單一訊息；查詢或傳送失敗都不會往上拋
    pub async fn handle_message(&self, chat_id: i64, text: &str) -> RelayOutcome {
        let queries = extract_queries(text);
        let mut outcome = RelayOutcome {
            queries: queries.len(),
            ..Default::default()
        };

        if queries.is_empty() {
            return outcome;
        }
        tracing::info!(chat_id, ?queries, "Cards found");

        for query in &queries {
            let (reply, failed) = self.lookup_reply(query).await;
            if failed {
                outcome.lookup_failures += 1;
            }

            match self.replier.send(chat_id, &reply).await {
                Ok(()) => {
                    tracing::debug!(
                        chat_id,
                        query = query.as_str(),
                        kind = reply.kind(),
                        "reply sent"
                    );
                    outcome.replies_sent += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        chat_id,
                        query = query.as_str(),
                        error = %e,
                        "failed to send reply"
                    );
                    outcome.send_failures += 1;
                }
            }
        }

        outcome
    }

    /// Returns the reply for one query and whether the lookup itself failed.
    pub async fn lookup_reply(&self, query: &str) -> (Reply, bool) {
        tracing::debug!(query, "looking up card");
        match self.lookup.lookup(query).await {
            Ok(card) => (reply_for(&card), false),
            Err(e) => {
                tracing::warn!(query, error = %e, "Scryfall query failed");
                (error_reply(query, &e), true)
            }
        }
    }
}
