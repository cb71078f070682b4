use async_trait::async_trait;
use httpmock::prelude::*;
use scry_relay::domain::model::Reply;
use scry_relay::domain::ports::ChatReplier;
use scry_relay::{BotConfig, LookupRelay, Result, ScryfallClient};
use std::sync::{Arc, Mutex};

/// 記錄所有送出的回覆
#[derive(Clone, Default)]
struct RecordingReplier {
    sent: Arc<Mutex<Vec<(i64, Reply)>>>,
}

impl RecordingReplier {
    fn replies(&self) -> Vec<(i64, Reply)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatReplier for RecordingReplier {
    async fn send(&self, chat_id: i64, reply: &Reply) -> Result<()> {
        self.sent.lock().unwrap().push((chat_id, reply.clone()));
        Ok(())
    }
}

fn relay_for(server: &MockServer) -> (LookupRelay<ScryfallClient, RecordingReplier>, RecordingReplier) {
    let config = BotConfig {
        token: "123:ABC".to_string(),
        api_base: server.base_url(),
        ..Default::default()
    };
    let replier = RecordingReplier::default();
    let relay = LookupRelay::new(ScryfallClient::new(&config).unwrap(), replier.clone());
    (relay, replier)
}

#[tokio::test]
async fn test_exact_match_end_to_end() {
    let server = MockServer::start();
    let named = server.mock(|when, then| {
        when.method(GET)
            .path("/cards/named")
            .query_param("exact", "Lightning Bolt");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "object": "card",
                "name": "Lightning Bolt",
                "scryfall_uri": "https://scryfall.com/card/lea/161/lightning-bolt",
                "image_uris": {"png": "https://cards.scryfall.io/png/front/lightning-bolt.png"}
            }));
    });

    let (relay, replier) = relay_for(&server);
    let outcome = relay
        .handle_message(1001, "I'll cast [[Lightning Bolt]] at your face")
        .await;

    named.assert();
    assert_eq!(outcome.queries, 1);
    assert_eq!(outcome.replies_sent, 1);

    let replies = replier.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0],
        (
            1001,
            Reply::Photo {
                image_url: "https://cards.scryfall.io/png/front/lightning-bolt.png".to_string(),
                caption:
                    "Found Card Lightning Bolt: https://scryfall.com/card/lea/161/lightning-bolt"
                        .to_string(),
            }
        )
    );
}

#[tokio::test]
async fn test_ambiguous_match_end_to_end() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET)
            .path("/cards/named")
            .query_param("exact", "Bolt");
        then.status(404).json_body(serde_json::json!({
            "object": "error",
            "code": "not_found",
            "status": 404,
            "details": "No cards found matching “Bolt”"
        }));
    });
    let search = server.mock(|when, then| {
        when.method(GET).path("/cards/search").query_param("q", "Bolt");
        then.status(200).json_body(serde_json::json!({
            "object": "list",
            "total_cards": 2,
            "has_more": false,
            "data": [
                {"object": "card", "name": "Lightning Bolt"},
                {"object": "card", "name": "Chain Bolt"}
            ]
        }));
    });

    let (relay, replier) = relay_for(&server);
    relay.handle_message(1002, "[[Bolt]]").await;

    search.assert();
    let replies = replier.replies();
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0].1,
        Reply::Text {
            body: "Cannot find card 'Bolt'.\nMaybe you meant one of these:\n`Lightning Bolt`\n`Chain Bolt`"
                .to_string(),
            markdown: true,
        }
    );
}

#[tokio::test]
async fn test_each_mention_gets_its_own_reply() {
    let server = MockServer::start();
    let counterspell = server.mock(|when, then| {
        when.method(GET)
            .path("/cards/named")
            .query_param("exact", "Counterspell");
        then.status(200).json_body(serde_json::json!({
            "object": "card",
            "name": "Counterspell",
            "scryfall_uri": "https://scryfall.com/card/lea/54",
            "image_uris": {"png": "https://img/counterspell.png"}
        }));
    });
    let delver = server.mock(|when, then| {
        when.method(GET)
            .path("/cards/named")
            .query_param("exact", "Delver of Secrets");
        then.status(200).json_body(serde_json::json!({
            "object": "card",
            "name": "Delver of Secrets // Insectile Aberration",
            "scryfall_uri": "https://scryfall.com/card/isd/51",
            "card_faces": [
                {"image_uris": {"png": "https://img/delver-front.png"}},
                {"image_uris": {"png": "https://img/delver-back.png"}}
            ]
        }));
    });

    let (relay, replier) = relay_for(&server);
    let outcome = relay
        .handle_message(1003, "[[ Counterspell ]] beats [[Delver of Secrets]]")
        .await;

    counterspell.assert();
    delver.assert();
    assert_eq!(outcome.queries, 2);

    let replies = replier.replies();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0].1.kind(), "photo");
    match &replies[1].1 {
        Reply::MediaGroup { image_urls, .. } => assert_eq!(image_urls.len(), 2),
        other => panic!("unexpected reply {:?}", other),
    }
}

#[tokio::test]
async fn test_upstream_failure_replies_instead_of_crashing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/cards/named");
        then.status(503).body("Service Unavailable");
    });

    let (relay, replier) = relay_for(&server);
    let outcome = relay.handle_message(1004, "[[Lightning Bolt]]").await;

    assert_eq!(outcome.lookup_failures, 1);
    let replies = replier.replies();
    assert_eq!(replies.len(), 1);
    match &replies[0].1 {
        Reply::Text { body, markdown } => {
            assert!(!markdown);
            assert!(body.starts_with("[[Lightning Bolt]]: "));
        }
        other => panic!("unexpected reply {:?}", other),
    }
}

#[tokio::test]
async fn test_message_without_mentions_makes_no_requests() {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(serde_json::json!({}));
    });

    let (relay, replier) = relay_for(&server);
    let outcome = relay.handle_message(1005, "good game [[everyone]").await;

    any.assert_hits(0);
    assert_eq!(outcome.queries, 0);
    assert!(replier.replies().is_empty());
}
