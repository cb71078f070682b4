use crate::domain::model::CardMatch;
use crate::domain::ports::{CardLookup, ConfigProvider};
use crate::utils::error::{RelayError, Result};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the Scryfall REST API.
pub struct ScryfallClient {
    client: Client,
    api_base: String,
    max_suggestions: usize,
}

impl ScryfallClient {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base().trim_end_matches('/').to_string(),
            max_suggestions: config.max_suggestions(),
        })
    }

    /// Scryfall 的錯誤也是 JSON（含 404），所以不看 status 直接解析
    async fn get_json(&self, path: &str, params: &[(&str, &str)]) -> Result<Value> {
        let url = format!("{}{}", self.api_base, path);
        tracing::debug!("Making API request to: {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .query(params)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        Ok(response.json::<Value>().await?)
    }

    /// `GET /cards/named?exact=`
    pub async fn named_exact(&self, query: &str) -> Result<CardMatch> {
        let parsed = self.get_json("/cards/named", &[("exact", query)]).await?;

        match object_kind(&parsed) {
            Some("card") => parse_card(parsed),
            Some("error") if is_not_found_or_ambiguous(&parsed) => {
                // 名稱不完整或找不到時，改用搜尋給建議清單
                self.search_suggestions(query).await
            }
            _ => Err(RelayError::UnexpectedResponse { response: parsed }),
        }
    }

    /// `GET /cards/search?q=`, reduced to a list of suggested names.
    pub async fn search_suggestions(&self, query: &str) -> Result<CardMatch> {
        let parsed = self.get_json("/cards/search", &[("q", query)]).await?;

        let names: Vec<String> = match (object_kind(&parsed), parsed.get("data")) {
            (Some("list"), Some(Value::Array(data))) => data
                .iter()
                .filter_map(|card| card.get("name").and_then(Value::as_str))
                .take(self.max_suggestions)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };

        let total = if names.is_empty() {
            0
        } else {
            parsed
                .get("total_cards")
                .and_then(Value::as_u64)
                .unwrap_or(0)
        };

        Ok(CardMatch::NotFound {
            query: query.to_string(),
            suggestions: names,
            total,
        })
    }
}

#[async_trait]
impl CardLookup for ScryfallClient {
    async fn lookup(&self, query: &str) -> Result<CardMatch> {
        self.named_exact(query).await
    }
}

fn object_kind(value: &Value) -> Option<&str> {
    value.get("object").and_then(Value::as_str)
}

fn is_not_found_or_ambiguous(error: &Value) -> bool {
    let is_ambiguous = error.get("type").and_then(Value::as_str) == Some("ambiguous");
    let not_found = error.get("code").and_then(Value::as_str) == Some("not_found");
    is_ambiguous || not_found
}

fn png_of(value: &Value) -> Option<String> {
    value
        .get("image_uris")
        .and_then(|uris| uris.get("png"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn parse_card(card: Value) -> Result<CardMatch> {
    let name = card.get("name").and_then(Value::as_str).map(str::to_string);
    let url = card
        .get("scryfall_uri")
        .and_then(Value::as_str)
        .map(str::to_string);
    let (Some(name), Some(url)) = (name, url) else {
        return Err(RelayError::UnexpectedResponse { response: card });
    };

    if let Some(image) = png_of(&card) {
        return Ok(CardMatch::Single {
            name,
            image: Some(image),
            url,
        });
    }

    // 雙面卡：每一面各自有圖
    if let Some(Value::Array(faces)) = card.get("card_faces") {
        let images: Vec<String> = faces.iter().filter_map(png_of).collect();
        if !images.is_empty() {
            return Ok(CardMatch::MultiFace { name, images, url });
        }
    }

    Ok(CardMatch::Single {
        name,
        image: None,
        url,
    })
}
