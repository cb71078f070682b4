use crate::domain::model::{CardMatch, Reply};
use crate::utils::error::RelayError;

/// Telegram accepts between 2 and 10 items in one media group.
pub const MEDIA_GROUP_MAX: usize = 10;

pub fn found_caption(name: &str, url: &str) -> String {
    format!("Found Card {}: {}", name, url)
}

/// 將查詢結果轉成一則回覆
pub fn reply_for(card: &CardMatch) -> Reply {
    match card {
        CardMatch::Single {
            name,
            image: Some(image),
            url,
        } => Reply::Photo {
            image_url: image.clone(),
            caption: found_caption(name, url),
        },
        CardMatch::Single {
            name,
            image: None,
            url,
        } => Reply::Text {
            body: format!("{}\nNo image found.", found_caption(name, url)),
            markdown: false,
        },
        CardMatch::MultiFace { name, images, url } => match images.as_slice() {
            [] => Reply::Text {
                body: format!("{}\nNo image found.", found_caption(name, url)),
                markdown: false,
            },
            [only] => Reply::Photo {
                image_url: only.clone(),
                caption: found_caption(name, url),
            },
            _ => Reply::MediaGroup {
                image_urls: images.iter().take(MEDIA_GROUP_MAX).cloned().collect(),
                caption: found_caption(name, url),
            },
        },
        CardMatch::NotFound {
            query,
            suggestions,
            total,
        } => Reply::Text {
            body: not_found_text(query, suggestions, *total),
            markdown: true,
        },
    }
}

fn not_found_text(query: &str, suggestions: &[String], total: u64) -> String {
    let mut msg = format!("Cannot find card '{}'.", escape_markdown(query));
    if suggestions.is_empty() {
        return msg;
    }

    let card_list = suggestions
        .iter()
        .map(|name| format!("`{}`", name.replace('`', "'")))
        .collect::<Vec<_>>()
        .join("\n");
    msg.push_str("\nMaybe you meant one of these:\n");
    msg.push_str(&card_list);

    let other_results = total.saturating_sub(suggestions.len() as u64);
    if other_results > 0 {
        msg.push_str(&format!("\n({} Other results)", other_results));
    }
    msg
}

/// Lookup failures are reported as plain text so upstream payloads can't
/// break Markdown parsing.
pub fn error_reply(query: &str, err: &RelayError) -> Reply {
    Reply::Text {
        body: format!("[[{}]]: {}", query, err.user_friendly_message()),
        markdown: false,
    }
}

/// Escapes the characters that are special in Telegram's legacy Markdown.
pub fn escape_markdown(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
