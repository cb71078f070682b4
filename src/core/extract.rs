use regex::Regex;
use std::sync::LazyLock;

static CARD_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+)\]\]").expect("card reference pattern is valid"));

/// Returns every `[[...]]` body in `text`, trimmed, in order of appearance.
/// Bodies that are blank after trimming are dropped.
pub fn extract_queries(text: &str) -> Vec<String> {
    CARD_REFERENCE
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|q| !q.is_empty())
        .map(str::to_string)
        .collect()
}
