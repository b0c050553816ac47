use reqwest::Client;
use scraper::{Html, Selector};
use tracing::{info, warn};

/// Elements whose text is never visible on the rendered page.
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Fetches `url` and returns its visible body text with whitespace collapsed.
///
/// Never fails: any network, status, or parse problem is logged and yields an
/// empty string so the chatbot keeps working on static knowledge alone.
pub async fn fetch_auxiliary_knowledge(http: &Client, url: &str) -> String {
    let response = match http.get(url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Could not fetch knowledge page {url}: {e}");
            return String::new();
        }
    };

    let status = response.status();
    if !status.is_success() {
        warn!("Knowledge page {url} returned {status}");
        return String::new();
    }

    let html = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warn!("Could not read knowledge page body from {url}: {e}");
            return String::new();
        }
    };

    let text = extract_body_text(&html);
    if text.is_empty() {
        warn!("Knowledge page {url} had no visible body text");
    } else {
        info!("Fetched {} chars of knowledge from {url}", text.len());
    }
    text
}

/// Visible text under `<body>`, whitespace runs collapsed to single spaces.
pub fn extract_body_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let Ok(body_selector) = Selector::parse("body") else {
        return String::new();
    };
    let Some(body) = document.select(&body_selector).next() else {
        return String::new();
    };

    let mut fragments: Vec<&str> = Vec::new();
    for node in body.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| HIDDEN_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            fragments.push(&**text);
        }
    }

    collapse_whitespace(&fragments.join(" "))
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
