//! HTML content extraction
//!
//! Turns a fetched document into a title plus newline-separated visible
//! text, leaving out page chrome and anything that is never rendered.

use scraper::{Html, Node, Selector};

/// Cap on returned content, in characters
pub const MAX_CONTENT_CHARS: usize = 5000;

/// Elements whose whole subtree is dropped before linearizing
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "nav", "footer", "header", "iframe", "noscript", "template",
];

/// Result of extracting a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// `<title>` text, empty when the document has none
    pub title: String,
    /// First [`MAX_CONTENT_CHARS`] characters of the linearized text
    pub content: String,
    /// Character count of the full linearized text
    pub full_length: usize,
}

/// Extract title and visible text from `html`
///
/// Each text node is trimmed, empty ones are dropped and the rest are
/// joined with `\n`. The content cut is a plain character cap and may land
/// mid-word.
pub fn extract(html: &str) -> ExtractedText {
    let document = Html::parse_document(html);

    let text = linearize(&document);
    let full_length = text.chars().count();

    ExtractedText {
        title: extract_title(&document),
        content: truncate_chars(&text, MAX_CONTENT_CHARS),
        full_length,
    }
}

fn linearize(document: &Html) -> String {
    document
        .root_element()
        .descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|el| SKIPPED_ELEMENTS.contains(&el.name()))
            })
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn extract_title(document: &Html) -> String {
    let Ok(selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}
