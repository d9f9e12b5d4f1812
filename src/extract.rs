//! HTML-to-plain-text extraction.
//!
//! Strips non-content subtrees and collapses whitespace. This is a pure
//! function of the markup: identical input yields identical output, and a
//! document without a body yields an empty string rather than an error.

use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{Html, Selector};

/// Tags whose entire subtree is dropped during extraction.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript"];

/// Extract readable plain text from an HTML document.
///
/// Walks the text nodes under `<body>`, skipping `<script>`, `<style>` and
/// `<noscript>` subtrees, then collapses every whitespace run to a single
/// space and trims the ends. No truncation happens here.
#[must_use]
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let body_sel = Selector::parse("body").unwrap();

    let Some(body) = doc.select(&body_sel).next() else {
        return String::new();
    };

    let mut raw = String::new();
    collect_text(*body, &mut raw);

    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                out.push_str(&text.text);
                // Separator so adjacent elements don't run together.
                out.push(' ');
            }
            Node::Element(el) if SKIPPED_TAGS.contains(&el.name()) => {}
            Node::Element(_) => collect_text(child, out),
            _ => {}
        }
    }
}
