//! Allow-list HTML sanitizer for upstream descriptions.
//!
//! Provider descriptions arrive as arbitrary HTML. Only structural and
//! emphasis markup survives; scripts and styles are removed with their
//! content and links are limited to web and mail schemes.

use std::collections::{HashMap, HashSet};

use ammonia::Builder;

const ALLOWED_TAGS: [&str; 20] = [
    "p",
    "br",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "strong",
    "b",
    "em",
    "i",
    "u",
    "ul",
    "ol",
    "li",
    "a",
    "blockquote",
    "span",
    "div",
];
const LINK_ATTRIBUTES: [&str; 2] = ["href", "title"];
const URL_SCHEMES: [&str; 3] = ["http", "https", "mailto"];
const DROPPED_WITH_CONTENT: [&str; 2] = ["script", "style"];

fn builder() -> Builder<'static> {
    let mut builder = Builder::empty();
    builder
        .tags(ALLOWED_TAGS.into_iter().collect())
        .tag_attributes(HashMap::from([(
            "a",
            LINK_ATTRIBUTES.into_iter().collect::<HashSet<_>>(),
        )]))
        .url_schemes(URL_SCHEMES.into_iter().collect())
        .link_rel(Some("noopener noreferrer"))
        .clean_content_tags(DROPPED_WITH_CONTENT.into_iter().collect());
    builder
}

/// Strip everything outside the allow-list.
///
/// # Examples
/// ```
/// use camply_client::sanitize::sanitize_html;
///
/// let clean = sanitize_html(r#"<p style="color:red">Open <img src=x onerror=alert(1)>daily</p>"#);
/// assert_eq!(clean, "<p>Open daily</p>");
/// ```
#[must_use]
pub fn sanitize_html(html: &str) -> String {
    builder().clean(html).to_string()
}

/// Whether `text` contains markup rather than plain prose.
///
/// # Examples
/// ```
/// use camply_client::sanitize::is_html_content;
///
/// assert!(is_html_content("<p>Tent sites</p>"));
/// assert!(!is_html_content("Sites 1 < 5 > 3"));
/// ```
#[must_use]
pub fn is_html_content(text: &str) -> bool {
    let mut rest = text;
    while let Some(open) = rest.find('<') {
        let after = rest.get(open + 1..).unwrap_or_default();
        let starts_tag = after
            .chars()
            .next()
            .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '/' || ch == '!');
        if starts_tag && after.contains('>') {
            return true;
        }
        rest = after;
    }
    false
}
