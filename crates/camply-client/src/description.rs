//! Collapsible rendering of entity descriptions.
//!
//! Descriptions are either HTML from the provider or plain prose. Long
//! ones are shown as a preview with a "Show more" toggle.

use crate::sanitize::{is_html_content, sanitize_html};
use crate::text::to_title_case;

/// Shown when an entity has no description.
pub const FALLBACK_DESCRIPTION: &str = "No description available";

const PREVIEW_CHARS: usize = 150;
const COLLAPSE_AFTER_WORDS: usize = 50;
const PREVIEW_WORDS: usize = 40;

/// Markup or text chosen for the current expansion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rendered<'a> {
    /// Sanitized HTML, safe to inject.
    Html(&'a str),
    /// Plain text; escape before display.
    Text(&'a str),
    /// Placeholder for a missing description.
    Fallback(&'a str),
}

/// Precomputed description display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionView {
    /// No description; render the fallback.
    Missing,
    /// Markup, sanitized on construction.
    Html {
        /// Whole sanitized markup.
        full: String,
        /// First paragraph or element.
        preview: String,
        /// Whether the full markup is over half again as long as the preview.
        collapsible: bool,
    },
    /// Plain prose.
    Text {
        /// Title-cased text.
        full: String,
        /// First words of the original text; present only when collapsible.
        preview: Option<String>,
    },
}

impl DescriptionView {
    /// Classify and prepare a description.
    ///
    /// # Examples
    /// ```
    /// use camply_client::description::{DescriptionView, Rendered};
    ///
    /// let view = DescriptionView::build(Some("camping in the high sierra"));
    /// assert_eq!(view.render(false), Rendered::Text("Camping in the High Sierra"));
    /// assert!(!view.is_collapsible());
    /// ```
    #[must_use]
    pub fn build(description: Option<&str>) -> Self {
        let Some(description) = description.filter(|text| !text.is_empty()) else {
            return Self::Missing;
        };

        if is_html_content(description) {
            let full = sanitize_html(description);
            let preview = html_preview(&full);
            let collapsible = full.chars().count() * 2 > preview.chars().count() * 3;
            return Self::Html {
                full,
                preview,
                collapsible,
            };
        }

        let words: Vec<&str> = description.split(' ').collect();
        let preview = (words.len() > COLLAPSE_AFTER_WORDS).then(|| {
            let lead = words.get(..PREVIEW_WORDS).unwrap_or_default();
            format!("{}...", lead.join(" "))
        });
        Self::Text {
            full: to_title_case(description),
            preview,
        }
    }

    /// Whether a "Show more" toggle is offered.
    #[must_use]
    pub fn is_collapsible(&self) -> bool {
        match self {
            Self::Missing => false,
            Self::Html { collapsible, .. } => *collapsible,
            Self::Text { preview, .. } => preview.is_some(),
        }
    }

    /// Content for the given expansion state.
    #[must_use]
    pub fn render(&self, expanded: bool) -> Rendered<'_> {
        match self {
            Self::Missing => Rendered::Fallback(FALLBACK_DESCRIPTION),
            Self::Html {
                full,
                preview,
                collapsible,
            } => {
                if *collapsible && !expanded {
                    Rendered::Html(preview)
                } else {
                    Rendered::Html(full)
                }
            }
            Self::Text { full, preview } => match preview {
                Some(preview) if !expanded => Rendered::Text(preview),
                _ => Rendered::Text(full),
            },
        }
    }

    /// Label of the expansion toggle, if one is shown.
    #[must_use]
    pub fn toggle_label(&self, expanded: bool) -> Option<&'static str> {
        if !self.is_collapsible() {
            return None;
        }
        Some(if expanded { "Show less" } else { "Show more" })
    }
}

/// First paragraph, else the first element, else the leading text.
fn html_preview(sanitized: &str) -> String {
    if let Some(paragraph) = first_paragraph(sanitized) {
        return paragraph.to_owned();
    }
    if let Some(element) = first_element(sanitized) {
        return element.to_owned();
    }
    if sanitized.chars().count() > PREVIEW_CHARS {
        return format!("<p>{}...</p>", leading_text(sanitized, PREVIEW_CHARS));
    }
    sanitized.to_owned()
}

fn first_paragraph(html: &str) -> Option<&str> {
    let start = html.find("<p>")?;
    let end = html.get(start..)?.find("</p>")? + start + "</p>".len();
    html.get(start..end)
}

fn tag_name(html: &str) -> Option<&str> {
    let len = html
        .find(|ch: char| !ch.is_ascii_alphanumeric())
        .unwrap_or(html.len());
    (len > 0).then(|| html.get(..len)).flatten()
}

fn first_element(html: &str) -> Option<&str> {
    let start = html
        .match_indices('<')
        .map(|(index, _)| index)
        .find(|index| {
            html.get(index + 1..)
                .and_then(|rest| rest.chars().next())
                .is_some_and(|ch| ch.is_ascii_alphabetic())
        })?;
    let name = tag_name(html.get(start + 1..)?)?;
    let open_end = html.get(start..)?.find('>')? + start + 1;
    if name == "br" {
        return html.get(start..open_end);
    }

    let open = format!("<{name}");
    let close = format!("</{name}>");
    let mut depth = 1_usize;
    let mut cursor = open_end;
    while depth > 0 {
        let rest = html.get(cursor..)?;
        let next_close = rest.find(&close)?;
        let next_open = rest
            .match_indices(&open)
            .map(|(index, _)| index)
            .find(|index| {
                rest.get(index + open.len()..)
                    .and_then(|tail| tail.chars().next())
                    .is_some_and(|ch| ch == '>' || ch == ' ')
            });
        match next_open {
            Some(index) if index < next_close => {
                depth += 1;
                cursor += index + open.len();
            }
            _ => {
                depth -= 1;
                cursor += next_close + close.len();
            }
        }
    }
    html.get(start..cursor)
}

/// First `limit` characters, never ending inside an entity.
fn leading_text(text: &str, limit: usize) -> String {
    let mut taken: String = text.chars().take(limit).collect();
    if let Some(amp) = taken.rfind('&') {
        if !taken.get(amp..).unwrap_or_default().contains(';') {
            taken.truncate(amp);
        }
    }
    taken
}
