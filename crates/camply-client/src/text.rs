//! Display helpers for catalogue names.

/// Words kept lowercase unless they open the phrase.
const MINOR_WORDS: [&str; 10] = ["of", "the", "and", "in", "on", "at", "to", "for", "with", "by"];

fn capitalise(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Title-case upstream names, which often arrive in upper case.
///
/// Words are split on single spaces so spacing is preserved.
///
/// # Examples
/// ```
/// use camply_client::text::to_title_case;
///
/// assert_eq!(to_title_case("LAKE OF THE WOODS"), "Lake of the Woods");
/// assert_eq!(to_title_case("the narrows"), "The Narrows");
/// ```
#[must_use]
pub fn to_title_case(input: &str) -> String {
    input
        .to_lowercase()
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 || !MINOR_WORDS.contains(&word) {
                capitalise(word)
            } else {
                word.to_owned()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// URL slug: lowercase ASCII letters, digits and single hyphens.
///
/// # Examples
/// ```
/// use camply_client::text::to_slug;
///
/// assert_eq!(to_slug("  Upper Pines (Yosemite)  "), "upper-pines-yosemite");
/// ```
#[must_use]
pub fn to_slug(input: &str) -> String {
    let lowered = input.to_lowercase();
    let kept: String = lowered
        .chars()
        .filter(|ch| {
            ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace() || *ch == '-'
        })
        .collect();
    let mut slug = String::with_capacity(kept.len());
    for ch in kept.trim().chars() {
        let ch = if ch.is_whitespace() { '-' } else { ch };
        if ch == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(ch);
    }
    slug
}
