//! String utilities for devotional text.
//!
//! - [`clean_content`]: normalize blank-line runs in markdown bodies
//! - [`generate_excerpt`]: plain-text preview for article cards
//! - [`strip_day_prefix`] / [`card_title`]: title normalization for cards
//!
//! All counting is by `char`, never by byte, since Tamil text is multi-byte
//! throughout.

use crate::types::Language;
use pulldown_cmark::{Event, Parser, TagEnd};
use regex::Regex;
use std::sync::LazyLock;

/// Default excerpt length in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 100;

static EXCESS_NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

static ENGLISH_DAY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Day \d+\s*[-—]\s*").expect("valid regex"));

static TAMIL_DAY_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^நாள் \d+\s*[-—]\s*").expect("valid regex"));

/// Collapse runs of three or more newlines into a single blank line.
pub fn clean_content(text: &str) -> String {
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}

/// Plain-text excerpt of a markdown body.
///
/// Markdown syntax is dropped (only text content is kept) and whitespace is
/// collapsed to single spaces. Text longer than `max_chars` is cut at the last
/// word boundary within the limit and suffixed with `...`; a single word
/// longer than the limit is cut mid-word.
pub fn generate_excerpt(markdown: &str, max_chars: usize) -> String {
    let plain = markdown_to_plain_text(markdown);
    if plain.chars().count() <= max_chars {
        return plain;
    }

    let mut chars = plain.chars();
    let cut: String = chars.by_ref().take(max_chars).collect();
    // A word ending exactly at the limit is kept whole
    let ends_on_word = chars.next().is_some_and(char::is_whitespace);
    let truncated = match cut.rfind(' ') {
        Some(pos) if pos > 0 && !ends_on_word => &cut[..pos],
        _ => cut.as_str(),
    };
    format!("{}...", truncated.trim_end())
}

fn markdown_to_plain_text(markdown: &str) -> String {
    let mut text = String::new();
    for event in Parser::new(markdown) {
        match event {
            Event::Text(t) | Event::Code(t) => text.push_str(&t),
            Event::SoftBreak | Event::HardBreak => text.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => text.push(' '),
            _ => {}
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Remove a leading `Day N -` or `நாள் N -` prefix (hyphen or em dash).
pub fn strip_day_prefix(title: &str) -> String {
    let stripped = ENGLISH_DAY_PREFIX.replace(title, "");
    TAMIL_DAY_PREFIX.replace(&stripped, "").into_owned()
}

/// Card heading: the title with its day prefix normalized for `language`.
pub fn card_title(language: Language, day: u32, title: &str) -> String {
    let bare = strip_day_prefix(title);
    match language {
        Language::English => format!("Day {day} - {bare}"),
        Language::Tamil => format!("நாள் {day} - {bare}"),
    }
}
