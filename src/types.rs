//! Shared types for devotional records and reader preferences.
//!
//! Record types mirror the JSON data file and are deserialized directly from
//! it. Preference types ([`Language`], [`FontSize`]) are used both by the
//! config file and by the reader controls rendered into every page.

use crate::calendar::Month;
use serde::{Deserialize, Serialize};

/// One language variant of a devotional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageText {
    pub title: String,
    /// Markdown body
    pub data: String,
}

/// A devotional in both supported languages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Devotional {
    pub english: LanguageText,
    pub tamil: LanguageText,
}

impl Devotional {
    pub fn text(&self, language: Language) -> &LanguageText {
        match language {
            Language::English => &self.english,
            Language::Tamil => &self.tamil,
        }
    }
}

/// A devotional together with the month and day it is filed under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry<'a> {
    pub month: Month,
    pub day: u32,
    pub devotional: &'a Devotional,
}

impl Entry<'_> {
    /// Canonical URL path of this entry's reader page.
    pub fn path(&self) -> String {
        day_path(self.month, self.day)
    }
}

/// URL path of a day's reader page: `/{month}/day/{n}`.
pub fn day_path(month: Month, day: u32) -> String {
    format!("/{}/day/{}", month.key(), day)
}

/// Reader language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Tamil,
}

impl Language {
    /// Interpret the `la` query parameter: `ta` selects Tamil, anything else
    /// (including absence) selects English.
    pub fn from_query(la: Option<&str>) -> Language {
        match la {
            Some("ta") => Language::Tamil,
            _ => Language::English,
        }
    }

    /// The other language; used by the reader's toggle button.
    pub fn toggled(self) -> Language {
        match self {
            Language::English => Language::Tamil,
            Language::Tamil => Language::English,
        }
    }

    /// Identifier used in `data-lang` attributes and field names.
    pub fn key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Tamil => "tamil",
        }
    }

    /// Value for the HTML `lang` attribute.
    pub fn html_lang(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
        }
    }
}

/// Reader font size, smallest to largest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    Small,
    Normal,
    #[default]
    Large,
    ExtraLarge,
    Maximum,
}

impl FontSize {
    pub const ALL: [FontSize; 5] = [
        FontSize::Small,
        FontSize::Normal,
        FontSize::Large,
        FontSize::ExtraLarge,
        FontSize::Maximum,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Normal => "Normal",
            FontSize::Large => "Large",
            FontSize::ExtraLarge => "Extra Large",
            FontSize::Maximum => "Maximum",
        }
    }

    /// CSS class applied to the title and article.
    pub fn css_class(self) -> &'static str {
        match self {
            FontSize::Small => "text-sm",
            FontSize::Normal => "text-base",
            FontSize::Large => "text-lg",
            FontSize::ExtraLarge => "text-xl",
            FontSize::Maximum => "text-2xl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Devotional {
        Devotional {
            english: LanguageText {
                title: "Day 1 - Grace".to_string(),
                data: "Grace upon grace.".to_string(),
            },
            tamil: LanguageText {
                title: "நாள் 1 - கிருபை".to_string(),
                data: "கிருபையின் மேல் கிருபை.".to_string(),
            },
        }
    }

    #[test]
    fn devotional_text_selects_language() {
        let d = sample();
        assert_eq!(d.text(Language::English).title, "Day 1 - Grace");
        assert_eq!(d.text(Language::Tamil).title, "நாள் 1 - கிருபை");
    }

    #[test]
    fn devotional_deserializes_from_data_file_shape() {
        let json = r#"{
            "english": { "title": "T", "data": "body" },
            "tamil": { "title": "த", "data": "உடல்" }
        }"#;
        let d: Devotional = serde_json::from_str(json).unwrap();
        assert_eq!(d.english.data, "body");
        assert_eq!(d.tamil.title, "த");
    }

    #[test]
    fn devotional_missing_language_is_error() {
        let json = r#"{ "english": { "title": "T", "data": "body" } }"#;
        assert!(serde_json::from_str::<Devotional>(json).is_err());
    }

    #[test]
    fn entry_path() {
        let d = sample();
        let entry = Entry {
            month: Month::Feb,
            day: 3,
            devotional: &d,
        };
        assert_eq!(entry.path(), "/feb/day/3");
    }

    #[test]
    fn language_from_query() {
        assert_eq!(Language::from_query(Some("ta")), Language::Tamil);
        assert_eq!(Language::from_query(Some("en")), Language::English);
        assert_eq!(Language::from_query(Some("TA")), Language::English);
        assert_eq!(Language::from_query(None), Language::English);
    }

    #[test]
    fn language_toggle_round_trips() {
        assert_eq!(Language::English.toggled(), Language::Tamil);
        assert_eq!(Language::English.toggled().toggled(), Language::English);
    }

    #[test]
    fn default_font_size_is_large() {
        assert_eq!(FontSize::default(), FontSize::Large);
        assert_eq!(FontSize::default().css_class(), "text-lg");
    }

    #[test]
    fn font_sizes_have_distinct_classes() {
        let classes: Vec<_> = FontSize::ALL.iter().map(|f| f.css_class()).collect();
        let mut dedup = classes.clone();
        dedup.dedup();
        assert_eq!(classes.len(), dedup.len());
        assert_eq!(FontSize::ExtraLarge.label(), "Extra Large");
    }

    #[test]
    fn font_size_config_names() {
        let f: FontSize = serde_json::from_str(r#""extra-large""#).unwrap();
        assert_eq!(f, FontSize::ExtraLarge);
    }
}
