use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A category assigned to an article. The qcode selects the headline locator
/// and is written verbatim into the message header.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub qcode: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Category {
    pub fn new(qcode: impl Into<String>) -> Self {
        Self {
            qcode: qcode.into(),
            name: None,
        }
    }
}

/// Reference into a controlled vocabulary (places, subjects).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TermRef {
    pub qcode: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl TermRef {
    pub fn new(qcode: impl Into<String>) -> Self {
        Self {
            qcode: qcode.into(),
            name: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Text,
    Preformatted,
    Picture,
    Graphic,
    Audio,
    Video,
    Composite,
    #[serde(other)]
    Other,
}

impl ContentKind {
    /// Only textual content can be laid out on the wire.
    pub fn is_textual(self) -> bool {
        matches!(self, ContentKind::Text | ContentKind::Preformatted)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum BodyFormat {
    #[default]
    #[serde(rename = "HTML")]
    Html,
    #[serde(rename = "preserved")]
    Preserved,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Flags {
    #[serde(default)]
    pub marked_for_legal: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Dateline {
    #[serde(default)]
    pub text: Option<String>,
}

/// An article record as handed over by the publishing pipeline.
///
/// Field names follow the JSON record so a stored item deserializes directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Article {
    #[serde(rename = "type")]
    pub kind: ContentKind,
    #[serde(rename = "anpa_category", default)]
    pub categories: Vec<Category>,
    #[serde(default = "default_service_level")]
    pub service_level: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub slugline: String,
    #[serde(default)]
    pub flags: Flags,
    #[serde(rename = "anpa_take_key", default)]
    pub take_key: Option<String>,
    #[serde(default)]
    pub embargo: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ednote: Option<String>,
    #[serde(default)]
    pub byline: Option<String>,
    #[serde(default)]
    pub dateline: Option<Dateline>,
    #[serde(rename = "body_html", default)]
    pub body: String,
    #[serde(default)]
    pub body_footer: Option<String>,
    #[serde(default)]
    pub more_coming: bool,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub sign_off: Option<String>,
    #[serde(default)]
    pub sequence: Option<u32>,
    #[serde(default)]
    pub format: BodyFormat,
    #[serde(rename = "_updated")]
    pub updated: DateTime<Utc>,
    #[serde(rename = "place", default)]
    pub places: Vec<TermRef>,
    #[serde(rename = "subject", default)]
    pub subjects: Vec<TermRef>,
}

fn default_service_level() -> String {
    "a".to_string()
}

fn default_priority() -> u8 {
    3
}

impl Article {
    /// An empty article of the given kind; every optional field unset.
    pub fn new(kind: ContentKind, updated: DateTime<Utc>) -> Self {
        Self {
            kind,
            categories: Vec::new(),
            service_level: default_service_level(),
            priority: default_priority(),
            word_count: 0,
            headline: String::new(),
            slugline: String::new(),
            flags: Flags::default(),
            take_key: None,
            embargo: None,
            ednote: None,
            byline: None,
            dateline: None,
            body: String::new(),
            body_footer: None,
            more_coming: false,
            source: String::new(),
            sign_off: None,
            sequence: None,
            format: BodyFormat::Html,
            updated,
            places: Vec::new(),
            subjects: Vec::new(),
        }
    }

    pub fn is_preserved(&self) -> bool {
        self.format == BodyFormat::Preserved
    }

    pub fn dateline_text(&self) -> Option<&str> {
        self.dateline
            .as_ref()
            .and_then(|d| d.text.as_deref())
            .filter(|t| !t.is_empty())
    }

    /// Position of this take within the story. Zero counts as unset.
    pub fn within_story_sequence(&self) -> Option<u32> {
        self.sequence.filter(|s| *s > 0)
    }

    pub fn ednote_text(&self) -> Option<&str> {
        self.ednote.as_deref().filter(|t| !t.is_empty())
    }

    pub fn footer_html(&self) -> Option<&str> {
        self.body_footer.as_deref().filter(|t| !t.is_empty())
    }
}
