//! Page title lookup.
//!
//! The host keeps a [`TitleIndex`] of headings per document. Only the first
//! level-1 heading matters here; it becomes the label of the terminal
//! breadcrumb entry.

use std::collections::HashMap;

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// Heading record from a document's table of contents.
///
/// Extra fields in serialized indexes (slugs, anchors) are ignored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6).
    pub level: u8,
    /// Heading text.
    pub title: String,
}

impl Heading {
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
        }
    }
}

/// Title lookup failure.
///
/// Both variants mean the host handed over an incomplete index.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TitleError {
    /// The document has no entry in the index.
    #[error("No headings indexed for {0}")]
    FileNotIndexed(String),
    /// The document has headings, but none at level 1.
    #[error("No level-1 heading in {0}")]
    MissingTitle(String),
}

/// Mapping from document identifier to its ordered headings.
///
/// Deserializes from `{"guide/setup": [{"level": 1, "title": "Setup"}]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TitleIndex {
    entries: HashMap<String, Vec<Heading>>,
}

impl TitleIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the headings recorded for `file`.
    pub fn insert(&mut self, file: impl Into<String>, headings: Vec<Heading>) {
        self.entries.insert(file.into(), headings);
    }

    /// Index `file` from its Markdown source.
    pub fn insert_markdown(&mut self, file: impl Into<String>, markdown: &str) {
        self.insert(file, headings(markdown));
    }

    /// Headings recorded for `file`, if any.
    #[must_use]
    pub fn get(&self, file: &str) -> Option<&[Heading]> {
        self.entries.get(file).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Title of `file`: its first level-1 heading.
    ///
    /// # Errors
    ///
    /// Returns `TitleError::FileNotIndexed` if `file` has no entry and
    /// `TitleError::MissingTitle` if none of its headings is level 1.
    pub fn page_title(&self, file: &str) -> Result<&str, TitleError> {
        let headings = self
            .get(file)
            .ok_or_else(|| TitleError::FileNotIndexed(file.to_owned()))?;

        headings
            .iter()
            .find(|heading| heading.level == 1)
            .map(|heading| heading.title.as_str())
            .ok_or_else(|| TitleError::MissingTitle(file.to_owned()))
    }
}

impl FromIterator<(String, Vec<Heading>)> for TitleIndex {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Heading>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Extract headings from Markdown, in document order.
///
/// Titles are the plain text of the heading: inline formatting is dropped,
/// inline code keeps its content.
#[must_use]
pub fn headings(markdown: &str) -> Vec<Heading> {
    let mut result = Vec::new();
    let mut current: Option<(u8, String)> = None;

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                current = Some((heading_level_to_num(level), String::new()));
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = current.take() {
                    result.push(Heading::new(level, text.trim()));
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some((_, buf)) = current.as_mut() {
                    buf.push(' ');
                }
            }
            _ => {}
        }
    }

    result
}

/// Convert heading level enum to number (1-6).
fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
