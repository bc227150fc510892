use serde::Serialize;

use crate::domain::date::{format_long, format_short};
use crate::domain::entry::{Entry, Section};

/// Length of the plain-text teaser shown on entry cards.
const EXCERPT_CHARS: usize = 160;

/// Display metadata shared by entry cards and entry pages.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryMeta {
    pub date_label: Option<String>,
    pub date_short: Option<String>,
    pub category: Option<String>,
    pub mood: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Entry> for EntryMeta {
    fn from(entry: &Entry) -> Self {
        Self {
            date_label: entry.published_on.map(format_long),
            date_short: entry.published_on.map(format_short),
            category: entry.category.clone(),
            mood: entry.mood.clone(),
            tags: entry.tags.clone(),
        }
    }
}

/// Entry as shown in listings and "related entries" blocks.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryCard {
    pub id: String,
    pub section: Section,
    pub url: String,
    pub title: String,
    pub excerpt: String,
    pub meta: EntryMeta,
}

impl EntryCard {
    pub fn new(section: Section, entry: &Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            section,
            url: entry_url(section, entry),
            title: entry.title.clone(),
            excerpt: excerpt(&entry.content, EXCERPT_CHARS),
            meta: EntryMeta::from(entry),
        }
    }
}

/// Entry as shown on its own page.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EntryDetail {
    pub id: String,
    pub section: Section,
    pub title: String,
    pub content: String,
    pub meta: EntryMeta,
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl EntryDetail {
    pub fn new(section: Section, entry: &Entry) -> Self {
        Self {
            id: entry.id.to_string(),
            section,
            title: entry.title.clone(),
            content: entry.content.clone(),
            meta: EntryMeta::from(entry),
            extra: entry.extra.clone(),
        }
    }
}

fn entry_url(section: Section, entry: &Entry) -> String {
    format!("/{}/{}", section.slug(), entry.id)
}

/// Cuts `text` to at most `limit` characters on a word boundary, appending an
/// ellipsis when anything was dropped.
fn excerpt(text: &str, limit: usize) -> String {
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if text.chars().count() <= limit {
        return text;
    }

    let cut: String = text.chars().take(limit + 1).collect();
    let cut = match cut.rfind(' ') {
        Some(index) if index > 0 => &cut[..index],
        _ => cut.char_indices().nth(limit).map_or(cut.as_str(), |(i, _)| &cut[..i]),
    };
    format!("{}…", cut.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}
