use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::types::{CategoryId, EntryId, MoodId, RawIds, TagId, TypeConstraintError};

/// Entry as returned by the content API, before any lookup is resolved.
///
/// Fields not modelled explicitly (cover images, ingredients, addresses...)
/// are preserved in `extra` and carried over to the enriched [`Entry`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub id: EntryId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default)]
    pub category_id: RawIds<CategoryId>,
    #[serde(default)]
    pub category_ids: RawIds<CategoryId>,
    #[serde(default)]
    pub tag_ids: RawIds<TagId>,
    #[serde(default)]
    pub mood_id: RawIds<MoodId>,
    #[serde(default)]
    pub mood_ids: RawIds<MoodId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RawEntry {
    /// Creates an entry with only an id and title set.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(id),
            title: title.into(),
            content: String::new(),
            created_at: None,
            date: None,
            category_id: RawIds::Absent,
            category_ids: RawIds::Absent,
            tag_ids: RawIds::Absent,
            mood_id: RawIds::Absent,
            mood_ids: RawIds::Absent,
            extra: Map::new(),
        }
    }
}

/// Entry with its category, tags and mood resolved to display names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub id: EntryId,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub published_on: Option<NaiveDate>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    pub mood: Option<String>,
    pub category_ids: Vec<CategoryId>,
    pub tag_ids: Vec<TagId>,
    pub mood_ids: Vec<MoodId>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entry {
    /// Case-insensitive substring match over title and content.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.content.to_lowercase().contains(&needle)
    }

    pub fn has_category(&self, category_id: &CategoryId) -> bool {
        self.category_ids.contains(category_id)
    }
}

/// Top-level blog section, each backed by its own content API collection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Diary,
    Recipes,
    Cafes,
    CozyHome,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Diary,
        Section::Recipes,
        Section::Cafes,
        Section::CozyHome,
    ];

    /// Path segment used in site URLs.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Diary => "diary",
            Section::Recipes => "recipes",
            Section::Cafes => "cafes",
            Section::CozyHome => "cozy-home",
        }
    }

    /// Collection path on the content API.
    pub fn collection(self) -> &'static str {
        match self {
            Section::Diary => "diary-entries",
            Section::Recipes => "recipes",
            Section::Cafes => "cafe-reviews",
            Section::CozyHome => "cozy-home-articles",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Diary => "Дневник",
            Section::Recipes => "Рецепты",
            Section::Cafes => "Кафе",
            Section::CozyHome => "Уютный дом",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Section {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.slug() == s)
            .ok_or_else(|| TypeConstraintError::InvalidValue(format!("unknown section `{s}`")))
    }
}

/// Ordering applied to entry listings.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EntrySort {
    #[default]
    Newest,
    Oldest,
    Title,
}

impl EntrySort {
    /// Sorts entries in place. Undated entries go last for both date orders.
    pub fn apply(self, entries: &mut [Entry]) {
        match self {
            EntrySort::Newest => entries.sort_by(|a, b| match (a.published_on, b.published_on) {
                (Some(a), Some(b)) => b.cmp(&a),
                (a, b) => b.is_some().cmp(&a.is_some()),
            }),
            EntrySort::Oldest => entries.sort_by(|a, b| match (a.published_on, b.published_on) {
                (Some(a), Some(b)) => a.cmp(&b),
                (a, b) => b.is_some().cmp(&a.is_some()),
            }),
            EntrySort::Title => entries.sort_by_cached_key(|entry| entry.title.to_lowercase()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntrySort::Newest => "newest",
            EntrySort::Oldest => "oldest",
            EntrySort::Title => "title",
        }
    }
}

impl FromStr for EntrySort {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(EntrySort::Newest),
            "oldest" => Ok(EntrySort::Oldest),
            "title" => Ok(EntrySort::Title),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown sort order `{other}`"
            ))),
        }
    }
}

/// Narrowing applied to a section listing before pagination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub search: Option<String>,
    pub category: Option<CategoryId>,
}

impl EntryFilter {
    pub fn matches(&self, entry: &Entry) -> bool {
        let search_ok = self
            .search
            .as_deref()
            .is_none_or(|needle| entry.matches_search(needle));
        let category_ok = self
            .category
            .as_ref()
            .is_none_or(|category| entry.has_category(category));
        search_ok && category_ok
    }
}
