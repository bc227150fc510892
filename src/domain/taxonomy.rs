use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, MoodId, TagId};

/// Record of a lookup collection that can be resolved by id.
pub trait LookupItem {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
    fn name(&self) -> &str;
}

/// Content category such as "Завтраки" or "Выпечка".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// Free-form label attached to entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
}

/// Mood of a diary entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mood {
    pub id: MoodId,
    pub name: String,
}

macro_rules! impl_lookup_item {
    ($name:ident, $id:ident) => {
        impl $name {
            pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
                Self {
                    id: $id::new(id),
                    name: name.into(),
                }
            }
        }

        impl LookupItem for $name {
            type Id = $id;

            fn id(&self) -> &Self::Id {
                &self.id
            }

            fn name(&self) -> &str {
                &self.name
            }
        }
    };
}

impl_lookup_item!(Category, CategoryId);
impl_lookup_item!(Tag, TagId);
impl_lookup_item!(Mood, MoodId);

/// The three lookup collections fetched alongside entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Taxonomy {
    pub categories: Vec<Category>,
    pub tags: Vec<Tag>,
    pub moods: Vec<Mood>,
}

/// Finds the first item whose id equals `id`.
pub fn lookup<'a, L: LookupItem>(items: &'a [L], id: &L::Id) -> Option<&'a L> {
    items.iter().find(|item| item.id() == id)
}
