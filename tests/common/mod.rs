//! Helpers for integration tests.

#![allow(dead_code)]

use cozy_journal::domain::entry::RawEntry;
use cozy_journal::domain::taxonomy::{Category, Mood, Tag};

pub fn categories() -> Vec<Category> {
    vec![
        Category::new("c1", "Завтраки"),
        Category::new("c2", "Выпечка"),
    ]
}

pub fn tags() -> Vec<Tag> {
    vec![Tag::new("t1", "быстро"), Tag::new("t2", "сладкое")]
}

pub fn moods() -> Vec<Mood> {
    vec![Mood::new("m1", "спокойное")]
}

/// Parses an entry exactly as the content API would deliver it.
pub fn raw_entry(value: serde_json::Value) -> RawEntry {
    serde_json::from_value(value).expect("fixture should be a valid entry")
}
