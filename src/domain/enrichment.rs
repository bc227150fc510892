//! Resolution of entry foreign keys into display names and selection of
//! related entries.
//!
//! Both operations are best effort: ids that do not resolve are dropped and
//! nothing here can fail. Content is authored by hand and partial metadata
//! renders better than an error page.

use crate::domain::date::parse_entry_date;
use crate::domain::entry::{Entry, RawEntry};
use crate::domain::taxonomy::{Category, LookupItem, Mood, Tag, Taxonomy, lookup};
use crate::domain::types::{EntryId, RawIds};

/// Maximum number of entries returned by [`find_related`].
pub const RELATED_ENTRIES_LIMIT: usize = 3;

/// Normalizes a single list-like field: a collection is kept verbatim, a
/// non-blank scalar becomes a one-element list, anything else is empty.
fn normalize_list<T, F>(ids: RawIds<T>, is_blank: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    match ids {
        RawIds::Collection(ids) => ids,
        RawIds::Scalar(id) if !is_blank(&id) => vec![id],
        RawIds::Scalar(_) | RawIds::Absent => Vec::new(),
    }
}

/// Normalizes a singular/plural field pair such as `categoryId` and
/// `categoryIds`.
///
/// A plural collection wins. Otherwise the singular id is taken when present,
/// then the plural field's scalar, yielding at most one id.
fn normalize_pair<T, F>(single: RawIds<T>, plural: RawIds<T>, is_blank: F) -> Vec<T>
where
    F: Fn(&T) -> bool,
{
    if let RawIds::Collection(ids) = plural {
        return ids;
    }
    match single {
        RawIds::Collection(ids) => ids,
        RawIds::Scalar(id) if !is_blank(&id) => vec![id],
        _ => normalize_list(plural, is_blank),
    }
}

fn resolve_names<L: LookupItem>(ids: &[L::Id], items: &[L]) -> Vec<String> {
    ids.iter()
        .filter_map(|id| lookup(items, id))
        .map(|item| item.name().to_string())
        .collect()
}

fn resolve_first<L: LookupItem>(ids: &[L::Id], items: &[L]) -> Option<String> {
    ids.iter()
        .find_map(|id| lookup(items, id))
        .map(|item| item.name().to_string())
}

/// Resolves the entry's category, tag and mood ids against the lookup
/// collections.
pub fn enrich(entry: RawEntry, categories: &[Category], tags: &[Tag], moods: &[Mood]) -> Entry {
    let RawEntry {
        id,
        title,
        content,
        created_at,
        date,
        category_id,
        category_ids,
        tag_ids,
        mood_id,
        mood_ids,
        extra,
    } = entry;

    let tag_ids = normalize_list(tag_ids, |id| id.is_blank());
    let category_ids = normalize_pair(category_id, category_ids, |id| id.is_blank());
    let mood_ids = normalize_pair(mood_id, mood_ids, |id| id.is_blank());

    let published_on = created_at
        .as_deref()
        .and_then(parse_entry_date)
        .or_else(|| date.as_deref().and_then(parse_entry_date));

    Entry {
        id,
        title,
        content,
        created_at,
        date,
        published_on,
        category: resolve_first(&category_ids, categories),
        tags: resolve_names(&tag_ids, tags),
        mood: resolve_first(&mood_ids, moods),
        category_ids,
        tag_ids,
        mood_ids,
        extra,
    }
}

/// [`enrich`] against a fetched [`Taxonomy`].
pub fn enrich_with(entry: RawEntry, taxonomy: &Taxonomy) -> Entry {
    enrich(entry, &taxonomy.categories, &taxonomy.tags, &taxonomy.moods)
}

/// Picks up to [`RELATED_ENTRIES_LIMIT`] entries that share the current
/// entry's category or at least one of its tags, in input order.
///
/// The entry whose id equals `current_id` is never returned. An absent
/// category only matches nothing.
pub fn find_related<'a>(
    all: &'a [Entry],
    current_id: &EntryId,
    current: &Entry,
) -> Vec<&'a Entry> {
    all.iter()
        .filter(|entry| &entry.id != current_id)
        .filter(|entry| {
            let same_category = matches!(
                (&entry.category, &current.category),
                (Some(a), Some(b)) if a == b
            );
            same_category || entry.tags.iter().any(|tag| current.tags.contains(tag))
        })
        .take(RELATED_ENTRIES_LIMIT)
        .collect()
}
