pub use errors::{ServiceError, ServiceResult};

pub mod api;
pub mod entries;
pub mod errors;
pub mod main;

use crate::domain::enrichment::enrich_with;
use crate::domain::entry::{Entry, Section};
use crate::domain::taxonomy::Taxonomy;
use crate::repository::{EntryReader, TaxonomyReader};

/// Fetches the lookup collections. A collection that fails to load is logged
/// and treated as empty.
pub(crate) async fn load_taxonomy<R>(repo: &R) -> Taxonomy
where
    R: TaxonomyReader,
{
    let categories = repo.list_categories().await.unwrap_or_else(|e| {
        log::warn!("Failed to list categories, rendering without them: {e}");
        Vec::new()
    });
    let tags = repo.list_tags().await.unwrap_or_else(|e| {
        log::warn!("Failed to list tags, rendering without them: {e}");
        Vec::new()
    });
    let moods = repo.list_moods().await.unwrap_or_else(|e| {
        log::warn!("Failed to list moods, rendering without them: {e}");
        Vec::new()
    });

    Taxonomy {
        categories,
        tags,
        moods,
    }
}

/// Fetches and enriches every entry of a section.
pub(crate) async fn load_section<R>(
    section: Section,
    taxonomy: &Taxonomy,
    repo: &R,
) -> ServiceResult<Vec<Entry>>
where
    R: EntryReader,
{
    match repo.list_entries(section).await {
        Ok(entries) => Ok(entries
            .into_iter()
            .map(|entry| enrich_with(entry, taxonomy))
            .collect()),
        Err(e) => {
            log::error!("Failed to list {section} entries: {e}");
            Err(ServiceError::Internal)
        }
    }
}
