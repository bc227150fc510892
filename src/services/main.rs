use serde::Serialize;

use crate::domain::entry::{EntrySort, Section};
use crate::dto::entries::EntryCard;
use crate::repository::{EntryReader, TaxonomyReader};

use super::{ServiceResult, load_section, load_taxonomy};

/// Latest cards of one section for the home page.
#[derive(Debug, Serialize)]
pub struct SectionPreview {
    pub section: Section,
    pub title: &'static str,
    pub entries: Vec<EntryCard>,
}

/// Core business logic for rendering the home page.
///
/// Every section contributes its `per_section` newest entries. A section whose
/// collection cannot be fetched is left out rather than failing the page;
/// only when all sections fail is an error returned.
pub async fn show_home<R>(repo: &R, per_section: usize) -> ServiceResult<Vec<SectionPreview>>
where
    R: EntryReader + TaxonomyReader,
{
    let taxonomy = load_taxonomy(repo).await;

    let mut previews = Vec::with_capacity(Section::ALL.len());
    let mut last_error = None;

    for section in Section::ALL {
        match load_section(section, &taxonomy, repo).await {
            Ok(mut entries) => {
                EntrySort::Newest.apply(&mut entries);
                previews.push(SectionPreview {
                    section,
                    title: section.title(),
                    entries: entries
                        .iter()
                        .take(per_section)
                        .map(|entry| EntryCard::new(section, entry))
                        .collect(),
                });
            }
            Err(e) => last_error = Some(e),
        }
    }

    match (previews.is_empty(), last_error) {
        (true, Some(e)) => Err(e),
        _ => Ok(previews),
    }
}
