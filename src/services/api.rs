use crate::domain::entry::{Entry, Section};
use crate::repository::{EntryReader, TaxonomyReader};

use super::{ServiceResult, load_section, load_taxonomy};

/// Core business logic for the `/api/v1/{section}` endpoint.
///
/// Returns every enriched entry of the section in API order so that other
/// front-ends can reuse the resolved metadata.
pub async fn api_v1_entries<R>(section: Section, repo: &R) -> ServiceResult<Vec<Entry>>
where
    R: EntryReader + TaxonomyReader,
{
    let taxonomy = load_taxonomy(repo).await;
    load_section(section, &taxonomy, repo).await
}
