use serde::Serialize;

use crate::domain::enrichment::find_related;
use crate::domain::entry::Section;
use crate::domain::pagination::Paginated;
use crate::domain::taxonomy::Category;
use crate::domain::types::EntryId;
use crate::dto::entries::{EntryCard, EntryDetail};
use crate::forms::entries::EntryListPayload;
use crate::repository::{EntryReader, TaxonomyReader};

use super::{ServiceResult, load_section, load_taxonomy};

/// Everything the section listing template needs.
#[derive(Debug, Serialize)]
pub struct EntryListPage {
    pub section: Section,
    pub entries: Paginated<EntryCard>,
    pub categories: Vec<Category>,
}

/// Everything the entry template needs.
#[derive(Debug, Serialize)]
pub struct EntryPage {
    pub section: Section,
    pub entry: EntryDetail,
    pub related: Vec<EntryCard>,
}

/// Core business logic for a section listing.
///
/// Entries are enriched, filtered by the search string and category, sorted
/// and finally cut into pages of `per_page` cards.
pub async fn show_entries<R>(
    section: Section,
    payload: EntryListPayload,
    per_page: usize,
    repo: &R,
) -> ServiceResult<EntryListPage>
where
    R: EntryReader + TaxonomyReader,
{
    let taxonomy = load_taxonomy(repo).await;
    let mut entries = load_section(section, &taxonomy, repo).await?;

    entries.retain(|entry| payload.filter.matches(entry));
    payload.sort.apply(&mut entries);

    let entries = Paginated::from_items(entries, payload.page, per_page)
        .map(|entry| EntryCard::new(section, &entry));

    Ok(EntryListPage {
        section,
        entries,
        categories: taxonomy.categories,
    })
}

/// Core business logic for a single entry page.
///
/// Returns `ServiceError::NotFound` when the section has no entry with the
/// given id. Related entries are picked from the same section in API order.
pub async fn show_entry<R>(section: Section, id: &str, repo: &R) -> ServiceResult<EntryPage>
where
    R: EntryReader + TaxonomyReader,
{
    let taxonomy = load_taxonomy(repo).await;
    let entries = load_section(section, &taxonomy, repo).await?;

    let id = EntryId::new(id);
    let Some(entry) = entries.iter().find(|entry| entry.id == id) else {
        return Err(super::ServiceError::NotFound);
    };

    let related = find_related(&entries, &id, entry)
        .into_iter()
        .map(|related| EntryCard::new(section, related))
        .collect();

    Ok(EntryPage {
        section,
        entry: EntryDetail::new(section, entry),
        related,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::{EntryFilter, EntrySort, RawEntry};
    use crate::domain::taxonomy::{Mood, Tag, Taxonomy};
    use crate::domain::types::{CategoryId, RawIds, TagId};
    use crate::repository::test::TestRepository;
    use crate::services::ServiceError;

    fn taxonomy() -> Taxonomy {
        Taxonomy {
            categories: vec![
                Category::new("c1", "Завтраки"),
                Category::new("c2", "Супы"),
            ],
            tags: vec![Tag::new("t1", "быстро"), Tag::new("t2", "зима")],
            moods: vec![Mood::new("m1", "уютное")],
        }
    }

    fn recipe(id: &str, title: &str, category: &str, tag: &str, date: &str) -> RawEntry {
        let mut raw = RawEntry::new(id, title);
        raw.category_id = RawIds::Scalar(CategoryId::new(category));
        raw.tag_ids = RawIds::Scalar(TagId::new(tag));
        raw.date = Some(date.into());
        raw
    }

    fn repo() -> TestRepository {
        TestRepository::new(taxonomy()).with_entries(
            Section::Recipes,
            vec![
                recipe("1", "Овсянка", "c1", "t1", "2024-01-10"),
                recipe("2", "Борщ", "c2", "t2", "2024-02-10"),
                recipe("3", "Сырники", "c1", "t2", "2024-03-10"),
                recipe("4", "Щи", "c2", "t1", "2024-04-10"),
                recipe("5", "Солянка", "c2", "none", "2024-05-10"),
            ],
        )
    }

    #[actix_web::test]
    async fn lists_newest_first_with_metadata() {
        let page = show_entries(Section::Recipes, EntryListPayload::default(), 9, &repo())
            .await
            .unwrap();

        let titles: Vec<_> = page.entries.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Солянка", "Щи", "Сырники", "Борщ", "Овсянка"]);
        assert_eq!(page.entries.items[1].meta.category.as_deref(), Some("Супы"));
        assert_eq!(page.entries.items[1].meta.tags, vec!["быстро"]);
        assert_eq!(page.categories.len(), 2);
    }

    #[actix_web::test]
    async fn filters_by_category_and_paginates() {
        let payload = EntryListPayload {
            page: 2,
            sort: EntrySort::Oldest,
            filter: EntryFilter {
                search: None,
                category: Some(CategoryId::new("c2")),
            },
        };

        let page = show_entries(Section::Recipes, payload, 2, &repo())
            .await
            .unwrap();

        assert_eq!(page.entries.total_items, 3);
        assert_eq!(page.entries.total_pages, 2);
        let titles: Vec<_> = page.entries.items.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Солянка"]);
    }

    #[actix_web::test]
    async fn entry_page_includes_related() {
        let page = show_entry(Section::Recipes, "1", &repo()).await.unwrap();

        assert_eq!(page.entry.title, "Овсянка");
        let related: Vec<_> = page.related.iter().map(|c| c.id.as_str()).collect();
        // "3" shares the category, "4" shares the tag.
        assert_eq!(related, vec!["3", "4"]);
    }

    #[actix_web::test]
    async fn unknown_entry_is_not_found() {
        let err = show_entry(Section::Recipes, "404", &repo())
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[actix_web::test]
    async fn taxonomy_outage_degrades_to_plain_entries() {
        let repo = repo().failing_taxonomy();

        let page = show_entry(Section::Recipes, "1", &repo).await.unwrap();

        assert_eq!(page.entry.meta.category, None);
        assert!(page.entry.meta.tags.is_empty());
        assert!(page.related.is_empty());
    }

    #[actix_web::test]
    async fn entry_outage_is_internal() {
        let repo = repo().failing_entries();

        let err = show_entries(Section::Recipes, EntryListPayload::default(), 9, &repo)
            .await
            .unwrap_err();
        assert_eq!(err, ServiceError::Internal);
    }
}
