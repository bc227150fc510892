use actix_web::{HttpResponse, Responder, web};
use tera::Tera;

use crate::domain::entry::Section;
use crate::forms::entries::{EntryListForm, EntryListPayload};
use crate::models::config::ServerConfig;
use crate::repository::{EntryReader, TaxonomyReader};
use crate::routes::{base_context, not_found, render_template};
use crate::services::ServiceError;
use crate::services::entries::{
    show_entries as show_entries_service, show_entry as show_entry_service,
};

/// Turns the raw query into listing parameters. Anything unusable, including
/// a query the extractor rejects outright, yields the default listing.
fn listing_payload(
    section: Section,
    query: Result<web::Query<EntryListForm>, actix_web::Error>,
) -> EntryListPayload {
    let form = match query {
        Ok(web::Query(form)) => form,
        Err(e) => {
            log::warn!("Ignoring malformed listing query for {section}: {e}");
            return EntryListPayload::default();
        }
    };

    EntryListPayload::try_from(form).unwrap_or_else(|e| {
        log::warn!("Ignoring invalid listing query for {section}: {e}");
        EntryListPayload::default()
    })
}

pub async fn show_entries<R>(
    section: web::Path<String>,
    query: Result<web::Query<EntryListForm>, actix_web::Error>,
    repo: web::Data<R>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder
where
    R: EntryReader + TaxonomyReader + 'static,
{
    let Ok(section) = section.parse::<Section>() else {
        return not_found(&tera, &server_config);
    };

    let payload = listing_payload(section, query);

    let search = payload.filter.search.clone().unwrap_or_default();
    let category = payload
        .filter
        .category
        .as_ref()
        .map(ToString::to_string)
        .unwrap_or_default();
    let sort = payload.sort;

    match show_entries_service(section, payload, server_config.items_per_page, repo.get_ref())
        .await
    {
        Ok(page) => {
            let mut context = base_context(&server_config, section.slug());
            context.insert("section_title", section.title());
            context.insert("page", &page);
            context.insert("search", &search);
            context.insert("category", &category);
            context.insert("sort", sort.as_str());
            render_template(&tera, "entries/index.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &server_config),
        Err(err) => {
            log::error!("Failed to render {section} listing: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

pub async fn show_entry<R>(
    path: web::Path<(String, String)>,
    repo: web::Data<R>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder
where
    R: EntryReader + TaxonomyReader + 'static,
{
    let (section, entry_id) = path.into_inner();
    let Ok(section) = section.parse::<Section>() else {
        return not_found(&tera, &server_config);
    };

    match show_entry_service(section, &entry_id, repo.get_ref()).await {
        Ok(page) => {
            let mut context = base_context(&server_config, section.slug());
            context.insert("section_title", section.title());
            context.insert("page", &page);
            render_template(&tera, "entries/show.html", &context)
        }
        Err(ServiceError::NotFound) => not_found(&tera, &server_config),
        Err(err) => {
            log::error!("Failed to render {section} entry {entry_id}: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::EntrySort;

    fn parse(query: &str) -> EntryListPayload {
        let query = web::Query::<EntryListForm>::from_query(query).map_err(Into::into);
        listing_payload(Section::Recipes, query)
    }

    #[test]
    fn non_numeric_page_falls_back_to_default() {
        assert_eq!(parse("page=abc"), EntryListPayload::default());
    }

    #[test]
    fn negative_page_falls_back_to_default() {
        assert_eq!(parse("page=-1&sort=title"), EntryListPayload::default());
    }

    #[test]
    fn unknown_sort_falls_back_to_default() {
        assert_eq!(parse("sort=random"), EntryListPayload::default());
    }

    #[test]
    fn valid_query_is_kept() {
        let payload = parse("page=3&sort=oldest&q=%D0%B1%D0%BE%D1%80%D1%89");
        assert_eq!(payload.page, 3);
        assert_eq!(payload.sort, EntrySort::Oldest);
        assert_eq!(payload.filter.search.as_deref(), Some("борщ"));
    }
}
