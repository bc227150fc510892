use actix_web::{HttpResponse, Responder, web};

use crate::domain::entry::Section;
use crate::repository::{EntryReader, TaxonomyReader};
use crate::services::api::api_v1_entries as api_v1_entries_service;

pub async fn api_v1_entries<R>(section: web::Path<String>, repo: web::Data<R>) -> impl Responder
where
    R: EntryReader + TaxonomyReader + 'static,
{
    let Ok(section) = section.parse::<Section>() else {
        return HttpResponse::NotFound().finish();
    };

    match api_v1_entries_service(section, repo.get_ref()).await {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(err) => {
            log::error!("Failed to serve {section} entries: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
