use actix_web::{HttpResponse, Responder, web};
use tera::Tera;

use crate::models::config::ServerConfig;
use crate::repository::{EntryReader, TaxonomyReader};
use crate::routes::{base_context, render_template};
use crate::services::main::show_home as show_home_service;

/// Number of cards each section contributes to the home page.
const HOME_ENTRIES_PER_SECTION: usize = 3;

pub async fn index<R>(
    repo: web::Data<R>,
    server_config: web::Data<ServerConfig>,
    tera: web::Data<Tera>,
) -> impl Responder
where
    R: EntryReader + TaxonomyReader + 'static,
{
    match show_home_service(repo.get_ref(), HOME_ENTRIES_PER_SECTION).await {
        Ok(previews) => {
            let mut context = base_context(&server_config, "index");
            context.insert("previews", &previews);
            render_template(&tera, "main/index.html", &context)
        }
        Err(err) => {
            log::error!("Failed to render index page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
