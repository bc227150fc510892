use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::domain::entry::Section;
use crate::models::config::ServerConfig;
use crate::repository::{EntryReader, TaxonomyReader};

pub mod api;
pub mod entries;
pub mod main;

/// Registers every page and API route backed by the repository `R`.
///
/// The application must provide `web::Data<R>`, `web::Data<Tera>` and
/// `web::Data<ServerConfig>`.
pub fn configure<R>(cfg: &mut web::ServiceConfig)
where
    R: EntryReader + TaxonomyReader + 'static,
{
    cfg.service(
        web::scope("/api").route("/v1/{section}", web::get().to(api::api_v1_entries::<R>)),
    )
    .route("/", web::get().to(main::index::<R>))
    .route("/{section}", web::get().to(entries::show_entries::<R>))
    .route("/{section}/{entry_id}", web::get().to(entries::show_entry::<R>));
}

pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    render_template_with_status(tera, template, context, StatusCode::OK)
}

pub fn render_template_with_status(
    tera: &Tera,
    template: &str,
    context: &Context,
    status: StatusCode,
) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(tera.render(template, context).unwrap_or_else(|e| {
            log::error!("Failed to render template '{template}': {e}");
            String::new()
        }))
}

/// Navigation entry rendered in the site header.
#[derive(serde::Serialize)]
struct NavItem {
    slug: &'static str,
    title: &'static str,
}

pub fn base_context(server_config: &ServerConfig, current_page: &str) -> Context {
    let sections = Section::ALL
        .iter()
        .map(|section| NavItem {
            slug: section.slug(),
            title: section.title(),
        })
        .collect::<Vec<_>>();

    let mut context = Context::new();
    context.insert("site_title", &server_config.site_title);
    context.insert("sections", &sections);
    context.insert("current_page", current_page);
    context
}

pub fn not_found(tera: &Tera, server_config: &ServerConfig) -> HttpResponse {
    let context = base_context(server_config, "not_found");
    render_template_with_status(tera, "main/not_found.html", &context, StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};

    use super::*;
    use crate::domain::entry::RawEntry;
    use crate::domain::taxonomy::{Category, Tag, Taxonomy};
    use crate::domain::types::{CategoryId, RawIds, TagId};
    use crate::repository::test::TestRepository;

    fn tera() -> Tera {
        Tera::new(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/**/*.html"))
            .expect("templates should parse")
    }

    fn server_config() -> ServerConfig {
        ServerConfig {
            address: "127.0.0.1".into(),
            port: 8080,
            content_api_url: "https://cms.example.com/api".into(),
            request_timeout_secs: 5,
            templates_dir: "templates".into(),
            static_dir: "assets".into(),
            site_title: "Уютный дневник".into(),
            items_per_page: 9,
        }
    }

    fn repo() -> TestRepository {
        let mut soup = RawEntry::new("1", "Борщ");
        soup.category_id = RawIds::Scalar(CategoryId::new("c1"));
        soup.tag_ids = RawIds::Scalar(TagId::new("t1"));
        soup.date = Some("2024-02-10".into());

        let mut stew = RawEntry::new("2", "Солянка");
        stew.category_id = RawIds::Scalar(CategoryId::new("c1"));
        stew.date = Some("2024-03-10".into());

        TestRepository::new(Taxonomy {
            categories: vec![Category::new("c1", "Супы")],
            tags: vec![Tag::new("t1", "зима")],
            moods: Vec::new(),
        })
        .with_entries(Section::Recipes, vec![soup, stew])
    }

    macro_rules! init_app {
        ($repo:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($repo))
                    .app_data(web::Data::new(tera()))
                    .app_data(web::Data::new(server_config()))
                    .configure(configure::<TestRepository>),
            )
            .await
        };
    }

    async fn body_text(resp: actix_web::dev::ServiceResponse) -> String {
        String::from_utf8(test::read_body(resp).await.to_vec()).unwrap()
    }

    #[actix_web::test]
    async fn home_page_lists_sections() {
        let app = init_app!(repo());

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("Рецепты"));
        assert!(html.contains("Солянка"));
    }

    #[actix_web::test]
    async fn listing_renders_enriched_cards() {
        let app = init_app!(repo());

        let req = test::TestRequest::get().uri("/recipes").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("Борщ"));
        assert!(html.contains("Супы"));
    }

    #[actix_web::test]
    async fn malformed_page_renders_first_page() {
        let app = init_app!(repo());

        for uri in ["/recipes?page=abc", "/recipes?page=-1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::OK, "{uri}");
            assert!(body_text(resp).await.contains("Солянка"), "{uri}");
        }
    }

    #[actix_web::test]
    async fn unknown_section_is_not_found() {
        let app = init_app!(repo());

        for uri in ["/blog", "/blog/1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
            assert!(body_text(resp).await.contains("Страница не найдена"), "{uri}");
        }
    }

    #[actix_web::test]
    async fn entry_page_and_missing_entry() {
        let app = init_app!(repo());

        let req = test::TestRequest::get().uri("/recipes/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let html = body_text(resp).await;
        assert!(html.contains("Борщ"));
        assert!(html.contains("/recipes/2"));

        let req = test::TestRequest::get().uri("/recipes/404").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn entry_outage_is_internal_error() {
        let app = init_app!(repo().failing_entries());

        for uri in ["/recipes", "/recipes/1", "/api/v1/recipes", "/"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        }
    }

    #[actix_web::test]
    async fn api_returns_enriched_json() {
        let app = init_app!(repo());

        let req = test::TestRequest::get().uri("/api/v1/recipes").to_request();
        let entries: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(entries[0]["id"], "1");
        assert_eq!(entries[0]["category"], "Супы");
        assert_eq!(entries[0]["tags"], serde_json::json!(["зима"]));

        let req = test::TestRequest::get().uri("/api/v1/blog").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
