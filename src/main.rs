use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use env_logger::Env;
use tera::Tera;

use cozy_journal::models::config::{DEFAULT_CONFIG_PATH, ServerConfig};
use cozy_journal::repository::HttpContentRepository;
use cozy_journal::routes::configure;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config_path = std::env::var("COZY_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into());
    let server_config = match ServerConfig::load(&config_path) {
        Ok(server_config) => server_config,
        Err(e) => {
            log::error!("Failed to load configuration from {config_path}: {e}");
            std::process::exit(1);
        }
    };

    let repo = match HttpContentRepository::new(
        &server_config.content_api_url,
        server_config.request_timeout(),
    ) {
        Ok(repo) => repo,
        Err(e) => {
            log::error!("Failed to build content API client: {e}");
            std::process::exit(1);
        }
    };

    let tera = match Tera::new(&server_config.templates_glob()) {
        Ok(tera) => tera,
        Err(e) => {
            log::error!("Failed to parse templates: {e}");
            std::process::exit(1);
        }
    };

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Serving content from {} on {}:{}",
        server_config.content_api_url,
        bind_address.0,
        bind_address.1
    );

    let static_dir = server_config.static_dir.clone();
    let repo = web::Data::new(repo);
    let tera = web::Data::new(tera);
    let server_config = web::Data::new(server_config);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(repo.clone())
            .app_data(tera.clone())
            .app_data(server_config.clone())
            .service(Files::new("/assets", &static_dir))
            .configure(configure::<HttpContentRepository>)
    })
    .bind(bind_address)?
    .run()
    .await
}
