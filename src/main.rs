use std::sync::Mutex;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use sakuyado_api::config::AppConfig;
use sakuyado_api::db::local_storage::create_local_storage;
use sakuyado_api::routes;
use sakuyado_api::store::HotelStore;

fn build_cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };
    cors.allow_any_method().allow_any_header().max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    log::info!("Application starting...");

    let config = AppConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    let storage = create_local_storage(&config.storage);
    let store = HotelStore::open(storage);
    if let Some(error) = &store.state().error {
        log::warn!("Starting with load error: {}", error);
    }
    let store = web::Data::new(Mutex::new(store));

    log::info!("Starting HTTP server at http://{}:{}", config.host, config.port);

    let cors_origin = config.cors_allowed_origin.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(build_cors(cors_origin.as_deref()))
            .app_data(store.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
