use actix_web::{web, HttpResponse};
use serde_json::json;
use std::sync::{Mutex, MutexGuard};

use crate::store::HotelStore;

pub mod currencies;
pub mod health;
pub mod hotels;
pub mod preferences;

/// The store as registered in application data.
pub type SharedHotelStore = web::Data<Mutex<HotelStore>>;

pub(crate) fn lock_store(
    store: &SharedHotelStore,
) -> Result<MutexGuard<'_, HotelStore>, HttpResponse> {
    store.lock().map_err(|_| {
        log::error!("Hotel store lock poisoned");
        HttpResponse::InternalServerError().json(json!({"error": "Hotel store is unavailable"}))
    })
}

/// Route table shared by the binary and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check)).service(
        web::scope("/api")
            .service(
                web::scope("/hotels")
                    .route("", web::get().to(hotels::get_hotels))
                    .route("", web::post().to(hotels::add_hotel))
                    .route("", web::delete().to(hotels::clear_hotels))
                    .route("/statistics", web::get().to(hotels::get_statistics))
                    .route("/compare", web::get().to(hotels::compare_hotels)),
            )
            .route("/currencies", web::get().to(currencies::get_currencies))
            .service(
                web::scope("/preferences")
                    .route("/currency", web::put().to(preferences::set_currency))
                    .route(
                        "/calculation-mode",
                        web::put().to(preferences::set_calculation_mode),
                    )
                    .route(
                        "/calculation-modes",
                        web::get().to(preferences::get_calculation_modes),
                    ),
            ),
    );
}
