use actix_web::{HttpResponse, Responder};
use serde::Serialize;
use std::collections::HashMap;
use std::env;

use crate::routes::{lock_store, SharedHotelStore};

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(store: SharedHotelStore) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let store = match lock_store(&store) {
        Ok(store) => store,
        Err(response) => return response,
    };

    let storage_result = if store.has_storage() {
        ServiceStatus {
            status: "ok".to_string(),
            details: Some("Hotel data is saved locally".to_string()),
        }
    } else {
        ServiceStatus {
            status: "error".to_string(),
            details: Some("Local storage disabled; new hotels will not be saved".to_string()),
        }
    };
    health
        .services
        .insert("local_storage".to_string(), storage_result.clone());

    let state = store.state();
    let store_result = ServiceStatus {
        status: if state.error.is_some() { "error" } else { "ok" }.to_string(),
        details: Some(
            state
                .error
                .clone()
                .unwrap_or_else(|| format!("{} hotels loaded", state.hotels.len())),
        ),
    };
    health
        .services
        .insert("hotel_store".to_string(), store_result.clone());

    // Any failing service degrades the whole report; the API keeps serving.
    if storage_result.status != "ok" || store_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}
