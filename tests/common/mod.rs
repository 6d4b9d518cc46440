#![allow(dead_code)]

use actix_web::{web, App};
use std::sync::{Arc, Mutex};

use sakuyado_api::db::local_storage::{FaultyStorage, MemoryStorage, SharedStorage};
use sakuyado_api::routes::{self, SharedHotelStore};
use sakuyado_api::store::HotelStore;

pub struct TestApp {
    pub store: SharedHotelStore,
}

impl TestApp {
    pub fn new(storage: Option<SharedStorage>) -> Self {
        let store = HotelStore::open(storage);
        Self {
            store: web::Data::new(Mutex::new(store)),
        }
    }

    pub fn with_memory_storage() -> (Self, Arc<MemoryStorage>) {
        let storage = Arc::new(MemoryStorage::new());
        (Self::new(Some(storage.clone())), storage)
    }

    pub fn with_faulty_storage() -> (Self, Arc<FaultyStorage>) {
        let storage = Arc::new(FaultyStorage::new(MemoryStorage::new()));
        (Self::new(Some(storage.clone())), storage)
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(self.store.clone())
            .configure(routes::configure)
    }
}

pub fn hotel_form(name: &str, price: &str, rating: &str, currency: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "price": price,
        "rating": rating,
        "currency": currency,
    })
}
