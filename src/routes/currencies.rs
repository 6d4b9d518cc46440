use actix_web::{HttpResponse, Responder};

use crate::models::currency::CURRENCIES;

/*
    GET /api/currencies
*/
pub async fn get_currencies() -> impl Responder {
    HttpResponse::Ok().json(&CURRENCIES[..])
}
