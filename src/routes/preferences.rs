use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::models::currency::{find_currency, normalize_currency_code};
use crate::models::hotel::ValueCalculationMode;
use crate::routes::{lock_store, SharedHotelStore};

#[derive(Deserialize)]
pub struct CurrencyInput {
    code: String,
}

#[derive(Deserialize)]
pub struct CalculationModeInput {
    mode: String,
}

#[derive(Serialize)]
struct CalculationModeOption {
    mode: ValueCalculationMode,
    label: &'static str,
    description: &'static str,
}

/*
    PUT /api/preferences/currency
*/
pub async fn set_currency(
    store: SharedHotelStore,
    input: web::Json<CurrencyInput>,
) -> impl Responder {
    let code = normalize_currency_code(&input.code);
    if find_currency(&code).is_none() {
        return HttpResponse::BadRequest()
            .json(json!({"error": format!("Unsupported currency: {}", code)}));
    }

    match lock_store(&store) {
        Ok(mut store) => {
            store.set_last_used_currency(code);
            HttpResponse::Ok().json(store.state())
        }
        Err(response) => response,
    }
}

/*
    PUT /api/preferences/calculation-mode
*/
pub async fn set_calculation_mode(
    store: SharedHotelStore,
    input: web::Json<CalculationModeInput>,
) -> impl Responder {
    let mode: ValueCalculationMode = match input.mode.parse() {
        Ok(mode) => mode,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
    };

    match lock_store(&store) {
        Ok(mut store) => {
            store.set_calculation_mode(mode);
            HttpResponse::Ok().json(store.state())
        }
        Err(response) => response,
    }
}

/*
    GET /api/preferences/calculation-modes
*/
pub async fn get_calculation_modes() -> impl Responder {
    let options: Vec<CalculationModeOption> = ValueCalculationMode::ALL
        .into_iter()
        .map(|mode| CalculationModeOption {
            mode,
            label: mode.label(),
            description: mode.description(),
        })
        .collect();

    HttpResponse::Ok().json(options)
}
