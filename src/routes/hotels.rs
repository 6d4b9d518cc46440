use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;

use crate::models::currency::{find_currency, normalize_currency_code};
use crate::models::hotel::{HotelStatistics, ValueCalculationMode};
use crate::models::hotel_form::{FormValidation, HotelFormData, ValidationErrors};
use crate::routes::{lock_store, SharedHotelStore};
use crate::services::formatting_service::{format_hotel_data, FormattedHotelData};
use crate::services::scoring_service::calculate_hotel_statistics;
use crate::services::validation_service::parse_hotel_form;
use crate::store::{HotelState, StoreError};

const SAVE_RETRY_MESSAGE: &str = "Unable to save hotel data. Please try again.";

#[derive(Serialize)]
struct SaveFailure<'a> {
    errors: ValidationErrors,
    state: &'a HotelState,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ComparisonRow {
    rank: usize,
    name: String,
    currency: String,
    value_score: f64,
    formatted: FormattedHotelData,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Comparison {
    calculation_mode: ValueCalculationMode,
    statistics: HotelStatistics,
    /// Scores are only comparable within one currency.
    mixed_currencies: bool,
    hotels: Vec<ComparisonRow>,
}

fn invalid_form(errors: ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(FormValidation {
        errors,
        is_valid: false,
    })
}

/*
    GET /api/hotels
*/
pub async fn get_hotels(store: SharedHotelStore) -> impl Responder {
    match lock_store(&store) {
        Ok(store) => HttpResponse::Ok().json(store.state()),
        Err(response) => response,
    }
}

/*
    POST /api/hotels
*/
pub async fn add_hotel(
    store: SharedHotelStore,
    input: web::Json<HotelFormData>,
) -> impl Responder {
    let form = input.into_inner();
    let mut hotel = match parse_hotel_form(&form) {
        Ok(hotel) => hotel,
        Err(errors) => return invalid_form(errors),
    };

    let mut store = match lock_store(&store) {
        Ok(store) => store,
        Err(response) => return response,
    };

    hotel.currency = normalize_currency_code(&hotel.currency);
    if hotel.currency.is_empty() {
        hotel.currency = store.state().last_used_currency.clone();
    }
    if find_currency(&hotel.currency).is_none() {
        return invalid_form(ValidationErrors {
            general: format!("Unsupported currency: {}", hotel.currency),
            ..ValidationErrors::default()
        });
    }

    match store.add_hotel(hotel) {
        Ok(()) => HttpResponse::Created().json(store.state()),
        Err(StoreError::Scoring(e)) => {
            log::error!("Validated hotel could not be scored: {}", e);
            HttpResponse::InternalServerError()
                .json(serde_json::json!({"error": e.to_string()}))
        }
        Err(e) => {
            log::warn!("Hotel kept in memory but not saved: {}", e);
            HttpResponse::ServiceUnavailable().json(SaveFailure {
                errors: ValidationErrors {
                    general: SAVE_RETRY_MESSAGE.to_string(),
                    ..ValidationErrors::default()
                },
                state: store.state(),
            })
        }
    }
}

/*
    DELETE /api/hotels
*/
pub async fn clear_hotels(store: SharedHotelStore) -> impl Responder {
    match lock_store(&store) {
        Ok(mut store) => {
            store.clear_all_hotels();
            HttpResponse::Ok().json(store.state())
        }
        Err(response) => response,
    }
}

/*
    GET /api/hotels/statistics
*/
pub async fn get_statistics(store: SharedHotelStore) -> impl Responder {
    match lock_store(&store) {
        Ok(store) => HttpResponse::Ok().json(calculate_hotel_statistics(&store.state().hotels)),
        Err(response) => response,
    }
}

/*
    GET /api/hotels/compare
*/
pub async fn compare_hotels(store: SharedHotelStore) -> impl Responder {
    let store = match lock_store(&store) {
        Ok(store) => store,
        Err(response) => return response,
    };
    let state = store.state();

    let hotels: Vec<ComparisonRow> = state
        .hotels
        .iter()
        .enumerate()
        .map(|(index, hotel)| ComparisonRow {
            rank: index + 1,
            name: hotel.name.clone(),
            currency: hotel.currency.clone(),
            value_score: hotel.ranking_score(),
            formatted: format_hotel_data(hotel),
        })
        .collect();

    let mixed_currencies = state
        .hotels
        .windows(2)
        .any(|pair| pair[0].currency != pair[1].currency);

    HttpResponse::Ok().json(Comparison {
        calculation_mode: state.calculation_mode,
        statistics: calculate_hotel_statistics(&state.hotels),
        mixed_currencies,
        hotels,
    })
}
