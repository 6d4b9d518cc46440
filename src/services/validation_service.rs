use regex::Regex;
use std::sync::LazyLock;

use crate::models::hotel::HotelRecord;
use crate::models::hotel_form::{FormValidation, HotelFormData, ValidationErrors};

// Whole-string match, so "5.5.5" or "12abc" never reach the float parser.
static NUMERIC_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]*\.?[0-9]+$").expect("numeric literal pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Hotel name is required")]
    NameRequired,
    #[error("Price must be a positive number")]
    InvalidPrice,
    #[error("Rating must be between 0 and 10")]
    InvalidRating,
}

fn parse_numeric_literal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !NUMERIC_LITERAL.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

pub fn validate_hotel_name(name: &str) -> Result<(), FieldError> {
    if name.trim().is_empty() {
        return Err(FieldError::NameRequired);
    }
    Ok(())
}

/// Returns the parsed price when it is a well-formed number above zero.
pub fn validate_price(price: &str) -> Result<f64, FieldError> {
    match parse_numeric_literal(price) {
        Some(value) if value > 0.0 => Ok(value),
        _ => Err(FieldError::InvalidPrice),
    }
}

/// Returns the parsed rating when it is a well-formed number in [0, 10].
pub fn validate_rating(rating: &str) -> Result<f64, FieldError> {
    match parse_numeric_literal(rating) {
        Some(value) if (0.0..=10.0).contains(&value) => Ok(value),
        _ => Err(FieldError::InvalidRating),
    }
}

fn message<T>(result: &Result<T, FieldError>) -> String {
    match result {
        Ok(_) => String::new(),
        Err(e) => e.to_string(),
    }
}

/// Checks every field and reports all failures at once.
pub fn validate_hotel_form(form: &HotelFormData) -> FormValidation {
    let errors = ValidationErrors {
        name: message(&validate_hotel_name(&form.name)),
        price: message(&validate_price(&form.price)),
        rating: message(&validate_rating(&form.rating)),
        general: String::new(),
    };
    let is_valid = errors.is_empty();

    FormValidation { errors, is_valid }
}

/// Validates the form and converts it into a record ready for the store.
pub fn parse_hotel_form(form: &HotelFormData) -> Result<HotelRecord, ValidationErrors> {
    let name = validate_hotel_name(&form.name);
    let price = validate_price(&form.price);
    let rating = validate_rating(&form.rating);

    match (name, price, rating) {
        (Ok(()), Ok(price), Ok(rating)) => Ok(HotelRecord {
            name: form.name.clone(),
            price,
            rating,
            currency: form.currency.clone(),
        }),
        (name, price, rating) => Err(ValidationErrors {
            name: message(&name),
            price: message(&price),
            rating: message(&rating),
            general: String::new(),
        }),
    }
}
