use crate::models::hotel::{Hotel, HotelStatistics, ValueCalculationMode};

/// Lower bound applied to price before taking its logarithm in
/// `QualityFirst` mode. ln(1) is zero and ln(<1) is negative.
pub const QUALITY_FIRST_PRICE_FLOOR: f64 = 1.1;

const SCORE_SCALE: f64 = 10_000.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ScoringError {
    #[error("Price must be greater than 0")]
    NonPositivePrice(f64),
}

fn round_score(score: f64) -> f64 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}

/// Value score for a hotel, rounded to four decimal places.
///
/// A non-positive price is an error rather than a sentinel: validated input
/// can never produce one, so reaching this branch means a caller skipped
/// validation.
pub fn calculate_value_score(
    rating: f64,
    price: f64,
    mode: ValueCalculationMode,
) -> Result<f64, ScoringError> {
    if price <= 0.0 || price.is_nan() {
        return Err(ScoringError::NonPositivePrice(price));
    }

    let score = match mode {
        ValueCalculationMode::StrictBudget => rating / price,
        ValueCalculationMode::Balanced => rating * rating / price,
        ValueCalculationMode::QualityFirst => rating / price.max(QUALITY_FIRST_PRICE_FLOOR).ln(),
    };

    Ok(round_score(score))
}

/// Returns a copy ordered by descending score. Ties keep their input order.
pub fn sort_hotels_by_value_score(hotels: &[Hotel]) -> Vec<Hotel> {
    let mut sorted = hotels.to_vec();
    sorted.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
    sorted
}

pub fn get_minimum_price(hotels: &[Hotel]) -> f64 {
    if hotels.is_empty() {
        return 0.0;
    }
    hotels.iter().map(|h| h.price).fold(f64::INFINITY, f64::min)
}

pub fn get_maximum_rating(hotels: &[Hotel]) -> f64 {
    if hotels.is_empty() {
        return 0.0;
    }
    hotels.iter().map(|h| h.rating).fold(f64::NEG_INFINITY, f64::max)
}

/// Score of the first hotel. The list is expected to be sorted already.
pub fn get_top_value_score(hotels: &[Hotel]) -> f64 {
    hotels.first().map(Hotel::ranking_score).unwrap_or(0.0)
}

pub fn get_hotel_count(hotels: &[Hotel]) -> usize {
    hotels.len()
}

/// Aggregate figures for the comparison view.
///
/// `hotels` must already be sorted by descending score: the top score is read
/// from the first element, not searched for.
pub fn calculate_hotel_statistics(hotels: &[Hotel]) -> HotelStatistics {
    HotelStatistics {
        count: get_hotel_count(hotels),
        top_score: get_top_value_score(hotels),
        lowest_price: get_minimum_price(hotels),
        highest_rating: get_maximum_rating(hotels),
    }
}
