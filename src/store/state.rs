use serde::Serialize;

use crate::models::hotel::{Hotel, ValueCalculationMode, DEFAULT_CURRENCY};

pub const HOTELS_KEY: &str = "hotels";
pub const LAST_USED_CURRENCY_KEY: &str = "lastUsedCurrency";
pub const CALCULATION_MODE_KEY: &str = "calculationMode";

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load saved data";
pub const STORAGE_UNAVAILABLE_MESSAGE: &str =
    "Unable to save hotel data. Storage is not available.";
pub const SAVE_FAILED_MESSAGE: &str =
    "Unable to save hotel data. Please try again or check your storage settings.";
pub const CLEAR_FAILED_MESSAGE: &str = "Failed to clear hotel data";
pub const MODE_SAVE_FAILED_MESSAGE: &str = "Failed to save calculation mode";

/// Everything the UI renders from.
///
/// `hotels` is kept sorted by descending value score and every entry carries
/// a score computed with `calculation_mode`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelState {
    pub hotels: Vec<Hotel>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub last_used_currency: String,
    pub calculation_mode: ValueCalculationMode,
}

impl Default for HotelState {
    fn default() -> Self {
        Self {
            hotels: Vec::new(),
            is_loading: true,
            error: None,
            last_used_currency: DEFAULT_CURRENCY.to_string(),
            calculation_mode: ValueCalculationMode::default(),
        }
    }
}
