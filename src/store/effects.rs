//! Storage side of the store.
//!
//! The reducer never touches storage. It returns [`Effect`]s and the store
//! executes them here, in order, stopping at the first failure.

use serde_json::Value;

use crate::db::local_storage::{KeyValueStorage, StorageError};
use crate::models::hotel::{HotelRecord, ValueCalculationMode, DEFAULT_CURRENCY};
use crate::store::state::{
    CALCULATION_MODE_KEY, HOTELS_KEY, LAST_USED_CURRENCY_KEY, LOAD_FAILED_MESSAGE,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append one unscored record to the persisted list.
    AppendHotelRecord(HotelRecord),
    RemoveHotels,
    SaveLastUsedCurrency(String),
    SaveCalculationMode(ValueCalculationMode),
}

/// What initialization hands to the reducer.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialData {
    pub records: Vec<HotelRecord>,
    pub last_used_currency: String,
    pub calculation_mode: ValueCalculationMode,
    pub load_error: Option<String>,
}

impl Default for InitialData {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            last_used_currency: DEFAULT_CURRENCY.to_string(),
            calculation_mode: ValueCalculationMode::default(),
            load_error: None,
        }
    }
}

/// The saved hotel list as raw JSON values. A missing or blank entry is an
/// empty list.
fn read_stored_hotels(storage: &dyn KeyValueStorage) -> Result<Vec<Value>, StorageError> {
    match storage.get(HOTELS_KEY)? {
        Some(text) if !text.trim().is_empty() => Ok(serde_json::from_str(&text)?),
        _ => Ok(Vec::new()),
    }
}

pub fn execute_effect(storage: &dyn KeyValueStorage, effect: &Effect) -> Result<(), StorageError> {
    match effect {
        Effect::AppendHotelRecord(record) => {
            // Re-read instead of trusting memory so entries written by
            // another session since our load are kept.
            let mut stored = read_stored_hotels(storage)?;
            stored.push(serde_json::to_value(record)?);
            storage.set(HOTELS_KEY, &serde_json::to_string(&stored)?)
        }
        Effect::RemoveHotels => storage.remove(HOTELS_KEY),
        Effect::SaveLastUsedCurrency(code) => storage.set(LAST_USED_CURRENCY_KEY, code),
        Effect::SaveCalculationMode(mode) => storage.set(CALCULATION_MODE_KEY, mode.as_str()),
    }
}

pub fn execute_effects(
    storage: &dyn KeyValueStorage,
    effects: &[Effect],
) -> Result<(), StorageError> {
    for effect in effects {
        execute_effect(storage, effect)?;
    }
    Ok(())
}

/// Accepts a stored entry only if it could have come from a valid form.
fn parse_stored_hotel(value: &Value) -> Option<HotelRecord> {
    let entry = value.as_object()?;
    let name = entry.get("name")?.as_str()?;
    let price = entry.get("price")?.as_f64()?;
    let rating = entry.get("rating")?.as_f64()?;

    if name.trim().is_empty() || price <= 0.0 || !(0.0..=10.0).contains(&rating) {
        return None;
    }

    let currency = entry
        .get("currency")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_CURRENCY);

    Some(HotelRecord {
        name: name.to_string(),
        price,
        rating,
        currency: currency.to_string(),
    })
}

fn load_last_used_currency(storage: &dyn KeyValueStorage) -> String {
    match storage.get(LAST_USED_CURRENCY_KEY) {
        Ok(Some(code)) if !code.trim().is_empty() => code,
        Ok(_) => DEFAULT_CURRENCY.to_string(),
        Err(e) => {
            log::warn!("Error loading last used currency: {}", e);
            DEFAULT_CURRENCY.to_string()
        }
    }
}

fn load_calculation_mode(storage: &dyn KeyValueStorage) -> ValueCalculationMode {
    match storage.get(CALCULATION_MODE_KEY) {
        Ok(Some(text)) => text.parse().unwrap_or_else(|e| {
            log::warn!("Ignoring saved calculation mode: {}", e);
            ValueCalculationMode::default()
        }),
        Ok(None) => ValueCalculationMode::default(),
        Err(e) => {
            log::warn!("Error loading calculation mode: {}", e);
            ValueCalculationMode::default()
        }
    }
}

fn load_hotel_records(storage: &dyn KeyValueStorage) -> Result<Vec<HotelRecord>, StorageError> {
    let stored = read_stored_hotels(storage)?;

    let records: Vec<HotelRecord> = stored.iter().filter_map(parse_stored_hotel).collect();
    let skipped = stored.len() - records.len();
    if skipped > 0 {
        log::warn!("Skipped {} invalid saved hotel entries", skipped);
    }

    Ok(records)
}

/// Reads everything initialization needs. Never fails: a broken hotel list
/// becomes an empty one plus a load error.
pub fn load_initial_data(storage: &dyn KeyValueStorage) -> InitialData {
    let last_used_currency = load_last_used_currency(storage);
    let calculation_mode = load_calculation_mode(storage);

    let (records, load_error) = match load_hotel_records(storage) {
        Ok(records) => (records, None),
        Err(e) => {
            log::error!("Error loading data from local storage: {}", e);
            (Vec::new(), Some(LOAD_FAILED_MESSAGE.to_string()))
        }
    };

    InitialData {
        records,
        last_used_currency,
        calculation_mode,
        load_error,
    }
}
