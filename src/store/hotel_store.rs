use crate::db::local_storage::{SharedStorage, StorageError};
use crate::models::hotel::{HotelRecord, ValueCalculationMode};
use crate::services::scoring_service::ScoringError;
use crate::store::effects::{execute_effects, load_initial_data, Effect, InitialData};
use crate::store::reducer::{hotel_reducer, HotelAction, Transition};
use crate::store::state::{
    HotelState, CLEAR_FAILED_MESSAGE, LOAD_FAILED_MESSAGE, MODE_SAVE_FAILED_MESSAGE,
    SAVE_FAILED_MESSAGE, STORAGE_UNAVAILABLE_MESSAGE,
};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("local storage is not available")]
    StorageUnavailable,
    #[error("failed to save hotel data: {0}")]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

/// Owns the hotel list and keeps storage in step with it.
///
/// The only way to get a store is [`HotelStore::open`], which runs
/// initialization, so every handle a caller holds is already past loading.
/// Storage failures never undo an in-memory change; they land in
/// `state().error` instead.
pub struct HotelStore {
    state: HotelState,
    storage: Option<SharedStorage>,
}

impl HotelStore {
    /// Creates the store and loads saved hotels and preferences.
    ///
    /// `None` runs without persistence: the list starts empty and no error
    /// is reported until something needs saving.
    pub fn open(storage: Option<SharedStorage>) -> Self {
        let mut store = Self {
            state: HotelState::default(),
            storage,
        };
        store.initialize();
        store
    }

    pub fn state(&self) -> &HotelState {
        &self.state
    }

    pub fn has_storage(&self) -> bool {
        self.storage.is_some()
    }

    fn dispatch(&mut self, action: HotelAction) -> Result<Vec<Effect>, ScoringError> {
        let Transition { state, effects } = hotel_reducer(&self.state, action)?;
        self.state = state;
        Ok(effects)
    }

    fn set_error(&mut self, error: Option<&str>) {
        // SetError never scores, so the reducer cannot fail here.
        if let Err(e) = self.dispatch(HotelAction::SetError(error.map(str::to_string))) {
            log::error!("Unexpected failure while recording error state: {}", e);
        }
    }

    fn persist(&self, effects: &[Effect]) -> Option<Result<(), StorageError>> {
        self.storage
            .as_ref()
            .map(|storage| execute_effects(storage.as_ref(), effects))
    }

    fn initialize(&mut self) {
        let data = match &self.storage {
            Some(storage) => load_initial_data(storage.as_ref()),
            None => InitialData::default(),
        };
        log::info!(
            "Loaded {} saved hotels (mode {}, currency {})",
            data.records.len(),
            data.calculation_mode,
            data.last_used_currency
        );

        if let Err(e) = self.dispatch(HotelAction::Initialize(data)) {
            // Saved records are filtered to positive prices, so this only
            // fires if that filter and the scorer disagree.
            log::error!("Error scoring saved hotels: {}", e);
            let fallback = InitialData {
                load_error: Some(LOAD_FAILED_MESSAGE.to_string()),
                ..InitialData::default()
            };
            if let Err(e) = self.dispatch(HotelAction::Initialize(fallback)) {
                log::error!("Error initializing empty hotel list: {}", e);
            }
        }
    }

    /// Adds a hotel, then appends it to the saved list.
    ///
    /// The hotel stays in memory even when saving fails; the failure is both
    /// recorded in `state().error` and returned so the caller can stay on the
    /// form.
    pub fn add_hotel(&mut self, hotel: HotelRecord) -> Result<(), StoreError> {
        self.set_error(None);
        let currency = hotel.currency.clone();

        let effects = self.dispatch(HotelAction::AddHotel(hotel))?;

        match self.persist(&effects) {
            None => {
                log::error!("Error saving hotel data: local storage is not available");
                self.set_error(Some(STORAGE_UNAVAILABLE_MESSAGE));
                Err(StoreError::StorageUnavailable)
            }
            Some(Err(e)) => {
                log::error!("Error saving hotel data: {}", e);
                self.set_error(Some(SAVE_FAILED_MESSAGE));
                Err(StoreError::Storage(e))
            }
            Some(Ok(())) => {
                self.set_last_used_currency(currency);
                Ok(())
            }
        }
    }

    /// Empties the list. The in-memory reset happens even if the saved list
    /// could not be removed.
    pub fn clear_all_hotels(&mut self) {
        let effects = match self.dispatch(HotelAction::ClearHotels) {
            Ok(effects) => effects,
            Err(e) => {
                log::error!("Error clearing hotel data: {}", e);
                return;
            }
        };

        if let Some(Err(e)) = self.persist(&effects) {
            log::error!("Error clearing hotel data: {}", e);
            self.set_error(Some(CLEAR_FAILED_MESSAGE));
        }
    }

    /// Remembers the currency for the next form. Save failures are logged
    /// only.
    pub fn set_last_used_currency(&mut self, code: impl Into<String>) {
        let effects = match self.dispatch(HotelAction::SetLastUsedCurrency(code.into())) {
            Ok(effects) => effects,
            Err(e) => {
                log::error!("Error saving last used currency: {}", e);
                return;
            }
        };

        if let Some(Err(e)) = self.persist(&effects) {
            log::error!("Error saving last used currency: {}", e);
        }
    }

    /// Switches formula and re-scores the hotels already in memory.
    pub fn set_calculation_mode(&mut self, mode: ValueCalculationMode) {
        let effects = match self.dispatch(HotelAction::SetCalculationMode(mode)) {
            Ok(effects) => effects,
            Err(e) => {
                log::error!("Error re-scoring hotels for mode {}: {}", mode, e);
                return;
            }
        };

        if let Some(Err(e)) = self.persist(&effects) {
            log::error!("Error saving calculation mode: {}", e);
            self.set_error(Some(MODE_SAVE_FAILED_MESSAGE));
        }
    }
}
