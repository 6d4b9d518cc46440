//! Pure state transitions for the hotel store.
//!
//! `hotel_reducer(state, action)` never performs I/O. It returns the next
//! state together with the effects the store must run against storage.

use crate::models::hotel::{Hotel, HotelRecord, ValueCalculationMode};
use crate::services::scoring_service::{
    calculate_value_score, sort_hotels_by_value_score, ScoringError,
};
use crate::store::effects::{Effect, InitialData};
use crate::store::state::HotelState;

#[derive(Debug, Clone, PartialEq)]
pub enum HotelAction {
    /// Seed the store from storage and leave the loading state.
    Initialize(InitialData),
    SetError(Option<String>),
    AddHotel(HotelRecord),
    ClearHotels,
    SetLastUsedCurrency(String),
    SetCalculationMode(ValueCalculationMode),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: HotelState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn pure(state: HotelState) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }
}

fn score_records(
    records: Vec<HotelRecord>,
    mode: ValueCalculationMode,
) -> Result<Vec<Hotel>, ScoringError> {
    records
        .into_iter()
        .map(|record| {
            let score = calculate_value_score(record.rating, record.price, mode)?;
            Ok(record.with_score(score))
        })
        .collect()
}

fn rescore(hotels: &[Hotel], mode: ValueCalculationMode) -> Result<Vec<Hotel>, ScoringError> {
    let records = hotels.iter().map(HotelRecord::from).collect();
    Ok(sort_hotels_by_value_score(&score_records(records, mode)?))
}

pub fn hotel_reducer(state: &HotelState, action: HotelAction) -> Result<Transition, ScoringError> {
    match action {
        HotelAction::Initialize(data) => {
            // Loading ends once; a second initialization is ignored.
            if !state.is_loading {
                return Ok(Transition::pure(state.clone()));
            }
            let scored = score_records(data.records, data.calculation_mode)?;
            Ok(Transition::pure(HotelState {
                hotels: sort_hotels_by_value_score(&scored),
                is_loading: false,
                error: data.load_error,
                last_used_currency: data.last_used_currency,
                calculation_mode: data.calculation_mode,
            }))
        }

        HotelAction::SetError(error) => Ok(Transition::pure(HotelState {
            error,
            ..state.clone()
        })),

        HotelAction::AddHotel(record) => {
            let score = calculate_value_score(record.rating, record.price, state.calculation_mode)?;
            let mut hotels = state.hotels.clone();
            hotels.push(record.clone().with_score(score));

            Ok(Transition {
                state: HotelState {
                    hotels: sort_hotels_by_value_score(&hotels),
                    error: None,
                    ..state.clone()
                },
                effects: vec![Effect::AppendHotelRecord(record)],
            })
        }

        HotelAction::ClearHotels => Ok(Transition {
            state: HotelState {
                hotels: Vec::new(),
                error: None,
                ..state.clone()
            },
            effects: vec![Effect::RemoveHotels],
        }),

        HotelAction::SetLastUsedCurrency(code) => Ok(Transition {
            state: HotelState {
                last_used_currency: code.clone(),
                ..state.clone()
            },
            effects: vec![Effect::SaveLastUsedCurrency(code)],
        }),

        HotelAction::SetCalculationMode(mode) => Ok(Transition {
            state: HotelState {
                hotels: rescore(&state.hotels, mode)?,
                calculation_mode: mode,
                ..state.clone()
            },
            effects: vec![Effect::SaveCalculationMode(mode)],
        }),
    }
}
