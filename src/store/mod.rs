//! Hotel list state: a pure reducer, the effects it asks for, and the
//! [`HotelStore`] that ties them to a storage backend.

pub mod effects;
pub mod reducer;
pub mod state;

mod hotel_store;

pub use hotel_store::{HotelStore, StoreError};
pub use reducer::{hotel_reducer, HotelAction, Transition};
pub use state::HotelState;
