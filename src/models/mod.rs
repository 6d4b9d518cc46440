pub mod currency;
pub mod hotel;
pub mod hotel_form;
