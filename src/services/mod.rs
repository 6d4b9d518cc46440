pub mod formatting_service;
pub mod scoring_service;
pub mod validation_service;
