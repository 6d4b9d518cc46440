use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_CURRENCY: &str = "USD";

/// A lodging offer held in memory. `value_score` is always set once the
/// hotel has passed through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_score: Option<f64>,
}

impl Hotel {
    /// Score used for ranking. An unscored hotel ranks as zero.
    pub fn ranking_score(&self) -> f64 {
        self.value_score.unwrap_or(0.0)
    }
}

/// The shape written to storage and accepted by `add_hotel`. Scores are
/// derived data and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelRecord {
    pub name: String,
    pub price: f64,
    pub rating: f64,
    pub currency: String,
}

impl HotelRecord {
    pub fn with_score(self, value_score: f64) -> Hotel {
        Hotel {
            name: self.name,
            price: self.price,
            rating: self.rating,
            currency: self.currency,
            value_score: Some(value_score),
        }
    }
}

impl From<&Hotel> for HotelRecord {
    fn from(hotel: &Hotel) -> Self {
        Self {
            name: hotel.name.clone(),
            price: hotel.price,
            rating: hotel.rating,
            currency: hotel.currency.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HotelStatistics {
    pub count: usize,
    pub top_score: f64,
    pub lowest_price: f64,
    pub highest_rating: f64,
}

/// Formula used to turn (rating, price) into a value score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueCalculationMode {
    /// rating / price
    StrictBudget,
    /// rating² / price
    #[default]
    Balanced,
    /// rating / ln(max(price, 1.1))
    QualityFirst,
}

impl ValueCalculationMode {
    pub const ALL: [ValueCalculationMode; 3] = [
        ValueCalculationMode::StrictBudget,
        ValueCalculationMode::Balanced,
        ValueCalculationMode::QualityFirst,
    ];

    /// Storage and wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueCalculationMode::StrictBudget => "STRICT_BUDGET",
            ValueCalculationMode::Balanced => "BALANCED",
            ValueCalculationMode::QualityFirst => "QUALITY_FIRST",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ValueCalculationMode::StrictBudget => "Strict Budget",
            ValueCalculationMode::Balanced => "Balanced",
            ValueCalculationMode::QualityFirst => "Quality First",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ValueCalculationMode::StrictBudget => {
                "Rating divided by price. Cheapest acceptable stay wins."
            }
            ValueCalculationMode::Balanced => {
                "Squared rating divided by price. Good ratings count for more as prices rise."
            }
            ValueCalculationMode::QualityFirst => {
                "Rating divided by the log of price. Price matters, but only a little."
            }
        }
    }
}

impl fmt::Display for ValueCalculationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown calculation mode: {0}")]
pub struct UnknownModeError(pub String);

impl FromStr for ValueCalculationMode {
    type Err = UnknownModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ValueCalculationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| UnknownModeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_its_storage_name() {
        for mode in ValueCalculationMode::ALL {
            assert_eq!(mode.as_str().parse::<ValueCalculationMode>(), Ok(mode));
        }
        assert!("balanced".parse::<ValueCalculationMode>().is_err());
    }

    #[test]
    fn mode_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ValueCalculationMode::QualityFirst).unwrap();
        assert_eq!(json, "\"QUALITY_FIRST\"");
    }

    #[test]
    fn unscored_hotel_ranks_as_zero_and_omits_score_on_the_wire() {
        let hotel = Hotel {
            name: "Ryokan".to_string(),
            price: 120.0,
            rating: 9.0,
            currency: "JPY".to_string(),
            value_score: None,
        };
        assert_eq!(hotel.ranking_score(), 0.0);

        let json = serde_json::to_value(&hotel).unwrap();
        assert!(json.get("valueScore").is_none());
    }

    #[test]
    fn record_drops_score() {
        let hotel = HotelRecord {
            name: "Grand Hotel".to_string(),
            price: 150.0,
            rating: 8.5,
            currency: "USD".to_string(),
        }
        .with_score(0.4817);

        let record = HotelRecord::from(&hotel);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Grand Hotel",
                "price": 150.0,
                "rating": 8.5,
                "currency": "USD"
            })
        );
    }
}
