use serde::{Deserialize, Serialize};

/// Raw form input, exactly as typed.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HotelFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub rating: String,
    #[serde(default)]
    pub currency: String,
}

/// Per-field messages. An empty string means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    pub name: String,
    pub price: String,
    pub rating: String,
    pub general: String,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && self.price.is_empty()
            && self.rating.is_empty()
            && self.general.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValidation {
    pub errors: ValidationErrors,
    pub is_valid: bool,
}
