use serde::{Deserialize, Serialize};
use validator::Validate;

/// Raw food search request as received over HTTP
///
/// Fields are kept loose here so that missing or malformed criteria
/// surface as descriptive validation errors rather than extractor failures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FoodSearchRequest {
    #[validate(
        required(message = "location is required"),
        length(min = 1, message = "location must not be empty")
    )]
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default, alias = "price_range", rename = "priceRange")]
    pub price_range: Option<String>,
    #[serde(default, alias = "dietary_restrictions", rename = "dietaryRestrictions")]
    pub dietary_restrictions: Option<String>,
}

impl FoodSearchRequest {
    pub fn for_location(location: impl Into<String>) -> Self {
        Self {
            location: Some(location.into()),
            ..Self::default()
        }
    }
}

/// Body sent to the text-generation service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}
