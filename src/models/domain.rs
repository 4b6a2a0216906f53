use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Price tier of an establishment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceRange {
    Budget,
    Moderate,
    Upscale,
}

impl PriceRange {
    pub const ALL: [PriceRange; 3] = [PriceRange::Budget, PriceRange::Moderate, PriceRange::Upscale];

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::Budget => "budget",
            PriceRange::Moderate => "moderate",
            PriceRange::Upscale => "upscale",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = String;

    /// Case-sensitive: "Budget" is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "budget" => Ok(PriceRange::Budget),
            "moderate" => Ok(PriceRange::Moderate),
            "upscale" => Ok(PriceRange::Upscale),
            other => Err(format!(
                "priceRange must be one of: budget, moderate, upscale (got {:?})",
                other
            )),
        }
    }
}

/// Validated search criteria, scoped to a single request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub location: String,
    pub cuisine: Option<String>,
    pub price_range: Option<PriceRange>,
    pub dietary_restrictions: Option<String>,
}

/// One recommended establishment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct FoodOption {
    pub name: String,
    pub cuisine: String,
    #[serde(rename = "priceRange")]
    pub price_range: PriceRange,
    pub description: String,
    pub address: String,
    #[validate(range(min = 1.0, max = 5.0))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(rename = "dietaryOptions", default, skip_serializing_if = "Option::is_none")]
    pub dietary_options: Option<Vec<String>>,
}

/// Full response to a food search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct SearchResult {
    pub location: String,
    #[validate(nested)]
    #[serde(rename = "searchResults")]
    pub search_results: Vec<FoodOption>,
    #[serde(rename = "searchSummary")]
    pub search_summary: String,
}

/// Which reconciliation tier produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultSource {
    /// The model's own JSON survived parsing
    Model,
    /// Standard synthesized defaults
    Fallback,
    /// Single-entry synthesized default
    MinimalFallback,
}

impl ResultSource {
    pub fn is_degraded(&self) -> bool {
        !matches!(self, ResultSource::Model)
    }
}

/// Generation parameters sent with every prompt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationSettings {
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_tokens: 2000,
            temperature: 0.7,
        }
    }
}
