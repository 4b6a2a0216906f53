//! Reconciliation of untrusted model output into a [`SearchResult`].
//!
//! The model is treated as a best-effort text generator. Tiers, in order:
//! 1. Locate a JSON object in the raw text
//! 2. Parse it into the result structure
//! 3. Otherwise synthesize standard defaults from the criteria
//! 4. If those fail their own check, synthesize a single minimal entry
//!
//! Reconciliation never fails; numeric range checks are left to
//! [`validate_result`], which runs after it.

use crate::core::validation::validate_result;
use crate::models::{FoodOption, PriceRange, ResultSource, SearchCriteria, SearchResult};

/// Result of trying to take the model's output at face value
#[derive(Debug, Clone, PartialEq)]
pub enum ReconciliationOutcome {
    Validated(SearchResult),
    Failed(String),
}

/// How much of a default to synthesize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackFlavor {
    /// A handful of plausible entries
    Standard,
    /// One entry echoing only the criteria
    Minimal,
}

/// Reconciled result along with the tier that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciled {
    pub result: SearchResult,
    pub source: ResultSource,
}

/// Locate the candidate JSON object in free text
///
/// Spans from the first `{` to the last `}`. Braces are not balanced, so
/// output with several separate JSON-like blocks yields a span that covers
/// all of them and will usually fail to parse.
pub fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    (end > start).then(|| &raw[start..=end])
}

/// Structural parse of a candidate object: field presence, types and price tiers
pub fn parse_candidate(candidate: &str) -> ReconciliationOutcome {
    match serde_json::from_str::<SearchResult>(candidate) {
        Ok(result) => ReconciliationOutcome::Validated(result),
        Err(e) => ReconciliationOutcome::Failed(e.to_string()),
    }
}

/// Reconcile raw model text into a structurally valid result
pub fn reconcile(raw: &str, criteria: &SearchCriteria) -> Reconciled {
    match extract_json_object(raw) {
        Some(candidate) => match parse_candidate(candidate) {
            ReconciliationOutcome::Validated(result) => {
                tracing::debug!(
                    "Model output parsed with {} results",
                    result.search_results.len()
                );
                return Reconciled {
                    result,
                    source: ResultSource::Model,
                };
            }
            ReconciliationOutcome::Failed(reason) => {
                tracing::warn!("Model output did not match result schema, using fallback: {}", reason);
            }
        },
        None => {
            tracing::warn!(
                "No JSON object in model output ({} chars), using fallback",
                raw.len()
            );
        }
    }

    let standard = synthesize_default(criteria, FallbackFlavor::Standard);
    match validate_result(&standard) {
        Ok(()) => Reconciled {
            result: standard,
            source: ResultSource::Fallback,
        },
        Err(e) => {
            tracing::error!("Standard fallback failed validation, using minimal fallback: {}", e);
            Reconciled {
                result: synthesize_default(criteria, FallbackFlavor::Minimal),
                source: ResultSource::MinimalFallback,
            }
        }
    }
}

/// Build a safe default result from the caller's criteria
///
/// Deterministic: identical criteria give identical output.
pub fn synthesize_default(criteria: &SearchCriteria, flavor: FallbackFlavor) -> SearchResult {
    let location = criteria.location.as_str();
    let price_range = criteria.price_range.unwrap_or(PriceRange::Moderate);
    let dietary_options = match &criteria.dietary_restrictions {
        Some(restrictions) => vec![restrictions.clone()],
        None => vec!["vegetarian-friendly".to_string()],
    };

    match flavor {
        FallbackFlavor::Standard => SearchResult {
            location: location.to_string(),
            search_results: vec![
                FoodOption {
                    name: "Local Cafe".to_string(),
                    cuisine: criteria.cuisine.clone().unwrap_or_else(|| "American".to_string()),
                    price_range,
                    description: "A cozy neighbourhood cafe cooking with fresh, local ingredients".to_string(),
                    address: format!("123 Main St, {}", location),
                    rating: Some(4.2),
                    dietary_options: Some(dietary_options),
                },
                FoodOption {
                    name: "Pizza Corner".to_string(),
                    cuisine: "Italian".to_string(),
                    price_range: PriceRange::Budget,
                    description: "Traditional pizza with fresh toppings".to_string(),
                    address: format!("456 Oak Ave, {}", location),
                    rating: Some(4.0),
                    dietary_options: Some(vec!["vegetarian".to_string(), "vegan options".to_string()]),
                },
                FoodOption {
                    name: "Sushi Garden".to_string(),
                    cuisine: "Japanese".to_string(),
                    price_range: PriceRange::Moderate,
                    description: "Fresh sushi and Japanese dishes in a modern setting".to_string(),
                    address: format!("789 Pine St, {}", location),
                    rating: Some(4.5),
                    dietary_options: Some(vec!["gluten-free options".to_string()]),
                },
            ],
            search_summary: format!(
                "Found several food options in {}, mixing local favourites and a range of cuisines.",
                location
            ),
        },
        FallbackFlavor::Minimal => SearchResult {
            location: location.to_string(),
            search_results: vec![FoodOption {
                name: "Downtown Bistro".to_string(),
                cuisine: criteria.cuisine.clone().unwrap_or_else(|| "Contemporary".to_string()),
                price_range,
                description: "Bistro serving seasonal dishes".to_string(),
                address: format!("100 Center St, {}", location),
                rating: Some(4.3),
                dietary_options: Some(dietary_options),
            }],
            search_summary: format!("Found food options in {} that match your preferences.", location),
        },
    }
}
