use validator::Validate;
use crate::core::error::SearchError;
use crate::models::{FoodSearchRequest, PriceRange, SearchCriteria, SearchResult};

/// Turn a raw request into validated search criteria
///
/// Runs before any inference call so bad input never costs a model invocation.
pub fn validate_request(request: &FoodSearchRequest) -> Result<SearchCriteria, SearchError> {
    request
        .validate()
        .map_err(|errors| SearchError::InvalidRequest(errors.to_string()))?;

    let location = match request.location.as_deref() {
        Some(location) if !location.is_empty() => location.to_string(),
        _ => return Err(SearchError::InvalidRequest("location must not be empty".to_string())),
    };

    let price_range = match non_blank(&request.price_range) {
        Some(value) => Some(value.parse::<PriceRange>().map_err(SearchError::InvalidRequest)?),
        None => None,
    };

    Ok(SearchCriteria {
        location,
        cuisine: non_blank(&request.cuisine).map(str::to_string),
        price_range,
        dietary_restrictions: non_blank(&request.dietary_restrictions).map(str::to_string),
    })
}

/// Whitespace-only text counts as absent
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Authoritative schema check on a reconciled result
pub fn validate_result(result: &SearchResult) -> Result<(), SearchError> {
    result
        .validate()
        .map_err(|errors| SearchError::SchemaViolation(errors.to_string()))
}
