use serde::{Deserialize, Serialize};
use crate::models::domain::SearchResult;

/// Response for the food search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodSearchResponse {
    pub success: bool,
    pub result: SearchResult,
    /// Set when the result was synthesized instead of taken from the model
    pub degraded: bool,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
