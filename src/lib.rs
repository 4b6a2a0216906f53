//! Food Scout - AI-backed food recommendation service
//!
//! This library turns a structured food search into schema-checked restaurant
//! recommendations. Content comes from an external text-generation model; its
//! output is reconciled into a strict result shape with layered fallbacks.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{FoodSearcher, SearchError, SearchOutcome, build_prompt, reconcile, validate_request, validate_result};
pub use models::{SearchCriteria, FoodOption, SearchResult, PriceRange, FoodSearchRequest, FoodSearchResponse};
pub use services::{AiClient, AiError, TextGenerator};
