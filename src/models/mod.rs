// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{PriceRange, SearchCriteria, FoodOption, SearchResult, ResultSource, GenerationSettings};
pub use requests::{FoodSearchRequest, GenerationRequest};
pub use responses::{FoodSearchResponse, HealthResponse, ErrorResponse};
