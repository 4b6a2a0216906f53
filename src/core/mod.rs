// Core pipeline exports
pub mod error;
pub mod prompt;
pub mod reconciler;
pub mod searcher;
pub mod validation;

pub use error::SearchError;
pub use prompt::build_prompt;
pub use reconciler::{reconcile, extract_json_object, parse_candidate, synthesize_default, FallbackFlavor, Reconciled, ReconciliationOutcome};
pub use searcher::{FoodSearcher, SearchOutcome};
pub use validation::{validate_request, validate_result};
