use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use tracing::Instrument;
use crate::core::{FoodSearcher, SearchError};
use crate::models::{ErrorResponse, FoodSearchRequest, FoodSearchResponse, HealthResponse};
use crate::services::TextGenerator;

/// Application state shared across all handlers
pub struct AppState<G> {
    pub searcher: Arc<FoodSearcher<G>>,
}

// Manual impl: cloning the Arc must not require `G: Clone`
impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            searcher: Arc::clone(&self.searcher),
        }
    }
}

/// Configure all food-related routes
pub fn configure<G: TextGenerator + 'static>(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/food/search", web::post().to(search_food::<G>));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Food search endpoint
///
/// POST /api/food/search
///
/// Request body:
/// ```json
/// {
///   "location": "Austin, TX",
///   "cuisine": "Thai",
///   "priceRange": "budget|moderate|upscale",
///   "dietaryRestrictions": "vegan"
/// }
/// ```
async fn search_food<G: TextGenerator + 'static>(
    state: web::Data<AppState<G>>,
    req: web::Json<FoodSearchRequest>,
) -> impl Responder {
    run_search(&state, &req).await
}

/// Run one search inside a `food_search` span keyed by a fresh request id
async fn run_search<G: TextGenerator>(state: &AppState<G>, req: &FoodSearchRequest) -> HttpResponse {
    let request_id = uuid::Uuid::new_v4();
    let span = tracing::info_span!("food_search", %request_id);

    async {
        match state.searcher.search(req).await {
            Ok(outcome) => {
                let degraded = outcome.degraded();
                if degraded {
                    tracing::warn!("Served from {:?}", outcome.source);
                }
                HttpResponse::Ok().json(FoodSearchResponse {
                    success: true,
                    result: outcome.result,
                    degraded,
                })
            }
            Err(e) => {
                match &e {
                    SearchError::InvalidRequest(_) => tracing::info!("Rejected food search: {}", e),
                    SearchError::AiService(_) => tracing::error!("Inference failed: {}", e),
                    SearchError::SchemaViolation(_) => {
                        tracing::error!("Schema violation after reconciliation: {}", e)
                    }
                }
                error_response(&e)
            }
        }
    }
    .instrument(span)
    .await
}

fn error_response(e: &SearchError) -> HttpResponse {
    let status = e.status_code();
    let message = match e {
        SearchError::InvalidRequest(msg) => msg.clone(),
        SearchError::AiService(_) => "Failed to search for food options. Please try again.".to_string(),
        SearchError::SchemaViolation(_) => "Failed to search for food options.".to_string(),
    };

    HttpResponse::build(status).json(ErrorResponse {
        error: e.code().to_string(),
        message,
        status_code: status.as_u16(),
    })
}
