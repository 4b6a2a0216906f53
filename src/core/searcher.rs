use crate::core::{
    error::SearchError,
    prompt::build_prompt,
    reconciler::reconcile,
    validation::{validate_request, validate_result},
};
use crate::models::{FoodSearchRequest, GenerationRequest, GenerationSettings, ResultSource, SearchResult};
use crate::services::TextGenerator;

/// Outcome of a successful search
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub result: SearchResult,
    pub source: ResultSource,
}

impl SearchOutcome {
    pub fn degraded(&self) -> bool {
        self.source.is_degraded()
    }
}

/// Food search orchestrator
///
/// # Pipeline Stages
/// 1. Request validation
/// 2. Prompt construction
/// 3. Text generation (the only await point)
/// 4. Reconciliation of the model output
/// 5. Final result validation
#[derive(Debug, Clone)]
pub struct FoodSearcher<G> {
    generator: G,
    settings: GenerationSettings,
}

impl<G: TextGenerator> FoodSearcher<G> {
    pub fn new(generator: G, settings: GenerationSettings) -> Self {
        Self { generator, settings }
    }

    /// Run a food search end to end
    ///
    /// Malformed model output never fails the search; it is absorbed by the
    /// reconciler. Errors are limited to bad input, generator failures and
    /// results that still break the schema after reconciliation.
    pub async fn search(&self, request: &FoodSearchRequest) -> Result<SearchOutcome, SearchError> {
        let criteria = validate_request(request)?;

        tracing::info!(
            "Searching food options in {} (cuisine: {:?}, price: {:?})",
            criteria.location,
            criteria.cuisine,
            criteria.price_range
        );

        let prompt = build_prompt(&criteria);
        let raw = self
            .generator
            .generate(GenerationRequest {
                prompt,
                max_tokens: self.settings.max_tokens,
                temperature: self.settings.temperature,
            })
            .await?;

        let reconciled = reconcile(&raw, &criteria);

        if let Err(e) = validate_result(&reconciled.result) {
            tracing::error!(
                "Reconciled result from {:?} tier violates schema: {}",
                reconciled.source,
                e
            );
            return Err(e);
        }

        tracing::info!(
            "Returning {} food options for {} (source: {:?})",
            reconciled.result.search_results.len(),
            criteria.location,
            reconciled.source
        );

        Ok(SearchOutcome {
            result: reconciled.result,
            source: reconciled.source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AiError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedGenerator {
        text: String,
        calls: AtomicUsize,
    }

    impl CannedGenerator {
        fn new(text: &str) -> Self {
            Self {
                text: text.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl TextGenerator for CannedGenerator {
        async fn generate(&self, request: GenerationRequest) -> Result<String, AiError> {
            assert_eq!(request.max_tokens, 2000);
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.text.clone())
        }
    }

    struct DownGenerator;

    impl TextGenerator for DownGenerator {
        async fn generate(&self, _request: GenerationRequest) -> Result<String, AiError> {
            Err(AiError::Timeout(30))
        }
    }

    #[test]
    fn test_invalid_request_skips_generator() {
        let searcher = FoodSearcher::new(CannedGenerator::new("{}"), GenerationSettings::default());

        let result = tokio_test::block_on(searcher.search(&FoodSearchRequest::default()));

        assert!(matches!(result, Err(SearchError::InvalidRequest(_))));
        assert_eq!(searcher.generator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_model_output_passes_through() {
        let raw = "Here you go: {\"location\":\"Austin, TX\",\"searchResults\":[],\"searchSummary\":\"none found\"}";
        let searcher = FoodSearcher::new(CannedGenerator::new(raw), GenerationSettings::default());

        let outcome = tokio_test::block_on(searcher.search(&FoodSearchRequest::for_location("Austin, TX"))).unwrap();

        assert!(!outcome.degraded());
        assert_eq!(outcome.result.search_summary, "none found");
        assert_eq!(searcher.generator.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unstructured_output_degrades() {
        let searcher = FoodSearcher::new(
            CannedGenerator::new("I couldn't generate this."),
            GenerationSettings::default(),
        );

        let outcome = tokio_test::block_on(searcher.search(&FoodSearchRequest::for_location("Austin, TX"))).unwrap();

        assert!(outcome.degraded());
        assert_eq!(outcome.source, ResultSource::Fallback);
    }

    #[test]
    fn test_out_of_range_rating_is_schema_violation() {
        let raw = r#"{"location":"Austin, TX","searchResults":[{"name":"X","cuisine":"Y","priceRange":"budget","description":"d","address":"a","rating":12}],"searchSummary":"s"}"#;
        let searcher = FoodSearcher::new(CannedGenerator::new(raw), GenerationSettings::default());

        let result = tokio_test::block_on(searcher.search(&FoodSearchRequest::for_location("Austin, TX")));

        assert!(matches!(result, Err(SearchError::SchemaViolation(_))));
    }

    #[test]
    fn test_generator_failure_propagates() {
        let searcher = FoodSearcher::new(DownGenerator, GenerationSettings::default());

        let result = tokio_test::block_on(searcher.search(&FoodSearchRequest::for_location("Austin, TX")));

        assert!(matches!(result, Err(SearchError::AiService(AiError::Timeout(30)))));
    }
}
