// Unit tests for Food Scout

use food_scout::core::{
    prompt::build_prompt,
    reconciler::{extract_json_object, parse_candidate, reconcile, synthesize_default, FallbackFlavor, ReconciliationOutcome},
    validation::{validate_request, validate_result},
    SearchError,
};
use food_scout::models::{FoodOption, FoodSearchRequest, PriceRange, ResultSource, SearchCriteria, SearchResult};

fn criteria(location: &str) -> SearchCriteria {
    validate_request(&FoodSearchRequest::for_location(location)).unwrap()
}

fn food_option(rating: Option<f64>) -> FoodOption {
    FoodOption {
        name: "Franklin Barbecue".to_string(),
        cuisine: "Barbecue".to_string(),
        price_range: PriceRange::Moderate,
        description: "Brisket worth the queue".to_string(),
        address: "900 E 11th St, Austin, TX".to_string(),
        rating,
        dietary_options: None,
    }
}

#[test]
fn test_empty_location_always_rejected() {
    for request in [
        FoodSearchRequest::default(),
        FoodSearchRequest::for_location(""),
        FoodSearchRequest {
            cuisine: Some("Thai".to_string()),
            price_range: Some("budget".to_string()),
            ..FoodSearchRequest::for_location("")
        },
    ] {
        assert!(matches!(validate_request(&request), Err(SearchError::InvalidRequest(_))));
    }
}

#[test]
fn test_non_empty_location_accepted() {
    for location in ["Austin, TX", "Paris", "東京", "10001", "   "] {
        assert!(validate_request(&FoodSearchRequest::for_location(location)).is_ok());
    }
}

#[test]
fn test_every_price_tier_accepted() {
    for tier in PriceRange::ALL {
        let request = FoodSearchRequest {
            price_range: Some(tier.to_string()),
            ..FoodSearchRequest::for_location("Austin, TX")
        };
        assert_eq!(validate_request(&request).unwrap().price_range, Some(tier));
    }
}

#[test]
fn test_prompt_for_location_only() {
    let prompt = build_prompt(&criteria("Austin, TX"));

    assert!(prompt.contains("Austin, TX"));
    assert!(prompt.contains("Cuisine: Any"));
    assert!(prompt.contains("Price Range: Any"));
    assert!(prompt.contains("Dietary Restrictions: None"));
}

#[test]
fn test_model_result_round_trips_through_validator() {
    let raw = r#"Results: {"location":"Austin, TX","searchResults":[{"name":"Franklin Barbecue","cuisine":"Barbecue","priceRange":"moderate","description":"Brisket","address":"900 E 11th St, Austin, TX","rating":5,"dietaryOptions":["gluten-free"]}],"searchSummary":"Barbecue."}"#;

    let reconciled = reconcile(raw, &criteria("Austin, TX"));

    assert_eq!(reconciled.source, ResultSource::Model);
    assert!(validate_result(&reconciled.result).is_ok());

    let reparsed: SearchResult =
        serde_json::from_str(extract_json_object(raw).unwrap()).unwrap();
    assert_eq!(reconciled.result, reparsed);
}

#[test]
fn test_parse_candidate_reports_missing_fields() {
    match parse_candidate(r#"{"location": "Austin, TX"}"#) {
        ReconciliationOutcome::Failed(reason) => assert!(reason.contains("searchResults")),
        other => panic!("expected failure, got {:?}", other),
    }
}

#[test]
fn test_non_json_output_falls_back_with_location() {
    let reconciled = reconcile("I couldn't generate this.", &criteria("Austin, TX"));

    assert!(reconciled.source.is_degraded());
    assert!(!reconciled.result.search_results.is_empty());
    assert!(reconciled
        .result
        .search_results
        .iter()
        .all(|o| o.address.contains("Austin, TX")));
}

#[test]
fn test_empty_model_text_falls_back() {
    let reconciled = reconcile("", &criteria("Austin, TX"));
    assert_eq!(reconciled.source, ResultSource::Fallback);
}

#[test]
fn test_minimal_fallback_idempotent() {
    let c = SearchCriteria {
        location: "Austin, TX".to_string(),
        cuisine: Some("Thai".to_string()),
        price_range: Some(PriceRange::Budget),
        dietary_restrictions: Some("vegan".to_string()),
    };

    let a = serde_json::to_vec(&synthesize_default(&c, FallbackFlavor::Minimal)).unwrap();
    let b = serde_json::to_vec(&synthesize_default(&c, FallbackFlavor::Minimal)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_minimal_fallback_echoes_criteria() {
    let c = SearchCriteria {
        location: "Austin, TX".to_string(),
        cuisine: Some("Thai".to_string()),
        price_range: Some(PriceRange::Budget),
        dietary_restrictions: Some("vegan".to_string()),
    };

    let result = synthesize_default(&c, FallbackFlavor::Minimal);
    let only = &result.search_results[0];

    assert_eq!(result.location, "Austin, TX");
    assert_eq!(only.cuisine, "Thai");
    assert_eq!(only.price_range, PriceRange::Budget);
    assert_eq!(only.dietary_options, Some(vec!["vegan".to_string()]));
    assert!(only.address.contains("Austin, TX"));
}

#[test]
fn test_rating_boundaries() {
    let with = |rating| SearchResult {
        location: "Austin, TX".to_string(),
        search_results: vec![food_option(Some(rating))],
        search_summary: "s".to_string(),
    };

    assert!(validate_result(&with(1.0)).is_ok());
    assert!(validate_result(&with(5.0)).is_ok());
    assert!(matches!(validate_result(&with(0.99)), Err(SearchError::SchemaViolation(_))));
    assert!(matches!(validate_result(&with(5.01)), Err(SearchError::SchemaViolation(_))));
}

#[test]
fn test_rating_twelve_parses_but_fails_validation() {
    let raw = r#"{"location":"Austin, TX","searchResults":[{"name":"X","cuisine":"Y","priceRange":"budget","description":"d","address":"a","rating":12}],"searchSummary":"s"}"#;

    let reconciled = reconcile(raw, &criteria("Austin, TX"));

    assert_eq!(reconciled.source, ResultSource::Model);
    assert!(matches!(
        validate_result(&reconciled.result),
        Err(SearchError::SchemaViolation(_))
    ));
}
