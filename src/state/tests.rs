use super::*;
use serde_json::json;

#[test]
fn search_parameters_serialize_with_service_field_names() {
    let parameters = SearchParameters::new("products")
        .with_query("tote bag")
        .with_page(2)
        .with_page_size(Some(24));

    let value = serde_json::to_value(&parameters).unwrap();
    assert_eq!(
        value,
        json!({
            "index": "products",
            "query": "tote bag",
            "page": 2,
            "hitsPerPage": 24,
        })
    );
}

#[test]
fn search_parameters_default_fields_deserialize_when_absent() {
    let parameters: SearchParameters = serde_json::from_value(json!({
        "index": "products",
    }))
    .unwrap();

    assert_eq!(parameters.index, "products");
    assert_eq!(parameters.query, "");
    assert_eq!(parameters.page, 0);
    assert_eq!(parameters.hits_per_page, None);
}

#[test]
fn with_page_size_leaves_the_source_untouched() {
    let base = SearchParameters::new("products").with_page_size(Some(12));
    let derived = base.clone().with_page_size(None);

    assert_eq!(base.hits_per_page, Some(12));
    assert_eq!(derived.hits_per_page, None);
}

#[test]
fn search_results_deserialize_from_a_service_response() {
    let results: SearchResults = serde_json::from_value(json!({
        "query": "tote bag",
        "totalHits": 57,
        "processingTimeMS": 3,
        "page": 0,
        "exhaustiveNbHits": true,
    }))
    .unwrap();

    assert_eq!(results.query, "tote bag");
    assert_eq!(results.total_hits, 57);
    assert_eq!(results.processing_time_ms, 3);
    assert!(!results.has_no_results());
}

#[test]
fn index_ui_state_omits_unset_fields() {
    let state = IndexUiState {
        hits_per_page: Some(12),
        ..IndexUiState::default()
    };

    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(value, json!({ "hitsPerPage": 12 }));

    let empty = serde_json::to_value(IndexUiState::default()).unwrap();
    assert_eq!(empty, json!({}));
}

#[test]
fn ui_state_serializes_as_a_map_keyed_by_index() {
    let ui_state = UiState::for_index(
        "products",
        IndexUiState {
            query: Some("tote bag".to_owned()),
            hits_per_page: Some(12),
            ..IndexUiState::default()
        },
    );

    let value = serde_json::to_value(&ui_state).unwrap();
    assert_eq!(
        value,
        json!({
            "products": { "query": "tote bag", "hitsPerPage": 12 },
        })
    );
}

#[test]
fn ui_state_round_trips_routed_json() {
    let ui_state: UiState = serde_json::from_value(json!({
        "products": { "query": "tote bag", "page": 2, "hitsPerPage": 24 },
    }))
    .unwrap();

    assert_eq!(ui_state.len(), 1);
    assert!(!ui_state.is_empty());
    let names: Vec<&str> = ui_state.iter().map(|(name, _)| name).collect();
    assert_eq!(names, ["products"]);

    let index_state = ui_state.get("products").unwrap();
    assert_eq!(index_state.query.as_deref(), Some("tote bag"));
    assert_eq!(index_state.page, Some(2));
    assert_eq!(index_state.hits_per_page, Some(24));
}
