//! End-to-end dispatch flows against the full CAP catalogue
//!
//! These tests wire typed handlers into a dispatcher over the sealed
//! catalogue registry and drive whole request/response exchanges, the way
//! an embedding merchant agent would.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use capwire_core::types::{ProductSearchInput, ProductSearchOutput, ProductSummary};
use capwire_core::{Dispatcher, Error, SchemaRegistry, SkillHandler};

/// Search handler that works through the typed wire structs
struct TypedSearchHandler;

#[async_trait]
impl SkillHandler for TypedSearchHandler {
    async fn handle(&self, _skill: &str, input: Value) -> anyhow::Result<Value> {
        let request: ProductSearchInput = serde_json::from_value(input)?;

        // Normalization guarantees the defaults reached us.
        let limit = request.limit.expect("limit defaulted");
        let offset = request.offset.expect("offset defaulted");

        let product = ProductSummary {
            id: "SKU-1".to_string(),
            name: format!("Result for '{}'", request.query),
            description: None,
            image: None,
            offers: None,
            extra: serde_json::Map::new(),
        };
        let response = ProductSearchOutput {
            products: vec![product],
            total_results: 1,
            offset,
            limit,
            context: None,
        };
        Ok(serde_json::to_value(response)?)
    }
}

fn catalogue_dispatcher() -> Dispatcher {
    let registry = Arc::new(SchemaRegistry::with_catalog().unwrap());
    Dispatcher::new(registry).bind("product_search", Arc::new(TypedSearchHandler))
}

#[tokio::test]
async fn test_typed_search_round_trip() {
    let dispatcher = catalogue_dispatcher();
    let output = dispatcher
        .invoke("product_search", json!({"query": "desk mat", "limit": 5}))
        .await
        .unwrap();

    assert_eq!(output["totalResults"], json!(1));
    assert_eq!(output["limit"], json!(5));
    assert_eq!(output["offset"], json!(0));
    assert_eq!(output["products"][0]["name"], json!("Result for 'desk mat'"));
}

#[tokio::test]
async fn test_input_violations_reach_caller_in_order() {
    let dispatcher = catalogue_dispatcher();
    let err = dispatcher
        .invoke(
            "product_search",
            json!({"queryMode": "fuzzy", "limit": 9000}),
        )
        .await
        .unwrap_err();

    match err {
        Error::InputValidation { skill, violations } => {
            assert_eq!(skill, "product_search");
            let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
            assert_eq!(paths, vec!["query", "queryMode", "limit"]);
        }
        other => panic!("expected InputValidation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_handler_contract_breach_is_output_validation() {
    struct SloppyHandler;

    #[async_trait]
    impl SkillHandler for SloppyHandler {
        async fn handle(&self, _skill: &str, _input: Value) -> anyhow::Result<Value> {
            // Price as a float: exactly the kind of drift output
            // validation exists to catch.
            Ok(json!({
                "products": [{
                    "id": "p1",
                    "name": "Widget",
                    "offers": [{"identifier": "o1", "price": 19.99, "priceCurrency": "USD"}],
                }],
                "totalResults": 1,
                "offset": 0,
                "limit": 20,
            }))
        }
    }

    let registry = Arc::new(SchemaRegistry::with_catalog().unwrap());
    let dispatcher = Dispatcher::new(registry).bind("product_search", Arc::new(SloppyHandler));

    let err = dispatcher
        .invoke("product_search", json!({"query": "widget"}))
        .await
        .unwrap_err();
    match err {
        Error::OutputValidation { violations, .. } => {
            assert_eq!(violations[0].path, "products[0].offers[0].price");
        }
        other => panic!("expected OutputValidation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_one_dispatcher_serves_multiple_skills() {
    struct PreferencesHandler;

    #[async_trait]
    impl SkillHandler for PreferencesHandler {
        async fn handle(&self, skill: &str, _input: Value) -> anyhow::Result<Value> {
            assert_eq!(skill, "user_preferences_set");
            Ok(json!({
                "operation": {"success": true},
                "context": {"isNewContext": true, "timestamp": "2025-06-01T12:00:00Z"},
            }))
        }
    }

    let registry = Arc::new(SchemaRegistry::with_catalog().unwrap());
    let dispatcher = Dispatcher::new(registry)
        .bind("product_search", Arc::new(TypedSearchHandler))
        .bind("user_preferences_set", Arc::new(PreferencesHandler));

    dispatcher
        .invoke("product_search", json!({"query": "q"}))
        .await
        .unwrap();
    dispatcher
        .invoke(
            "user_preferences_set",
            json!({"preferences": {"userDataConsent": "none"}}),
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn test_concurrent_invocations_do_not_interfere() {
    let dispatcher = Arc::new(catalogue_dispatcher());

    let mut handles = Vec::new();
    for i in 0..32 {
        let dispatcher = Arc::clone(&dispatcher);
        handles.push(tokio::spawn(async move {
            dispatcher
                .invoke("product_search", json!({"query": format!("query-{i}")}))
                .await
        }));
    }

    for handle in handles {
        let output = handle.await.unwrap().unwrap();
        assert_eq!(output["totalResults"], json!(1));
    }
}

#[tokio::test]
async fn test_cancelled_invocation_reports_cancelled() {
    struct NeverFinishes;

    #[async_trait]
    impl SkillHandler for NeverFinishes {
        async fn handle(&self, _skill: &str, _input: Value) -> anyhow::Result<Value> {
            std::future::pending::<()>().await;
            unreachable!()
        }
    }

    let registry = Arc::new(SchemaRegistry::with_catalog().unwrap());
    let dispatcher = Dispatcher::new(registry).bind("order_status", Arc::new(NeverFinishes));

    let err = dispatcher
        .invoke_with_cancel(
            "order_status",
            json!({"orderIds": ["ORD-1"]}),
            tokio::time::sleep(std::time::Duration::from_millis(10)),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled));
}

#[tokio::test]
async fn test_cancel_does_not_mask_input_validation() {
    let dispatcher = catalogue_dispatcher();

    // Cancellation already resolved, but the input is checked first.
    let err = dispatcher
        .invoke_with_cancel("product_search", json!({}), std::future::ready(()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InputValidation { .. }));
}
