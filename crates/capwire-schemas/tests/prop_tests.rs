//! Property-based tests for schema validation
//!
//! These tests verify invariants of the validation engine across a wide
//! range of generated payloads: normalization is a fixpoint, defaults
//! never introduce violations, and the limit ceiling always rejects.

use capwire_schemas::catalog::{cart_manage, product_search};
use capwire_schemas::validation::{validate, ViolationKind};
use proptest::prelude::*;
use serde_json::{json, Value};

/// Strategy for random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,30}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 12, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::hash_map("[a-z][a-zA-Z0-9_]{0,12}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

/// Strategy for well-formed product_search inputs
fn valid_search_input_strategy() -> impl Strategy<Value = Value> {
    (
        "[a-zA-Z0-9 ]{1,40}",
        proptest::option::of(prop_oneof![Just("keyword"), Just("phrase")]),
        proptest::option::of(0u64..10_000),
        proptest::option::of(1u64..=100),
    )
        .prop_map(|(query, mode, offset, limit)| {
            let mut payload = json!({ "query": query });
            if let Some(mode) = mode {
                payload["queryMode"] = json!(mode);
            }
            if let Some(offset) = offset {
                payload["offset"] = json!(offset);
            }
            if let Some(limit) = limit {
                payload["limit"] = json!(limit);
            }
            payload
        })
}

proptest! {
    /// Any well-formed input validates, and normalizing twice changes nothing
    #[test]
    fn prop_normalization_fixpoint(payload in valid_search_input_strategy()) {
        let schema = product_search::input_schema().unwrap();
        let normalized = validate(&schema, &payload).unwrap();
        let again = validate(&schema, &normalized).unwrap();
        prop_assert_eq!(normalized, again);
    }

    /// Applying defaults never introduces a violation
    #[test]
    fn prop_defaults_never_violate(query in "[a-zA-Z0-9 ]{1,40}") {
        let schema = product_search::input_schema().unwrap();
        let normalized = validate(&schema, &json!({"query": query})).unwrap();
        prop_assert_eq!(&normalized["queryMode"], &json!("keyword"));
        prop_assert_eq!(&normalized["offset"], &json!(0));
        prop_assert_eq!(&normalized["limit"], &json!(20));
    }

    /// The limit ceiling is a rejection, never a silent clamp
    #[test]
    fn prop_limit_over_100_always_rejected(limit in 101u64..1_000_000) {
        let schema = product_search::input_schema().unwrap();
        let failure = validate(&schema, &json!({"query": "q", "limit": limit})).unwrap_err();
        prop_assert!(failure
            .violations
            .iter()
            .any(|v| v.path == "limit" && v.kind == ViolationKind::Bound));
    }

    /// Unknown fields of any shape pass through normalization verbatim
    #[test]
    fn prop_unknown_fields_preserved(extra in json_value_strategy()) {
        let schema = product_search::input_schema().unwrap();
        let payload = json!({"query": "q", "merchantExtension": extra});
        let normalized = validate(&schema, &payload).unwrap();
        prop_assert_eq!(&normalized["merchantExtension"], &payload["merchantExtension"]);
    }

    /// Validation never panics on arbitrary JSON, it reports violations
    #[test]
    fn prop_arbitrary_payloads_never_panic(payload in json_value_strategy()) {
        let schema = cart_manage::input_schema().unwrap();
        let _ = validate(&schema, &payload);
    }

    /// A valid singular update always folds to a single-element plural array
    #[test]
    fn prop_singular_update_folds(quantity in 1u64..1_000) {
        let schema = cart_manage::input_schema().unwrap();
        let payload = json!({
            "action": "update",
            "item": {"cartItemId": "c1"},
            "quantity": quantity,
        });
        let normalized = validate(&schema, &payload).unwrap();
        prop_assert_eq!(
            &normalized["updateItems"],
            &json!([{"cartItemId": "c1", "quantity": quantity}])
        );
        prop_assert!(normalized.get("item").is_none());
    }
}
