//! `product_search` skill schemas
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::json;

use super::common;
use crate::schema::{FieldKind, FieldSpec, Schema, SchemaError};

/// Query modes a merchant agent must interpret; `keyword` is the default
pub const QUERY_MODES: &[&str] = &["keyword", "phrase"];

/// Pagination ceiling: requests beyond it are rejected, never truncated,
/// so clients keep control of their pagination semantics.
pub const MAX_LIMIT: f64 = 100.0;

/// Input schema: query, mode, filter, and pagination
pub fn input_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("query").required())
        .field(FieldSpec::enumeration("queryMode", QUERY_MODES).default_value(json!("keyword")))
        .field(FieldSpec::string("filter"))
        .field(FieldSpec::integer("offset").min(0.0).default_value(json!(0)))
        .field(
            FieldSpec::integer("limit")
                .min(1.0)
                .max(MAX_LIMIT)
                .default_value(json!(20)),
        )
        .build()
}

/// Output schema: product summaries plus pagination echoes and LLM context
pub fn output_schema() -> Result<Schema, SchemaError> {
    // refineFilters entries are [attribute, valueType, description] triples
    let refine_filter = FieldSpec::elem(FieldKind::Array(Box::new(FieldSpec::elem(
        FieldKind::String,
    ))))
    .min_len(3)
    .max_len(3);

    let context = Schema::builder()
        .field(FieldSpec::string("description"))
        .field(FieldSpec::array("refineFilters", refine_filter))
        .build()?;

    Schema::builder()
        .field(
            FieldSpec::array(
                "products",
                FieldSpec::elem(FieldKind::Object(Box::new(common::product_summary()?))),
            )
            .required(),
        )
        .field(FieldSpec::integer("totalResults").required().min(0.0))
        .field(FieldSpec::integer("offset").required().min(0.0))
        .field(FieldSpec::integer("limit").required().min(0.0))
        .field(FieldSpec::object("context", context))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, ViolationKind};
    use serde_json::json;

    #[test]
    fn test_minimal_input_gets_defaults() {
        let schema = input_schema().unwrap();
        let normalized = validate(&schema, &json!({"query": "wireless headphones"})).unwrap();
        assert_eq!(normalized["queryMode"], json!("keyword"));
        assert_eq!(normalized["offset"], json!(0));
        assert_eq!(normalized["limit"], json!(20));
    }

    #[test]
    fn test_limit_ceiling_is_a_violation() {
        let schema = input_schema().unwrap();
        let failure = validate(&schema, &json!({"query": "tv", "limit": 101})).unwrap_err();
        assert_eq!(failure.violations.len(), 1);
        assert_eq!(failure.violations[0].path, "limit");
        assert_eq!(failure.violations[0].kind, ViolationKind::Bound);
    }

    #[test]
    fn test_limit_100_is_accepted() {
        let schema = input_schema().unwrap();
        let normalized = validate(&schema, &json!({"query": "tv", "limit": 100})).unwrap();
        assert_eq!(normalized["limit"], json!(100));
    }

    #[test]
    fn test_output_requires_pagination_echoes() {
        let schema = output_schema().unwrap();
        let failure = validate(&schema, &json!({"products": []})).unwrap_err();
        let paths: Vec<_> = failure.violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["totalResults", "offset", "limit"]);
    }

    #[test]
    fn test_output_with_products_and_context() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "products": [{
                "id": "SKU-1",
                "name": "Noise-cancelling headphones",
                "offers": [{"identifier": "o1", "price": "199.00", "priceCurrency": "USD"}],
                "brand": "Acme",
            }],
            "totalResults": 1,
            "offset": 0,
            "limit": 20,
            "context": {
                "description": "One strong match",
                "refineFilters": [["price", "range", "Price in USD"]],
            },
        });
        let normalized = validate(&schema, &payload).unwrap();
        // Merchant extension fields survive normalization verbatim.
        assert_eq!(normalized["products"][0]["brand"], json!("Acme"));
    }

    #[test]
    fn test_refine_filter_triples_are_exactly_three() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "products": [],
            "totalResults": 0,
            "offset": 0,
            "limit": 20,
            "context": {"refineFilters": [["price", "range"]]},
        });
        let failure = validate(&schema, &payload).unwrap_err();
        assert_eq!(failure.violations[0].path, "context.refineFilters[0]");
        assert_eq!(failure.violations[0].kind, ViolationKind::Bound);
    }
}
