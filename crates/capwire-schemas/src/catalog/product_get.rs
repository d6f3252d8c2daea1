//! `product_get` skill schemas
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use super::common;
use crate::schema::{FieldKind, FieldSpec, Schema, SchemaError, StringFormat};

/// Input schema: product identifiers and an optional field selector
pub fn input_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            FieldSpec::array("productIds", FieldSpec::elem(FieldKind::String))
                .required()
                .min_len(1),
        )
        .field(FieldSpec::array("fields", FieldSpec::elem(FieldKind::String)))
        .build()
}

/// Detailed product record; a superset of the search summary
fn product_detail() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("id").required())
        .field(FieldSpec::string("name").required())
        .field(FieldSpec::string("description"))
        .field(FieldSpec::array(
            "images",
            FieldSpec::elem(FieldKind::String).format(StringFormat::Url),
        ))
        .field(FieldSpec::array(
            "offers",
            FieldSpec::elem(FieldKind::Object(Box::new(common::product_offer()?))),
        ))
        .field(FieldSpec::array(
            "variants",
            FieldSpec::elem(FieldKind::Object(Box::new(common::product_variant()?))),
        ))
        .field(FieldSpec::object("reviews", common::product_review_summary()?))
        .field(FieldSpec::array(
            "shipping",
            FieldSpec::elem(FieldKind::Object(Box::new(common::shipping_option()?))),
        ))
        .field(FieldSpec::string("url").format(StringFormat::Url))
        .build()
}

/// Output schema: details aligned with the request order, null for misses
pub fn output_schema() -> Result<Schema, SchemaError> {
    let context = Schema::builder()
        .field(FieldSpec::string("description"))
        .field(FieldSpec::string("lastUpdated").format(StringFormat::Timestamp))
        .build()?;

    Schema::builder()
        .field(
            FieldSpec::array(
                "products",
                FieldSpec::elem(FieldKind::Object(Box::new(product_detail()?))).nullable(),
            )
            .required(),
        )
        .field(FieldSpec::array(
            "notFound",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::object("context", context))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate, ViolationKind};
    use serde_json::json;

    #[test]
    fn test_empty_product_ids_rejected() {
        let schema = input_schema().unwrap();
        let failure = validate(&schema, &json!({"productIds": []})).unwrap_err();
        assert_eq!(failure.violations[0].path, "productIds");
        assert_eq!(failure.violations[0].kind, ViolationKind::Bound);
    }

    #[test]
    fn test_field_selector_passes() {
        let schema = input_schema().unwrap();
        let payload = json!({"productIds": ["ABC123"], "fields": ["offers", "variants"]});
        assert!(validate(&schema, &payload).is_ok());
    }

    #[test]
    fn test_null_slot_for_missing_product() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "products": [
                {"id": "ABC123", "name": "Widget", "url": "https://shop.example.com/p/abc"},
                null,
            ],
            "notFound": ["GONE-1"],
        });
        let normalized = validate(&schema, &payload).unwrap();
        assert_eq!(normalized["products"][1], json!(null));
    }

    #[test]
    fn test_detail_variant_offer_validated_deeply() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "products": [{
                "id": "ABC123",
                "name": "Widget",
                "variants": [{
                    "id": "v1",
                    "offers": [{"identifier": "o1", "price": "banana", "priceCurrency": "USD"}],
                }],
            }],
        });
        let failure = validate(&schema, &payload).unwrap_err();
        assert_eq!(
            failure.violations[0].path,
            "products[0].variants[0].offers[0].price"
        );
        assert_eq!(failure.violations[0].kind, ViolationKind::Format);
    }
}
