//! `cart_manage` skill schemas
//!
//! The input schema is discriminated on `action`. Add, update, and remove
//! each accept either a plural array shape or a singular item shape, never
//! both; valid singular requests are folded into the plural form before
//! they reach a handler.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::json;

use super::common;
use crate::schema::{
    CrossFieldRule, FieldKind, FieldSpec, Rewrite, RuleCheck, Schema, SchemaError, StringFormat,
};

/// Cart operations
pub const CART_ACTIONS: &[&str] = &["view", "add", "update", "remove", "clear"];

/// Input schema: action-discriminated cart mutation request
pub fn input_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::enumeration("action", CART_ACTIONS).required())
        .field(FieldSpec::string("cartId"))
        .field(FieldSpec::array(
            "addItems",
            FieldSpec::elem(FieldKind::Object(Box::new(common::cart_item()?))),
        ))
        .field(FieldSpec::array(
            "updateItems",
            FieldSpec::elem(FieldKind::Object(Box::new(common::cart_item_update()?))),
        ))
        .field(FieldSpec::array(
            "removeItems",
            FieldSpec::elem(FieldKind::Object(Box::new(common::cart_item_reference()?))),
        ))
        .field(FieldSpec::integer("quantity").min(1.0))
        .field(FieldSpec::object("item", common::cart_item_reference()?))
        .field(FieldSpec::boolean("includeProductDetails").default_value(json!(false)))
        .field(FieldSpec::boolean("includeShippingOptions").default_value(json!(false)))
        .field(FieldSpec::boolean("includeTaxCalculations").default_value(json!(false)))
        .discriminant("action")
        .rule(
            CrossFieldRule::new("add_requires_items", RuleCheck::RequiresNonEmpty("addItems"))
                .when("action", "add"),
        )
        .rule(
            CrossFieldRule::new("add_forbids_update_items", RuleCheck::Forbids("updateItems"))
                .when("action", "add"),
        )
        .rule(
            CrossFieldRule::new("add_forbids_remove_items", RuleCheck::Forbids("removeItems"))
                .when("action", "add"),
        )
        .rule(
            CrossFieldRule::new("add_forbids_singular_item", RuleCheck::Forbids("item"))
                .when("action", "add"),
        )
        .rule(
            CrossFieldRule::new("add_forbids_singular_quantity", RuleCheck::Forbids("quantity"))
                .when("action", "add"),
        )
        .rule(
            CrossFieldRule::new(
                "update_shape_exclusive",
                RuleCheck::ExclusiveAlternatives {
                    plural: "updateItems",
                    singular: &["item", "quantity"],
                },
            )
            .when("action", "update"),
        )
        .rule(
            CrossFieldRule::new(
                "remove_shape_exclusive",
                RuleCheck::ExclusiveAlternatives {
                    plural: "removeItems",
                    singular: &["item"],
                },
            )
            .when("action", "remove"),
        )
        .rewrite(Rewrite::FoldSingular {
            when: ("action", "update"),
            singular: "item",
            merge: Some("quantity"),
            plural: "updateItems",
        })
        .rewrite(Rewrite::FoldSingular {
            when: ("action", "remove"),
            singular: "item",
            merge: None,
            plural: "removeItems",
        })
        .build()
}

/// Output schema: operation result, cart state, lines, and totals
pub fn output_schema() -> Result<Schema, SchemaError> {
    let context = Schema::builder()
        .field(FieldSpec::string("description"))
        .field(FieldSpec::string("timestamp").format(StringFormat::Timestamp))
        .field(FieldSpec::boolean("estimatedPricing"))
        .build()?;

    Schema::builder()
        .field(FieldSpec::object("operation", common::cart_operation_result()?).required())
        .field(FieldSpec::object("cart", common::cart_state()?).required())
        .field(
            FieldSpec::array(
                "items",
                FieldSpec::elem(FieldKind::Object(Box::new(common::cart_line_item()?))),
            )
            .required(),
        )
        .field(FieldSpec::object("totals", common::cart_totals()?).required())
        .field(FieldSpec::array(
            "shippingOptions",
            FieldSpec::elem(FieldKind::Object(Box::new(common::shipping_option()?))),
        ))
        .field(FieldSpec::object("context", context))
        .build()
}
