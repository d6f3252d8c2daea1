//! Component schemas shared across skills
//!
//! Products, offers, cart lines, totals, addresses, and tracking records
//! appear in several skills' responses; their schemas are built here once.
//! All of these shapes are open: merchants may attach additional
//! schema.org-style fields, which pass through validation untouched.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use crate::schema::{
    CrossFieldRule, FieldKind, FieldSpec, RuleCheck, Schema, SchemaError, StringFormat,
};

/// Product availability states (schema.org ItemAvailability subset)
pub const PRODUCT_AVAILABILITY: &[&str] = &["inStock", "outOfStock", "preOrder"];

/// Cart line availability adds the limited-stock state
pub const LINE_AVAILABILITY: &[&str] = &["inStock", "outOfStock", "limitedStock", "preOrder"];

fn money_pair(name: &'static str, amount: &'static str, currency: &'static str) -> CrossFieldRule {
    CrossFieldRule::new(name, RuleCheck::MoneyPair { amount, currency })
}

/// Offer attached to a product or variant (schema.org Offer semantics)
pub fn product_offer() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("identifier").required())
        .field(FieldSpec::string("price").format(StringFormat::Decimal))
        .field(FieldSpec::string("priceCurrency").format(StringFormat::Currency))
        .field(FieldSpec::enumeration("availability", PRODUCT_AVAILABILITY))
        // Standard Offer classifications, e.g. urn:cap:StandardOffer:BOGO50
        .field(FieldSpec::one_of(
            "additionalType",
            vec![
                FieldSpec::elem(FieldKind::String).format(StringFormat::Urn),
                FieldSpec::array(
                    "",
                    FieldSpec::elem(FieldKind::String).format(StringFormat::Urn),
                ),
            ],
        ))
        .rule(money_pair("offer_price_pair", "price", "priceCurrency"))
        .build()
}

/// Product summary as returned by search results
pub fn product_summary() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("id").required())
        .field(FieldSpec::string("name").required())
        .field(FieldSpec::string("description"))
        .field(FieldSpec::string("image").format(StringFormat::Url))
        .field(FieldSpec::array(
            "offers",
            FieldSpec::elem(FieldKind::Object(Box::new(product_offer()?))),
        ))
        .build()
}

/// A specific product variant (size, color, configuration)
pub fn product_variant() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("id"))
        .field(FieldSpec::string("name"))
        .field(FieldSpec::array(
            "offers",
            FieldSpec::elem(FieldKind::Object(Box::new(product_offer()?))),
        ))
        .field(FieldSpec::array(
            "images",
            FieldSpec::elem(FieldKind::String).format(StringFormat::Url),
        ))
        .build()
}

/// Aggregated review data (schema.org AggregateRating semantics)
pub fn product_review_summary() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::number("ratingValue"))
        .field(FieldSpec::integer("reviewCount").min(0.0))
        .field(FieldSpec::integer("ratingCount").min(0.0))
        .build()
}

/// One available shipping method with its cost
pub fn shipping_option() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("name").required())
        .field(FieldSpec::string("price").format(StringFormat::Decimal))
        .field(FieldSpec::string("priceCurrency").format(StringFormat::Currency))
        .field(FieldSpec::string("estimatedDelivery"))
        .rule(money_pair("shipping_price_pair", "price", "priceCurrency"))
        .build()
}

/// Tax line in a totals breakdown
pub fn tax_calculation() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("type").required())
        .field(FieldSpec::number("rate").required().min(0.0))
        .field(
            FieldSpec::string("amount")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("currency")
                .required()
                .format(StringFormat::Currency),
        )
        .field(FieldSpec::string("jurisdiction"))
        .rule(money_pair("tax_amount_pair", "amount", "currency"))
        .build()
}

/// Cart or order totals; every amount shares the one currency
pub fn cart_totals() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            FieldSpec::string("subtotal")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("currency")
                .required()
                .format(StringFormat::Currency),
        )
        .field(FieldSpec::string("tax").format(StringFormat::Decimal))
        .field(FieldSpec::string("shipping").format(StringFormat::Decimal))
        .field(FieldSpec::string("discount").format(StringFormat::Decimal))
        .field(
            FieldSpec::string("total")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(FieldSpec::array(
            "taxDetails",
            FieldSpec::elem(FieldKind::Object(Box::new(tax_calculation()?))),
        ))
        .field(FieldSpec::boolean("estimatedTax"))
        .rule(money_pair("subtotal_pair", "subtotal", "currency"))
        .rule(money_pair("tax_pair", "tax", "currency"))
        .rule(money_pair("shipping_pair", "shipping", "currency"))
        .rule(money_pair("discount_pair", "discount", "currency"))
        .rule(money_pair("total_pair", "total", "currency"))
        .build()
}

/// Item a client wants to add to a cart
pub fn cart_item() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("productId").required())
        .field(FieldSpec::string("variantId"))
        .field(FieldSpec::string_map("variantAttributes"))
        .field(FieldSpec::integer("quantity").required().min(1.0))
        .field(FieldSpec::string("clientItemId"))
        .build()
}

fn reference_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::string("cartItemId"),
        FieldSpec::string("clientItemId"),
        FieldSpec::string("productId"),
        FieldSpec::string("variantId"),
        FieldSpec::string_map("variantAttributes"),
    ]
}

const REFERENCE_KEYS: &[&str] = &["cartItemId", "clientItemId", "productId"];

/// Reference to an existing cart line for update/remove operations
pub fn cart_item_reference() -> Result<Schema, SchemaError> {
    let mut builder = Schema::builder();
    for field in reference_fields() {
        builder = builder.field(field);
    }
    builder
        .rule(CrossFieldRule::new(
            "item_reference_required",
            RuleCheck::RequiresAnyOf(REFERENCE_KEYS),
        ))
        .build()
}

/// Cart line reference carrying the new total quantity
pub fn cart_item_update() -> Result<Schema, SchemaError> {
    let mut builder = Schema::builder();
    for field in reference_fields() {
        builder = builder.field(field);
    }
    builder
        .field(FieldSpec::integer("quantity").required().min(1.0))
        .rule(CrossFieldRule::new(
            "item_reference_required",
            RuleCheck::RequiresAnyOf(REFERENCE_KEYS),
        ))
        .build()
}

/// One line of a cart as reported back to the client
pub fn cart_line_item() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("cartItemId").required())
        .field(FieldSpec::string("productId").required())
        .field(FieldSpec::string("productName").required())
        .field(FieldSpec::string("variantId"))
        .field(FieldSpec::string_map("variantAttributes"))
        .field(FieldSpec::string("variantDescription"))
        .field(FieldSpec::integer("quantity").required().min(0.0))
        .field(
            FieldSpec::string("unitPrice")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("priceCurrency")
                .required()
                .format(StringFormat::Currency),
        )
        .field(
            FieldSpec::string("lineTotal")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(FieldSpec::enumeration("availability", LINE_AVAILABILITY))
        .field(FieldSpec::integer("maxQuantity").min(0.0))
        .field(FieldSpec::string("image").format(StringFormat::Url))
        .field(FieldSpec::string("productUrl").format(StringFormat::Url))
        .field(FieldSpec::string("clientItemId"))
        .field(FieldSpec::object("productDetails", product_summary()?))
        .field(FieldSpec::array(
            "warnings",
            FieldSpec::elem(FieldKind::String),
        ))
        .rule(money_pair("unit_price_pair", "unitPrice", "priceCurrency"))
        .rule(money_pair("line_total_pair", "lineTotal", "priceCurrency"))
        .build()
}

/// Cart metadata reported after every operation
pub fn cart_state() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("cartId").required())
        .field(FieldSpec::integer("itemCount").required().min(0.0))
        .field(FieldSpec::string("createdAt").format(StringFormat::Timestamp))
        .field(FieldSpec::string("updatedAt").format(StringFormat::Timestamp))
        .field(FieldSpec::string("expiresAt").format(StringFormat::Timestamp))
        .field(FieldSpec::boolean("readyForCheckout"))
        .field(FieldSpec::array(
            "warnings",
            FieldSpec::elem(FieldKind::String),
        ))
        .build()
}

/// Per-operation success report with item-level failures
pub fn cart_operation_result() -> Result<Schema, SchemaError> {
    let failed_item = Schema::builder()
        .field(FieldSpec::string("item").required())
        .field(FieldSpec::string("reason").required())
        .build()?;
    Schema::builder()
        .field(FieldSpec::boolean("success").required())
        .field(FieldSpec::string("error"))
        .field(FieldSpec::array(
            "successfulItems",
            FieldSpec::elem(FieldKind::String),
        ))
        .field(FieldSpec::array(
            "failedItems",
            FieldSpec::elem(FieldKind::Object(Box::new(failed_item))),
        ))
        .build()
}

/// Carrier tracking details for a shipment
pub fn tracking_info() -> Result<Schema, SchemaError> {
    let event = Schema::builder()
        .field(
            FieldSpec::string("timestamp")
                .required()
                .format(StringFormat::Timestamp),
        )
        .field(FieldSpec::string("status").required())
        .field(FieldSpec::string("location"))
        .field(FieldSpec::string("description").required())
        .build()?;
    Schema::builder()
        .field(FieldSpec::string("trackingNumber").required())
        .field(FieldSpec::string("carrier").required())
        .field(FieldSpec::string("trackingUrl").format(StringFormat::Url))
        .field(
            FieldSpec::enumeration(
                "status",
                &[
                    "label_created",
                    "picked_up",
                    "in_transit",
                    "out_for_delivery",
                    "delivered",
                    "exception",
                ],
            )
            .required(),
        )
        .field(FieldSpec::string("currentLocation"))
        .field(FieldSpec::string("estimatedDelivery").format(StringFormat::Timestamp))
        .field(FieldSpec::string("deliveredAt").format(StringFormat::Timestamp))
        .field(FieldSpec::array(
            "events",
            FieldSpec::elem(FieldKind::Object(Box::new(event))),
        ))
        .build()
}

fn address_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::string("name").required(),
        FieldSpec::string("addressLine1").required(),
        FieldSpec::string("addressLine2"),
        FieldSpec::string("city").required(),
        FieldSpec::string("state").required(),
        FieldSpec::string("postalCode").required(),
        FieldSpec::string("country")
            .required()
            .format(StringFormat::CountryCode),
    ]
}

/// Delivery address with contact details
pub fn shipping_address() -> Result<Schema, SchemaError> {
    let mut builder = Schema::builder();
    for field in address_fields() {
        builder = builder.field(field);
    }
    builder
        .field(FieldSpec::string("phone"))
        .field(FieldSpec::string("instructions"))
        .build()
}

/// Billing address on the payment account
pub fn billing_address() -> Result<Schema, SchemaError> {
    let mut builder = Schema::builder();
    for field in address_fields() {
        builder = builder.field(field);
    }
    builder.build()
}

/// Payment state of an order
pub fn payment_status() -> Result<Schema, SchemaError> {
    let refund = Schema::builder()
        .field(
            FieldSpec::string("amount")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("currency")
                .required()
                .format(StringFormat::Currency),
        )
        .field(FieldSpec::string("reason"))
        .field(
            FieldSpec::string("refundedAt")
                .required()
                .format(StringFormat::Timestamp),
        )
        .rule(money_pair("refund_amount_pair", "amount", "currency"))
        .build()?;
    Schema::builder()
        .field(
            FieldSpec::enumeration(
                "status",
                &[
                    "pending",
                    "processing",
                    "completed",
                    "failed",
                    "refunded",
                    "partially_refunded",
                ],
            )
            .required(),
        )
        .field(FieldSpec::string("method"))
        .field(FieldSpec::string("processor"))
        .field(FieldSpec::string("amount").format(StringFormat::Decimal))
        .field(FieldSpec::string("currency").format(StringFormat::Currency))
        .field(FieldSpec::string("paidAt").format(StringFormat::Timestamp))
        .field(FieldSpec::object("refund", refund))
        .field(FieldSpec::string("transactionId"))
        .rule(money_pair("payment_amount_pair", "amount", "currency"))
        .build()
}
