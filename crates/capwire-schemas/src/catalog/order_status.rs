//! `order_status` skill schemas
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::json;

use super::common;
use crate::schema::{FieldKind, FieldSpec, Schema, SchemaError, StringFormat};

/// Order lifecycle states
pub const ORDER_STATUSES: &[&str] = &[
    "pending_payment",
    "payment_processing",
    "confirmed",
    "processing",
    "shipped",
    "out_for_delivery",
    "delivered",
    "failed",
    "cancelled",
    "returned",
    "refunded",
];

/// Per-item fulfillment states (partial shipments)
pub const ORDER_ITEM_STATUSES: &[&str] = &[
    "pending",
    "processing",
    "shipped",
    "delivered",
    "cancelled",
    "returned",
];

/// Order timeline event types
pub const ORDER_EVENT_TYPES: &[&str] = &[
    "created",
    "payment_completed",
    "confirmed",
    "shipped",
    "delivered",
    "cancelled",
    "returned",
    "refunded",
    "updated",
];

/// Input schema: order identifiers plus response-shaping include flags
pub fn input_schema() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            FieldSpec::array("orderIds", FieldSpec::elem(FieldKind::String))
                .required()
                .min_len(1),
        )
        .field(FieldSpec::boolean("includeTracking").default_value(json!(false)))
        .field(FieldSpec::boolean("includeItems").default_value(json!(false)))
        .field(FieldSpec::boolean("includePaymentStatus").default_value(json!(false)))
        .field(FieldSpec::boolean("includeShippingDetails").default_value(json!(false)))
        .field(FieldSpec::boolean("includeHistory").default_value(json!(false)))
        .build()
}

fn order_item() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(FieldSpec::string("productId").required())
        .field(FieldSpec::string("productName").required())
        .field(FieldSpec::string("variantId"))
        .field(FieldSpec::string_map("variantAttributes"))
        .field(FieldSpec::string("variantDescription"))
        .field(FieldSpec::integer("quantity").required().min(1.0))
        .field(
            FieldSpec::string("unitPrice")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("lineTotal")
                .required()
                .format(StringFormat::Decimal),
        )
        .field(
            FieldSpec::string("currency")
                .required()
                .format(StringFormat::Currency),
        )
        .field(FieldSpec::string("image").format(StringFormat::Url))
        .field(FieldSpec::enumeration("status", ORDER_ITEM_STATUSES))
        .field(FieldSpec::object("tracking", common::tracking_info()?))
        .build()
}

fn order_history_event() -> Result<Schema, SchemaError> {
    Schema::builder()
        .field(
            FieldSpec::string("timestamp")
                .required()
                .format(StringFormat::Timestamp),
        )
        .field(FieldSpec::enumeration("type", ORDER_EVENT_TYPES).required())
        .field(FieldSpec::string("description").required())
        .field(FieldSpec::map("details"))
        .build()
}

fn order_detail() -> Result<Schema, SchemaError> {
    let customer = Schema::builder()
        .field(FieldSpec::string("email"))
        .field(FieldSpec::string("phone"))
        .build()?;

    let shipping = Schema::builder()
        .field(FieldSpec::object("address", common::shipping_address()?).required())
        .field(FieldSpec::string("method").required())
        .field(FieldSpec::string("estimatedDelivery").format(StringFormat::Timestamp))
        .field(FieldSpec::string("actualDelivery").format(StringFormat::Timestamp))
        .build()?;

    Schema::builder()
        .field(FieldSpec::string("orderId").required())
        .field(FieldSpec::string("orderNumber").required())
        .field(FieldSpec::enumeration("status", ORDER_STATUSES).required())
        .field(
            FieldSpec::string("createdAt")
                .required()
                .format(StringFormat::Timestamp),
        )
        .field(FieldSpec::string("updatedAt").format(StringFormat::Timestamp))
        .field(FieldSpec::object("totals", common::cart_totals()?).required())
        .field(FieldSpec::object("customer", customer))
        .field(FieldSpec::object("shipping", shipping))
        .field(FieldSpec::object("billing", common::billing_address()?))
        .field(FieldSpec::object("payment", common::payment_status()?))
        .field(FieldSpec::array(
            "items",
            FieldSpec::elem(FieldKind::Object(Box::new(order_item()?))),
        ))
        .field(FieldSpec::array(
            "tracking",
            FieldSpec::elem(FieldKind::Object(Box::new(common::tracking_info()?))),
        ))
        .field(FieldSpec::array(
            "history",
            FieldSpec::elem(FieldKind::Object(Box::new(order_history_event()?))),
        ))
        .field(FieldSpec::array("notes", FieldSpec::elem(FieldKind::String)))
        .field(FieldSpec::string("error"))
        .build()
}

/// Output schema: order details aligned with the request order, null for misses
pub fn output_schema() -> Result<Schema, SchemaError> {
    let context = Schema::builder()
        .field(FieldSpec::string("description"))
        .field(FieldSpec::string("timestamp").format(StringFormat::Timestamp))
        .field(FieldSpec::number("dataAge").min(0.0))
        .build()?;

    Schema::builder()
        .field(
            FieldSpec::array(
                "orders",
                FieldSpec::elem(FieldKind::Object(Box::new(order_detail()?))).nullable(),
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
    fn test_include_flags_default_false() {
        let schema = input_schema().unwrap();
        let normalized = validate(&schema, &json!({"orderIds": ["ORD-1"]})).unwrap();
        for flag in [
            "includeTracking",
            "includeItems",
            "includePaymentStatus",
            "includeShippingDetails",
            "includeHistory",
        ] {
            assert_eq!(normalized[flag], json!(false), "{flag}");
        }
    }

    #[test]
    fn test_orders_required_and_nullable_slots() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "orders": [null],
            "notFound": ["ORD-404"],
        });
        assert!(validate(&schema, &payload).is_ok());
    }

    #[test]
    fn test_order_detail_status_domain() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "orders": [{
                "orderId": "ORD-1",
                "orderNumber": "1001",
                "status": "teleported",
                "createdAt": "2025-05-01T09:00:00Z",
                "totals": {"subtotal": "10.00", "currency": "USD", "total": "10.00"},
            }],
        });
        let failure = validate(&schema, &payload).unwrap_err();
        assert_eq!(failure.violations[0].path, "orders[0].status");
        assert_eq!(failure.violations[0].kind, ViolationKind::Enum);
    }

    #[test]
    fn test_tracking_events_validated() {
        let schema = output_schema().unwrap();
        let payload = json!({
            "orders": [{
                "orderId": "ORD-1",
                "orderNumber": "1001",
                "status": "shipped",
                "createdAt": "2025-05-01T09:00:00Z",
                "totals": {"subtotal": "10.00", "currency": "USD", "total": "10.00"},
                "tracking": [{
                    "trackingNumber": "1Z999",
                    "carrier": "UPS",
                    "status": "in_transit",
                    "events": [{"timestamp": "not-a-time", "status": "scan", "description": "Departed"}],
                }],
            }],
        });
        let failure = validate(&schema, &payload).unwrap_err();
        assert_eq!(
            failure.violations[0].path,
            "orders[0].tracking[0].events[0].timestamp"
        );
        assert_eq!(failure.violations[0].kind, ViolationKind::Format);
    }
}
