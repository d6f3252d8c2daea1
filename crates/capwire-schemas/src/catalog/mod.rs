//! The CAP skill catalogue
//!
//! One module per skill, each exposing `input_schema()` and
//! `output_schema()`. The catalogue is fixed: `product_search`,
//! `product_get`, `cart_manage`, `order_status`, and
//! `user_preferences_set`. Registries are expected to build all five at
//! process start and seal themselves before serving traffic.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

pub mod cart_manage;
mod common;
pub mod order_status;
pub mod product_get;
pub mod product_search;
pub mod user_preferences;

use crate::schema::{Schema, SchemaError};

/// Skill name: product search
pub const PRODUCT_SEARCH: &str = "product_search";
/// Skill name: product detail retrieval
pub const PRODUCT_GET: &str = "product_get";
/// Skill name: cart mutation and inspection
pub const CART_MANAGE: &str = "cart_manage";
/// Skill name: order status lookup
pub const ORDER_STATUS: &str = "order_status";
/// Skill name: user preference updates
pub const USER_PREFERENCES_SET: &str = "user_preferences_set";

/// Every CAP skill, in catalogue order
pub const SKILLS: [&str; 5] = [
    PRODUCT_SEARCH,
    PRODUCT_GET,
    CART_MANAGE,
    ORDER_STATUS,
    USER_PREFERENCES_SET,
];

/// Build the full catalogue as `(skill, input schema, output schema)` rows
pub fn entries() -> Result<Vec<(&'static str, Schema, Schema)>, SchemaError> {
    Ok(vec![
        (
            PRODUCT_SEARCH,
            product_search::input_schema()?,
            product_search::output_schema()?,
        ),
        (
            PRODUCT_GET,
            product_get::input_schema()?,
            product_get::output_schema()?,
        ),
        (
            CART_MANAGE,
            cart_manage::input_schema()?,
            cart_manage::output_schema()?,
        ),
        (
            ORDER_STATUS,
            order_status::input_schema()?,
            order_status::output_schema()?,
        ),
        (
            USER_PREFERENCES_SET,
            user_preferences::input_schema()?,
            user_preferences::output_schema()?,
        ),
    ])
}
