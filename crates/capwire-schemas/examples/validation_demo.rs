//! Validation demonstration example
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use capwire_schemas::catalog::{cart_manage, product_search};
use capwire_schemas::validation::validate;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== CAP Payload Validation Demo ===\n");

    demo_search_validation()?;
    println!();
    demo_cart_validation()?;

    Ok(())
}

fn demo_search_validation() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- product_search ---");

    let schema = product_search::input_schema()?;

    // Minimal request: defaults are filled in.
    let minimal = json!({"query": "espresso machine"});
    match validate(&schema, &minimal) {
        Ok(normalized) => println!("normalized: {normalized}"),
        Err(failure) => println!("rejected: {failure}"),
    }

    // Over the pagination ceiling: rejected, never clamped.
    let over_limit = json!({"query": "espresso machine", "limit": 500});
    match validate(&schema, &over_limit) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(failure) => println!("rejected as expected:\n{failure}"),
    }

    Ok(())
}

fn demo_cart_validation() -> Result<(), Box<dyn std::error::Error>> {
    println!("--- cart_manage ---");

    let schema = cart_manage::input_schema()?;

    // Singular update shape: folded into the plural array form.
    let singular = json!({
        "action": "update",
        "item": {"cartItemId": "ci-42"},
        "quantity": 3,
    });
    match validate(&schema, &singular) {
        Ok(normalized) => println!("folded: {normalized}"),
        Err(failure) => println!("rejected: {failure}"),
    }

    // Both shapes at once: mutually exclusive.
    let ambiguous = json!({
        "action": "update",
        "updateItems": [{"cartItemId": "ci-42", "quantity": 3}],
        "item": {"cartItemId": "ci-42"},
        "quantity": 3,
    });
    match validate(&schema, &ambiguous) {
        Ok(_) => println!("unexpectedly accepted"),
        Err(failure) => println!("rejected as expected:\n{failure}"),
    }

    Ok(())
}
