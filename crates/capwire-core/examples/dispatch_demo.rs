//! Dispatch facade demonstration example
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use std::sync::Arc;

use async_trait::async_trait;
use capwire_core::{Dispatcher, SchemaRegistry, SkillHandler};
use serde_json::{json, Value};

/// Toy search handler standing in for a merchant backend
struct DemoSearchHandler;

#[async_trait]
impl SkillHandler for DemoSearchHandler {
    async fn handle(&self, _skill: &str, input: Value) -> anyhow::Result<Value> {
        let query = input["query"].as_str().unwrap_or_default().to_string();
        Ok(json!({
            "products": [{
                "id": "SKU-1",
                "name": format!("Best match for '{query}'"),
                "offers": [{"identifier": "o1", "price": "19.99", "priceCurrency": "USD"}],
            }],
            "totalResults": 1,
            "offset": input["offset"],
            "limit": input["limit"],
        }))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let registry = Arc::new(SchemaRegistry::with_catalog()?);
    let dispatcher = Dispatcher::new(registry).bind("product_search", Arc::new(DemoSearchHandler));

    // Valid round trip.
    let output = dispatcher
        .invoke("product_search", json!({"query": "desk lamp"}))
        .await?;
    println!("output: {output}");

    // Client error: the handler is never consulted.
    let err = dispatcher
        .invoke("product_search", json!({"query": "desk lamp", "limit": 9000}))
        .await
        .unwrap_err();
    println!("client error: {err}");

    // Unknown skill.
    let err = dispatcher.invoke("teleport", json!({})).await.unwrap_err();
    println!("unknown skill: {err}");

    Ok(())
}
