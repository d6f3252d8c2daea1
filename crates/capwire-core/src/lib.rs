//! Capwire Core - Registry and dispatch facade for CAP skills
//!
//! This crate provides the runtime layer every Commerce Agent Protocol
//! implementation needs around the schema definitions: a sealed
//! [`SchemaRegistry`], and a [`Dispatcher`] that validates requests,
//! invokes the merchant-supplied [`SkillHandler`], and validates
//! responses before they reach the client agent.
//!
//! # Main Components
//!
//! - **Error Handling**: the CAP error taxonomy using `thiserror` and
//!   `anyhow`
//! - **Schema Registry**: `(skill, direction) -> Schema`, immutable after
//!   sealing, safe for unbounded concurrent readers
//! - **Dispatch Facade**: `invoke(skill, raw_input)` with cooperative
//!   cancellation
//! - **Wire Types**: typed serde structs for CAP payloads
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use async_trait::async_trait;
//! use capwire_core::{Dispatcher, Result, SchemaRegistry, SkillHandler};
//! use serde_json::{json, Value};
//!
//! struct SearchHandler;
//!
//! #[async_trait]
//! impl SkillHandler for SearchHandler {
//!     async fn handle(&self, _skill: &str, _input: Value) -> anyhow::Result<Value> {
//!         Ok(json!({"products": [], "totalResults": 0, "offset": 0, "limit": 20}))
//!     }
//! }
//!
//! # async fn example() -> Result<()> {
//! let registry = Arc::new(SchemaRegistry::with_catalog()?);
//! let dispatcher = Dispatcher::new(registry).bind("product_search", Arc::new(SearchHandler));
//! let output = dispatcher
//!     .invoke("product_search", json!({"query": "espresso machine"}))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod types;

// Re-export main types for convenience
pub use dispatch::{Dispatcher, SkillHandler};
pub use error::{Error, Result};
pub use registry::{Direction, SchemaRegistry};

// Re-export the schema crate under a stable name
pub use capwire_schemas as schemas;
pub use capwire_schemas::{Schema, Violation, ViolationKind};

// Re-export the async-trait attribute handlers are written with
pub use async_trait::async_trait;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
