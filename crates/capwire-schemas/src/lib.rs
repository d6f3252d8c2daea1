//! Capwire Schemas - CAP skill schemas and payload validation
//!
//! This crate defines the schema model and validation engine for the
//! Commerce Agent Protocol (CAP): the five skills a client agent can invoke
//! against a merchant agent (`product_search`, `product_get`, `cart_manage`,
//! `order_status`, `user_preferences_set`), each described as an input and
//! an output [`Schema`].
//!
//! ## Features
//!
//! - **Schema model**: ordered field specs, cross-field rules keyed by a
//!   discriminant, post-validation rewrites
//! - **Validation + normalization**: defaults applied, bounds and enum
//!   domains enforced, full ordered violation lists (never fail-fast)
//! - **Open extensibility**: unknown fields pass through untouched
//! - **Wire primitives**: decimal money strings, ISO 4217 currencies,
//!   ISO 8601 timestamps, CAP URNs
//!
//! ## Quick Start
//!
//! ```rust
//! use capwire_schemas::catalog::product_search;
//! use capwire_schemas::validation::validate;
//! use serde_json::json;
//!
//! let schema = product_search::input_schema().unwrap();
//! let normalized = validate(&schema, &json!({"query": "espresso machine"})).unwrap();
//! assert_eq!(normalized["queryMode"], json!("keyword"));
//! assert_eq!(normalized["limit"], json!(20));
//! ```
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

pub mod catalog;
pub mod schema;
pub mod validation;

// Re-export commonly used types for convenience
pub use schema::{
    CrossFieldRule, FieldKind, FieldSpec, Rewrite, RuleCheck, Schema, SchemaBuilder, SchemaError,
    StringFormat,
};
pub use validation::{
    validate, Normalizer, ValidationFailure, ValidationResult, Violation, ViolationKind,
};
