//! Validation module for CAP skill payloads
//!
//! Provides the violation types, the shared wire-primitive format checks,
//! and the [`Normalizer`] engine that validates a raw payload against a
//! [`Schema`](crate::schema::Schema) and applies its defaults.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod normalizer;
pub mod primitives;

pub use error::{ValidationFailure, ValidationResult, Violation, ViolationKind};
pub use normalizer::{validate, Normalizer};

pub(crate) use normalizer::check_field_value;
