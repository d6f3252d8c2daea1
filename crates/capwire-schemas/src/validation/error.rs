//! Violation types for CAP payload validation
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Category of rule a payload value failed against.
///
/// The serialized form (`required`, `type`, `enum`, `bound`, `format`,
/// `cross_field`) is part of the client-facing contract and must stay
/// stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent (or null where null is not accepted)
    Required,
    /// The value's JSON type does not match the field's declared kind
    Type,
    /// A string value is outside the field's enumerated domain
    Enum,
    /// A numeric or length bound was exceeded
    Bound,
    /// A string value does not match its declared format (money, URN, ...)
    Format,
    /// A rule spanning multiple fields was broken
    CrossField,
}

impl ViolationKind {
    /// Wire name of the rule category
    pub fn as_str(&self) -> &'static str {
        match self {
            ViolationKind::Required => "required",
            ViolationKind::Type => "type",
            ViolationKind::Enum => "enum",
            ViolationKind::Bound => "bound",
            ViolationKind::Format => "format",
            ViolationKind::CrossField => "cross_field",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single detected non-conformance of a payload against a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field path within the payload (e.g. `addItems[2].quantity`)
    pub path: String,
    /// Which category of rule was violated
    pub kind: ViolationKind,
    /// Human-readable explanation
    pub message: String,
}

impl Violation {
    /// Create a new violation
    pub fn new<P, M>(path: P, kind: ViolationKind, message: M) -> Self
    where
        P: Into<String>,
        M: Into<String>,
    {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at `{}`: {}", self.kind, self.path, self.message)
    }
}

/// Failed validation of one payload, carrying every violation found
///
/// Validation never fails fast: the list is complete and deterministically
/// ordered (per-field violations in field-declaration order, then
/// cross-field violations in rule-declaration order).
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Ordered list of violations
    pub violations: Vec<Violation>,
}

impl ValidationFailure {
    /// Wrap an ordered violation list
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    /// Number of violations found
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// True when no violations are present
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} violation(s):", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

impl From<Vec<Violation>> for ValidationFailure {
    fn from(violations: Vec<Violation>) -> Self {
        Self::new(violations)
    }
}

/// Outcome of validating one payload: the normalized payload, or the full
/// ordered violation list. Never partially both.
pub type ValidationResult = Result<serde_json::Value, ValidationFailure>;
