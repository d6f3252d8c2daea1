//! Field specifications for CAP skill schemas
//!
//! A [`FieldSpec`] describes one declared field of a schema: its JSON kind,
//! whether it is required, its default, bounds, and string format. Specs are
//! assembled with builder-style constructors and owned exclusively by their
//! parent [`Schema`](super::Schema).
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;

use super::Schema;

/// JSON value kind a field accepts
#[derive(Debug, Clone)]
pub enum FieldKind {
    /// Any JSON string
    String,
    /// A JSON number with no fractional part
    Integer,
    /// Any JSON number
    Number,
    /// A JSON boolean
    Boolean,
    /// A string drawn from a closed set of values
    Enum(&'static [&'static str]),
    /// A JSON array whose elements satisfy the given spec
    Array(Box<FieldSpec>),
    /// A JSON object validated against a nested schema
    Object(Box<Schema>),
    /// An open JSON object; `Some` constrains every value to the given spec
    Map(Option<Box<FieldSpec>>),
    /// A union: the value must satisfy one of the alternative specs
    OneOf(Vec<FieldSpec>),
}

impl FieldKind {
    /// Human-readable kind name used in type-mismatch messages
    pub fn name(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Enum(_) => "string",
            FieldKind::Array(_) => "array",
            FieldKind::Object(_) => "object",
            FieldKind::Map(_) => "object",
            FieldKind::OneOf(_) => "one of several kinds",
        }
    }
}

/// Format constraint for string-kinded fields
///
/// These are the shared CAP wire primitives: decimal money strings, ISO 4217
/// currency codes, ISO 8601 timestamps, CAP URNs, and locale identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringFormat {
    /// Non-negative decimal amount string (never floating point)
    Decimal,
    /// ISO 4217 currency code
    Currency,
    /// ISO 8601 timestamp (RFC 3339, date-only tolerated)
    Timestamp,
    /// CAP URN, `urn:<namespace>:<value>`
    Urn,
    /// IETF BCP 47 language tag
    LanguageTag,
    /// ISO 3166-1 alpha-2 country code
    CountryCode,
    /// URL with an explicit scheme
    Url,
}

/// Specification of one schema field
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub(crate) name: &'static str,
    pub(crate) kind: FieldKind,
    pub(crate) required: bool,
    pub(crate) nullable: bool,
    pub(crate) default: Option<Value>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) min_len: Option<usize>,
    pub(crate) max_len: Option<usize>,
    pub(crate) format: Option<StringFormat>,
}

impl FieldSpec {
    /// Create a spec with the given name and kind; optional by default
    pub fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
            nullable: false,
            default: None,
            min: None,
            max: None,
            min_len: None,
            max_len: None,
            format: None,
        }
    }

    /// String-kinded field
    pub fn string(name: &'static str) -> Self {
        Self::new(name, FieldKind::String)
    }

    /// Integer-kinded field
    pub fn integer(name: &'static str) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    /// Number-kinded field
    pub fn number(name: &'static str) -> Self {
        Self::new(name, FieldKind::Number)
    }

    /// Boolean-kinded field
    pub fn boolean(name: &'static str) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    /// Enum-kinded field over a closed value set
    pub fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::new(name, FieldKind::Enum(values))
    }

    /// Array-kinded field with the given element spec
    pub fn array(name: &'static str, element: FieldSpec) -> Self {
        Self::new(name, FieldKind::Array(Box::new(element)))
    }

    /// Object-kinded field validated against a nested schema
    pub fn object(name: &'static str, schema: Schema) -> Self {
        Self::new(name, FieldKind::Object(Box::new(schema)))
    }

    /// Open map field; values are passed through unchecked
    pub fn map(name: &'static str) -> Self {
        Self::new(name, FieldKind::Map(None))
    }

    /// Map field whose values must all be strings
    pub fn string_map(name: &'static str) -> Self {
        Self::new(name, FieldKind::Map(Some(Box::new(FieldSpec::elem(FieldKind::String)))))
    }

    /// Union field accepting any of the alternative specs
    pub fn one_of(name: &'static str, alternatives: Vec<FieldSpec>) -> Self {
        Self::new(name, FieldKind::OneOf(alternatives))
    }

    /// Anonymous spec for array elements, map values, and union members
    pub fn elem(kind: FieldKind) -> Self {
        Self::new("", kind)
    }

    /// Mark the field required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accept JSON `null` verbatim (used for not-found slots in response arrays)
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Value inserted when the field is absent.
    ///
    /// The default must satisfy the field's own constraints; this is
    /// enforced when the parent schema is built.
    pub fn default_value(mut self, value: Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Inclusive numeric minimum
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Inclusive numeric maximum
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Minimum length (characters for strings, items for arrays)
    pub fn min_len(mut self, len: usize) -> Self {
        self.min_len = Some(len);
        self
    }

    /// Maximum length (characters for strings, items for arrays)
    pub fn max_len(mut self, len: usize) -> Self {
        self.max_len = Some(len);
        self
    }

    /// Attach a string format constraint
    pub fn format(mut self, format: StringFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Field name within its parent schema
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Declared kind
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Whether the field must be present
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Declared default, if any
    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }
}
