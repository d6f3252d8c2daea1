//! Validation and normalization engine
//!
//! Turns a raw JSON payload into either a normalized payload with defaults
//! applied, or a deterministic, ordered list of violations. The engine is a
//! pure function of (schema, payload): no shared state, safe to run
//! concurrently against a sealed schema.
//!
//! Ordering contract: per-field violations are emitted in field-declaration
//! order (nested fields inline, depth-first, at their parent's position),
//! then cross-field violations in rule-declaration order. This makes error
//! lists reproducible for test assertions and stable for client display.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

use crate::schema::{CrossFieldRule, FieldKind, FieldSpec, Rewrite, RuleCheck, Schema, StringFormat};
use crate::validation::error::{ValidationFailure, ValidationResult, Violation, ViolationKind};
use crate::validation::primitives;

/// Validator/normalizer for one schema
pub struct Normalizer<'a> {
    schema: &'a Schema,
}

impl<'a> Normalizer<'a> {
    /// Create a normalizer over a schema
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Validate `payload` and produce its normalized form.
    ///
    /// `Ok` carries the payload with defaults applied, optional nulls
    /// dropped, unknown fields preserved verbatim, and post-validation
    /// rewrites applied. `Err` carries every violation found, in order.
    pub fn normalize(&self, payload: &Value) -> ValidationResult {
        let mut violations = Vec::new();
        let mut normalized = normalize_against(self.schema, payload, "", &mut violations);
        if !violations.is_empty() {
            return Err(ValidationFailure::new(violations));
        }
        if let Value::Object(obj) = &mut normalized {
            apply_rewrites(self.schema, obj);
        }
        Ok(normalized)
    }
}

/// Validate `payload` against `schema`
pub fn validate(schema: &Schema, payload: &Value) -> ValidationResult {
    Normalizer::new(schema).normalize(payload)
}

/// Check a standalone value against a field spec (schema-build invariant)
pub(crate) fn check_field_value(spec: &FieldSpec, value: &Value, path: &str) -> Vec<Violation> {
    let mut out = Vec::new();
    if value.is_null() {
        if !spec.nullable {
            out.push(Violation::new(
                path,
                ViolationKind::Type,
                "null is not accepted here",
            ));
        }
    } else {
        check_field(spec, value, path, &mut out);
    }
    out
}

fn child_path(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{path}.{name}")
    }
}

fn object_path(path: &str) -> String {
    if path.is_empty() {
        "$".to_string()
    } else {
        path.to_string()
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn type_violation(path: &str, expected: &str, found: &Value) -> Violation {
    Violation::new(
        path,
        ViolationKind::Type,
        format!("expected {expected}, found {}", json_type_name(found)),
    )
}

/// Shallow type test used for union dispatch
fn kind_matches(kind: &FieldKind, value: &Value) -> bool {
    match kind {
        FieldKind::String | FieldKind::Enum(_) => value.is_string(),
        FieldKind::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
        FieldKind::Number => value.is_number(),
        FieldKind::Boolean => value.is_boolean(),
        FieldKind::Array(_) => value.is_array(),
        FieldKind::Object(_) | FieldKind::Map(_) => value.is_object(),
        FieldKind::OneOf(alternatives) => alternatives.iter().any(|a| kind_matches(&a.kind, value)),
    }
}

fn normalize_against(schema: &Schema, value: &Value, path: &str, out: &mut Vec<Violation>) -> Value {
    let Some(obj) = value.as_object() else {
        out.push(type_violation(&object_path(path), "object", value));
        return value.clone();
    };

    // Start from a verbatim copy: unknown fields are kept, never flagged.
    let mut result = obj.clone();

    for spec in schema.fields() {
        let fpath = child_path(path, spec.name());
        match obj.get(spec.name()) {
            None => {
                if let Some(default) = spec.default() {
                    result.insert(spec.name().to_string(), default.clone());
                } else if spec.is_required() {
                    out.push(Violation::new(
                        fpath,
                        ViolationKind::Required,
                        "field is required",
                    ));
                }
            }
            Some(Value::Null) => {
                if spec.nullable {
                    // kept verbatim
                } else if spec.is_required() {
                    out.push(Violation::new(
                        fpath,
                        ViolationKind::Required,
                        "field is required and may not be null",
                    ));
                } else {
                    // Optional null reads as "absent": handlers may signal
                    // unavailable data either way.
                    result.remove(spec.name());
                    if let Some(default) = spec.default() {
                        result.insert(spec.name().to_string(), default.clone());
                    }
                }
            }
            Some(present) => {
                let normalized = check_field(spec, present, &fpath, out);
                result.insert(spec.name().to_string(), normalized);
            }
        }
    }

    for rule in schema.rules() {
        eval_rule(rule, &result, path, out);
    }

    Value::Object(result)
}

/// Validate one present, non-null value against its spec.
///
/// A kind mismatch records a single `type` violation and halts all further
/// checks on that field, including recursion.
fn check_field(spec: &FieldSpec, value: &Value, path: &str, out: &mut Vec<Violation>) -> Value {
    match &spec.kind {
        FieldKind::String => {
            let Some(s) = value.as_str() else {
                out.push(type_violation(path, "string", value));
                return value.clone();
            };
            check_string_constraints(spec, s, path, out);
            value.clone()
        }
        FieldKind::Enum(values) => {
            let Some(s) = value.as_str() else {
                out.push(type_violation(path, "string", value));
                return value.clone();
            };
            if !values.contains(&s) {
                out.push(Violation::new(
                    path,
                    ViolationKind::Enum,
                    format!("expected one of {}, found `{s}`", values.join(", ")),
                ));
            }
            value.clone()
        }
        FieldKind::Integer => {
            if value.as_i64().is_none() && value.as_u64().is_none() {
                out.push(type_violation(path, "integer", value));
                return value.clone();
            }
            if let Some(n) = value.as_f64() {
                check_numeric_bounds(spec, n, path, out);
            }
            value.clone()
        }
        FieldKind::Number => {
            let Some(n) = value.as_f64() else {
                out.push(type_violation(path, "number", value));
                return value.clone();
            };
            check_numeric_bounds(spec, n, path, out);
            value.clone()
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                out.push(type_violation(path, "boolean", value));
            }
            value.clone()
        }
        FieldKind::Array(element) => {
            let Some(items) = value.as_array() else {
                out.push(type_violation(path, "array", value));
                return value.clone();
            };
            check_length_bounds(spec, items.len(), "items", path, out);
            let mut normalized = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let ipath = format!("{path}[{i}]");
                if item.is_null() {
                    if !element.nullable {
                        out.push(Violation::new(
                            ipath,
                            ViolationKind::Type,
                            "null is not accepted here",
                        ));
                    }
                    normalized.push(Value::Null);
                } else {
                    normalized.push(check_field(element, item, &ipath, out));
                }
            }
            Value::Array(normalized)
        }
        FieldKind::Object(inner) => normalize_against(inner, value, path, out),
        FieldKind::Map(value_spec) => {
            let Some(entries) = value.as_object() else {
                out.push(type_violation(path, "object", value));
                return value.clone();
            };
            match value_spec {
                None => value.clone(),
                Some(vspec) => {
                    let mut result = entries.clone();
                    for (key, entry) in entries {
                        let kpath = child_path(path, key);
                        result.insert(key.clone(), check_field(vspec, entry, &kpath, out));
                    }
                    Value::Object(result)
                }
            }
        }
        FieldKind::OneOf(alternatives) => {
            match alternatives.iter().find(|alt| kind_matches(&alt.kind, value)) {
                Some(alt) => check_field(alt, value, path, out),
                None => {
                    let expected = alternatives
                        .iter()
                        .map(|a| a.kind.name())
                        .collect::<Vec<_>>()
                        .join(" or ");
                    out.push(type_violation(path, &expected, value));
                    value.clone()
                }
            }
        }
    }
}

fn check_string_constraints(spec: &FieldSpec, s: &str, path: &str, out: &mut Vec<Violation>) {
    check_length_bounds(spec, s.chars().count(), "characters", path, out);

    let Some(format) = spec.format else {
        return;
    };
    let ok = match format {
        StringFormat::Decimal => primitives::is_decimal_string(s),
        StringFormat::Currency => primitives::is_currency_code(s),
        StringFormat::Timestamp => primitives::is_timestamp(s),
        StringFormat::Urn => primitives::is_urn(s),
        StringFormat::LanguageTag => primitives::is_language_tag(s),
        StringFormat::CountryCode => primitives::is_country_code(s),
        StringFormat::Url => primitives::is_url(s),
    };
    if !ok {
        let expected = match format {
            StringFormat::Decimal => "a non-negative decimal amount string",
            StringFormat::Currency => "an ISO 4217 currency code",
            StringFormat::Timestamp => "an ISO 8601 timestamp",
            StringFormat::Urn => "a URN of the form urn:<namespace>:<value>",
            StringFormat::LanguageTag => "a BCP 47 language tag",
            StringFormat::CountryCode => "an ISO 3166-1 alpha-2 country code",
            StringFormat::Url => "a URL with an explicit scheme",
        };
        out.push(Violation::new(
            path,
            ViolationKind::Format,
            format!("`{s}` is not {expected}"),
        ));
    }
}

fn check_numeric_bounds(spec: &FieldSpec, n: f64, path: &str, out: &mut Vec<Violation>) {
    if let Some(min) = spec.min {
        if n < min {
            out.push(Violation::new(
                path,
                ViolationKind::Bound,
                format!("value {n} is below the minimum of {min}"),
            ));
        }
    }
    if let Some(max) = spec.max {
        if n > max {
            out.push(Violation::new(
                path,
                ViolationKind::Bound,
                format!("value {n} exceeds the maximum of {max}"),
            ));
        }
    }
}

fn check_length_bounds(spec: &FieldSpec, len: usize, unit: &str, path: &str, out: &mut Vec<Violation>) {
    if let Some(min) = spec.min_len {
        if len < min {
            out.push(Violation::new(
                path,
                ViolationKind::Bound,
                format!("has {len} {unit}, fewer than the minimum of {min}"),
            ));
        }
    }
    if let Some(max) = spec.max_len {
        if len > max {
            out.push(Violation::new(
                path,
                ViolationKind::Bound,
                format!("has {len} {unit}, more than the maximum of {max}"),
            ));
        }
    }
}

fn eval_rule(rule: &CrossFieldRule, obj: &Map<String, Value>, path: &str, out: &mut Vec<Violation>) {
    if let Some((field, value)) = rule.when {
        if obj.get(field).and_then(Value::as_str) != Some(value) {
            return;
        }
    }

    let present = |field: &str| obj.contains_key(field);
    let cross = |path: String, message: String| {
        Violation::new(path, ViolationKind::CrossField, format!("rule `{}`: {message}", rule.name))
    };

    match rule.check {
        RuleCheck::Requires(field) => {
            if !present(field) {
                out.push(cross(
                    child_path(path, field),
                    format!("`{field}` is required here"),
                ));
            }
        }
        RuleCheck::RequiresNonEmpty(field) => match obj.get(field) {
            None => out.push(cross(
                child_path(path, field),
                format!("`{field}` is required and must be a non-empty array"),
            )),
            Some(Value::Array(items)) if items.is_empty() => out.push(cross(
                child_path(path, field),
                format!("`{field}` must not be empty"),
            )),
            // Wrong-kinded values were already reported by the per-field pass.
            Some(_) => {}
        },
        RuleCheck::Forbids(field) => {
            if present(field) {
                out.push(cross(
                    child_path(path, field),
                    format!("`{field}` is not allowed here"),
                ));
            }
        }
        RuleCheck::RequiresAnyOf(fields) => {
            if !fields.iter().any(|&f| present(f)) {
                out.push(cross(
                    object_path(path),
                    format!("at least one of {} is required", join_fields(fields)),
                ));
            }
        }
        RuleCheck::ExclusiveAlternatives { plural, singular } => {
            let plural_present = present(plural);
            let singular_count = singular.iter().filter(|&&f| present(f)).count();
            if plural_present && singular_count > 0 {
                out.push(cross(
                    object_path(path),
                    format!(
                        "`{plural}` and the singular form ({}) are mutually exclusive",
                        join_fields(singular)
                    ),
                ));
            } else if plural_present {
                if let Some(Value::Array(items)) = obj.get(plural) {
                    if items.is_empty() {
                        out.push(cross(
                            child_path(path, plural),
                            format!("`{plural}` must not be empty"),
                        ));
                    }
                }
            } else if singular_count == singular.len() {
                // complete singular shape
            } else if singular_count > 0 {
                out.push(cross(
                    object_path(path),
                    format!("the singular form requires all of {}", join_fields(singular)),
                ));
            } else {
                out.push(cross(
                    object_path(path),
                    format!("either `{plural}` or {} is required", join_fields(singular)),
                ));
            }
        }
        RuleCheck::MoneyPair { amount, currency } => {
            let Some(amount_value) = obj.get(amount) else {
                return;
            };
            let Some(currency_value) = obj.get(currency) else {
                out.push(cross(
                    child_path(path, currency),
                    format!("`{currency}` is required when `{amount}` is present"),
                ));
                return;
            };
            if let (Some(amount_str), Some(currency_str)) =
                (amount_value.as_str(), currency_value.as_str())
            {
                if let (Some(digits), Some(minor_units)) = (
                    primitives::decimal_fraction_digits(amount_str),
                    primitives::currency_minor_units(currency_str),
                ) {
                    if digits as u32 > minor_units {
                        out.push(cross(
                            child_path(path, amount),
                            format!(
                                "amount `{amount_str}` has more fractional digits than {currency_str} allows ({minor_units})"
                            ),
                        ));
                    }
                }
            }
        }
        RuleCheck::LessOrEqual { lo, hi } => {
            if let (Some(lo_n), Some(hi_n)) = (
                obj.get(lo).and_then(Value::as_f64),
                obj.get(hi).and_then(Value::as_f64),
            ) {
                if lo_n > hi_n {
                    out.push(cross(
                        child_path(path, lo),
                        format!("`{lo}` ({lo_n}) must not exceed `{hi}` ({hi_n})"),
                    ));
                }
            }
        }
    }
}

fn join_fields(fields: &[&str]) -> String {
    fields
        .iter()
        .map(|f| format!("`{f}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn apply_rewrites(schema: &Schema, obj: &mut Map<String, Value>) {
    for rewrite in schema.rewrites() {
        let Rewrite::FoldSingular {
            when: (when_field, when_value),
            singular,
            merge,
            plural,
        } = rewrite;
        if obj.get(*when_field).and_then(Value::as_str) != Some(*when_value) {
            continue;
        }
        if obj.contains_key(*plural) {
            continue;
        }
        let Some(Value::Object(mut element)) = obj.remove(*singular) else {
            continue;
        };
        if let Some(merge_field) = merge {
            if let Some(merged) = obj.remove(*merge_field) {
                element.insert(merge_field.to_string(), merged);
            }
        }
        obj.insert(plural.to_string(), Value::Array(vec![Value::Object(element)]));
    }
}
