//! Cross-field rules and post-validation rewrites
//!
//! Rules express constraints spanning multiple fields of one schema, keyed
//! optionally on a discriminant value (e.g. `action` for cart management).
//! Rewrites canonicalize valid payloads so handlers only ever see one shape
//! of a request.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

/// Check performed by a [`CrossFieldRule`]
#[derive(Debug, Clone)]
pub enum RuleCheck {
    /// The named field must be present
    Requires(&'static str),
    /// The named field must be present and a non-empty array
    RequiresNonEmpty(&'static str),
    /// The named field must be absent
    Forbids(&'static str),
    /// At least one of the named fields must be present
    RequiresAnyOf(&'static [&'static str]),
    /// Exactly one request shape: either the plural array field (non-empty),
    /// or the complete singular field set. Both shapes present is a
    /// violation; so is neither, or an incomplete singular set.
    ExclusiveAlternatives {
        plural: &'static str,
        singular: &'static [&'static str],
    },
    /// A currency code must accompany the amount, and the amount's fractional
    /// precision must not exceed the currency's ISO 4217 minor units
    MoneyPair {
        amount: &'static str,
        currency: &'static str,
    },
    /// When both fields are present and numeric, `lo` must not exceed `hi`
    LessOrEqual {
        lo: &'static str,
        hi: &'static str,
    },
}

/// One cross-field rule of a schema
///
/// Rules are evaluated after all per-field checks, in declaration order,
/// and only when their `when` condition (if any) matches the payload's
/// discriminant value.
#[derive(Debug, Clone)]
pub struct CrossFieldRule {
    pub(crate) name: &'static str,
    pub(crate) when: Option<(&'static str, &'static str)>,
    pub(crate) check: RuleCheck,
}

impl CrossFieldRule {
    /// Create an unconditional rule
    pub fn new(name: &'static str, check: RuleCheck) -> Self {
        Self {
            name,
            when: None,
            check,
        }
    }

    /// Restrict the rule to payloads where `field` equals `value`
    pub fn when(mut self, field: &'static str, value: &'static str) -> Self {
        self.when = Some((field, value));
        self
    }

    /// Stable rule identifier, quoted in cross-field violation messages
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Canonicalization applied to a payload after it validated cleanly
#[derive(Debug, Clone)]
pub enum Rewrite {
    /// Fold a singular request shape into its plural array form: when the
    /// discriminant matches and `singular` is present, it becomes the sole
    /// element of `plural` (with `merge`'s value, if any, inserted under the
    /// merge field's name), and the singular keys are removed.
    FoldSingular {
        when: (&'static str, &'static str),
        singular: &'static str,
        merge: Option<&'static str>,
        plural: &'static str,
    },
}
