//! Schema model for CAP skills
//!
//! A [`Schema`] is an ordered set of [`FieldSpec`]s plus cross-field rules
//! keyed by an optional discriminant field, and is immutable once built.
//! Schemas declare a closed set of *known* fields; unknown fields are always
//! allowed and preserved (open extensibility).
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

mod field;
mod rules;

pub use field::{FieldKind, FieldSpec, StringFormat};
pub use rules::{CrossFieldRule, RuleCheck, Rewrite};

use thiserror::Error;

/// Construction-time schema defect
///
/// These are init-phase failures: a schema that fails to build is a
/// programming error in the skill catalogue, not a runtime condition.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Two field specs share a name
    #[error("duplicate field `{0}` in schema")]
    DuplicateField(String),
    /// A declared default does not satisfy its own field's constraints
    #[error("default for field `{field}` violates its own constraints: {detail}")]
    InvalidDefault { field: String, detail: String },
    /// The discriminant names a field the schema does not declare
    #[error("discriminant `{0}` is not a declared field")]
    UnknownDiscriminant(String),
    /// A cross-field rule references an undeclared field
    #[error("rule `{rule}` references undeclared field `{field}`")]
    UnknownRuleField { rule: String, field: String },
    /// A rewrite references an undeclared field
    #[error("rewrite references undeclared field `{0}`")]
    UnknownRewriteField(String),
}

/// Immutable schema for one skill direction (input or output)
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    discriminant: Option<&'static str>,
    rules: Vec<CrossFieldRule>,
    rewrites: Vec<Rewrite>,
}

impl Schema {
    /// Start building a schema
    pub fn builder() -> SchemaBuilder {
        SchemaBuilder::default()
    }

    /// Declared fields, in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a declared field by name
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The field whose value selects which conditional rules apply
    pub fn discriminant(&self) -> Option<&'static str> {
        self.discriminant
    }

    /// Cross-field rules, in declaration order
    pub fn rules(&self) -> &[CrossFieldRule] {
        &self.rules
    }

    /// Post-validation rewrites, in declaration order
    pub fn rewrites(&self) -> &[Rewrite] {
        &self.rewrites
    }
}

/// Builder for [`Schema`]
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
    discriminant: Option<&'static str>,
    rules: Vec<CrossFieldRule>,
    rewrites: Vec<Rewrite>,
}

impl SchemaBuilder {
    /// Append a field spec; declaration order is validation order
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Name the discriminant field for conditional rules
    pub fn discriminant(mut self, name: &'static str) -> Self {
        self.discriminant = Some(name);
        self
    }

    /// Append a cross-field rule
    pub fn rule(mut self, rule: CrossFieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a post-validation rewrite
    pub fn rewrite(mut self, rewrite: Rewrite) -> Self {
        self.rewrites.push(rewrite);
        self
    }

    /// Check the schema's construction invariants and freeze it
    pub fn build(self) -> Result<Schema, SchemaError> {
        let mut seen = std::collections::HashSet::new();
        for spec in &self.fields {
            if !seen.insert(spec.name) {
                return Err(SchemaError::DuplicateField(spec.name.to_string()));
            }
        }

        let declared = |name: &str| self.fields.iter().any(|f| f.name == name);

        if let Some(disc) = self.discriminant {
            if !declared(disc) {
                return Err(SchemaError::UnknownDiscriminant(disc.to_string()));
            }
        }

        for rule in &self.rules {
            if let Some((field, _)) = rule.when {
                if !declared(field) {
                    return Err(SchemaError::UnknownRuleField {
                        rule: rule.name.to_string(),
                        field: field.to_string(),
                    });
                }
            }
            for field in rule_fields(&rule.check) {
                if !declared(field) {
                    return Err(SchemaError::UnknownRuleField {
                        rule: rule.name.to_string(),
                        field: field.to_string(),
                    });
                }
            }
        }

        for rewrite in &self.rewrites {
            let Rewrite::FoldSingular {
                when: (when_field, _),
                singular,
                merge,
                plural,
            } = rewrite;
            for field in [Some(*when_field), Some(*singular), *merge, Some(*plural)]
                .into_iter()
                .flatten()
            {
                if !declared(field) {
                    return Err(SchemaError::UnknownRewriteField(field.to_string()));
                }
            }
        }

        for spec in &self.fields {
            if let Some(default) = &spec.default {
                let violations = crate::validation::check_field_value(spec, default, spec.name);
                if let Some(first) = violations.into_iter().next() {
                    return Err(SchemaError::InvalidDefault {
                        field: spec.name.to_string(),
                        detail: first.message,
                    });
                }
            }
        }

        Ok(Schema {
            fields: self.fields,
            discriminant: self.discriminant,
            rules: self.rules,
            rewrites: self.rewrites,
        })
    }
}

/// Fields a rule check reads, for the declared-field invariant
fn rule_fields(check: &RuleCheck) -> Vec<&'static str> {
    match check {
        RuleCheck::Requires(f) | RuleCheck::RequiresNonEmpty(f) | RuleCheck::Forbids(f) => {
            vec![*f]
        }
        RuleCheck::RequiresAnyOf(fields) => fields.to_vec(),
        RuleCheck::ExclusiveAlternatives { plural, singular } => {
            let mut all = vec![*plural];
            all.extend_from_slice(singular);
            all
        }
        RuleCheck::MoneyPair { amount, currency } => vec![*amount, *currency],
        RuleCheck::LessOrEqual { lo, hi } => vec![*lo, *hi],
    }
}
