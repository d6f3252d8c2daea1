//! Dispatch facade: the single `invoke` surface over validated skills
//!
//! An invocation validates the raw input against the skill's input schema,
//! hands the normalized payload to the bound handler, and validates the
//! handler's raw output against the output schema before returning it.
//! Handlers are opaque collaborators supplied by the embedding merchant
//! backend; this layer never retries them and imposes no timeout of its
//! own.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use capwire_schemas::{Normalizer, Schema};

use crate::error::{Error, Result};
use crate::registry::{Direction, SchemaRegistry};

/// One skill's backing implementation, supplied by the embedding system.
///
/// Handlers receive the normalized input (defaults applied, singular cart
/// shapes folded to plural) and return a raw output payload that still has
/// to pass output validation.
#[async_trait]
pub trait SkillHandler: Send + Sync {
    /// Execute the skill against the merchant backend
    async fn handle(&self, skill: &str, input: Value) -> anyhow::Result<Value>;
}

/// Composes registry lookup, validation, and handler invocation
pub struct Dispatcher {
    registry: Arc<SchemaRegistry>,
    handlers: HashMap<String, Arc<dyn SkillHandler>>,
}

impl Dispatcher {
    /// Create a dispatcher over a sealed registry
    pub fn new(registry: Arc<SchemaRegistry>) -> Self {
        Self {
            registry,
            handlers: HashMap::new(),
        }
    }

    /// Bind a handler for one skill; later binds for the same skill win
    pub fn bind<S>(mut self, skill: S, handler: Arc<dyn SkillHandler>) -> Self
    where
        S: Into<String>,
    {
        self.handlers.insert(skill.into(), handler);
        self
    }

    /// The registry this dispatcher validates against
    pub fn registry(&self) -> &Arc<SchemaRegistry> {
        &self.registry
    }

    /// Invoke a skill: validate input, run the handler, validate output
    pub async fn invoke(&self, skill: &str, raw_input: Value) -> Result<Value> {
        let (handler, output_schema, input) = self.prepare(skill, raw_input)?;
        let raw_output = handler
            .handle(skill, input)
            .await
            .map_err(|source| Error::Handler { source })?;
        self.check_output(skill, &output_schema, &raw_output)
    }

    /// Invoke a skill, racing the handler against a cancellation future.
    ///
    /// If `cancel` completes first the invocation returns
    /// [`Error::Cancelled`] and the in-flight handler future is dropped;
    /// any cleanup it needs is the handler's own responsibility. Input
    /// validation failures are reported even when cancellation is already
    /// pending, since they are computed before the handler starts.
    pub async fn invoke_with_cancel<C>(
        &self,
        skill: &str,
        raw_input: Value,
        cancel: C,
    ) -> Result<Value>
    where
        C: Future<Output = ()>,
    {
        let (handler, output_schema, input) = self.prepare(skill, raw_input)?;
        tokio::pin!(cancel);
        let raw_output = tokio::select! {
            biased;
            _ = &mut cancel => return Err(Error::Cancelled),
            result = handler.handle(skill, input) => {
                result.map_err(|source| Error::Handler { source })?
            }
        };
        self.check_output(skill, &output_schema, &raw_output)
    }

    /// Resolve schemas and handler, and validate the raw input.
    ///
    /// An unknown skill is reported before the handler map is consulted, so
    /// `invoke("unknown_skill", ...)` never touches any handler.
    fn prepare(
        &self,
        skill: &str,
        raw_input: Value,
    ) -> Result<(Arc<dyn SkillHandler>, Arc<Schema>, Value)> {
        let input_schema = self.registry.lookup(skill, Direction::Input)?;
        let output_schema = self.registry.lookup(skill, Direction::Output)?;

        let input = Normalizer::new(&input_schema)
            .normalize(&raw_input)
            .map_err(|failure| Error::InputValidation {
                skill: skill.to_string(),
                violations: failure.violations,
            })?;

        let handler = self
            .handlers
            .get(skill)
            .cloned()
            .ok_or_else(|| Error::HandlerNotBound {
                skill: skill.to_string(),
            })?;

        debug!(skill, "dispatching validated input to skill handler");
        Ok((handler, output_schema, input))
    }

    fn check_output(&self, skill: &str, schema: &Schema, raw_output: &Value) -> Result<Value> {
        Normalizer::new(schema)
            .normalize(raw_output)
            .map_err(|failure| {
                // The handler broke its own contract; make sure operators see it.
                warn!(
                    skill,
                    violations = failure.violations.len(),
                    "skill handler returned a non-conformant payload"
                );
                Error::OutputValidation {
                    skill: skill.to_string(),
                    violations: failure.violations,
                }
            })
    }
}
