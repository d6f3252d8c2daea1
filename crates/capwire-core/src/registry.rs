//! Schema registry: the authoritative `(skill, direction) -> Schema` map
//!
//! The registry is written during a single-threaded init phase, sealed, and
//! then shared read-only. Sealing is what makes lock-free concurrent lookup
//! sound: after `seal()` no mutation path exists, so any number of readers
//! may hold the registry behind an `Arc` without coordination.
//!
//! Copyright (c) 2025 Capwire Team
//! Licensed under the Apache-2.0 license

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use capwire_schemas::{catalog, Schema};

use crate::error::{Error, Result};

/// Which side of a skill exchange a schema validates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Client request payload
    Input,
    /// Handler response payload
    Output,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Input => write!(f, "input"),
            Direction::Output => write!(f, "output"),
        }
    }
}

/// Registry of skill schemas, immutable after [`seal`](SchemaRegistry::seal)
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    schemas: HashMap<(String, Direction), Arc<Schema>>,
    skills: Vec<String>,
    sealed: bool,
}

impl SchemaRegistry {
    /// Create an empty, unsealed registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding the full CAP skill catalogue, sealed
    pub fn with_catalog() -> Result<Self> {
        let mut registry = Self::new();
        for (skill, input, output) in catalog::entries()? {
            registry.register(skill, Direction::Input, input)?;
            registry.register(skill, Direction::Output, output)?;
        }
        registry.seal();
        Ok(registry)
    }

    /// Register a schema for one skill direction.
    ///
    /// Fails with [`Error::DuplicateSchema`] if the pair is already present
    /// and with [`Error::RegistrySealed`] after sealing.
    pub fn register(&mut self, skill: &str, direction: Direction, schema: Schema) -> Result<()> {
        if self.sealed {
            return Err(Error::RegistrySealed {
                skill: skill.to_string(),
            });
        }
        let key = (skill.to_string(), direction);
        if self.schemas.contains_key(&key) {
            return Err(Error::DuplicateSchema {
                skill: skill.to_string(),
                direction,
            });
        }
        if !self.skills.iter().any(|s| s == skill) {
            self.skills.push(skill.to_string());
        }
        self.schemas.insert(key, Arc::new(schema));
        Ok(())
    }

    /// Freeze the registry; idempotent
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Whether the registry has been sealed
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Look up the schema for one skill direction.
    ///
    /// The returned handle points at the registered schema instance; clones
    /// are reference-count bumps, not copies.
    pub fn lookup(&self, skill: &str, direction: Direction) -> Result<Arc<Schema>> {
        self.schemas
            .get(&(skill.to_string(), direction))
            .cloned()
            .ok_or_else(|| Error::UnknownSkill {
                skill: skill.to_string(),
            })
    }

    /// Whether any schema is registered for the skill
    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|s| s == skill)
    }

    /// Registered skill names, in registration order
    pub fn skills(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }
}
