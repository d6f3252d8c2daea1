//! Error types for the Capwire core library
//!
//! This module defines the error taxonomy for registry setup and skill
//! dispatch, using thiserror for ergonomic error definitions and anyhow for
//! opaque handler failures.

use thiserror::Error;

use capwire_schemas::{SchemaError, Violation};

use crate::registry::Direction;

/// Main error type for Capwire operations
#[derive(Error, Debug)]
pub enum Error {
    /// No schema is registered for the requested skill — fatal, not retried
    #[error("unknown skill `{skill}`")]
    UnknownSkill { skill: String },

    /// A `(skill, direction)` pair was registered twice — init-time misuse
    #[error("schema for `{skill}` ({direction}) is already registered")]
    DuplicateSchema { skill: String, direction: Direction },

    /// Registration was attempted after the registry was sealed
    #[error("registry is sealed; cannot register `{skill}`")]
    RegistrySealed { skill: String },

    /// A skill schema failed its construction invariants
    #[error("schema construction failed")]
    Schema(#[from] SchemaError),

    /// The skill has schemas but no handler was bound — a wiring defect,
    /// distinct from a caller asking for a skill that does not exist
    #[error("no handler bound for skill `{skill}`")]
    HandlerNotBound { skill: String },

    /// The client's request payload does not conform to the input schema.
    /// Surfaced verbatim to the caller; never retried automatically.
    #[error("input for `{skill}` failed validation with {} violation(s)", violations.len())]
    InputValidation {
        skill: String,
        violations: Vec<Violation>,
    },

    /// The handler's response does not conform to the output schema. This is
    /// a server-side contract breach, not a client error.
    #[error("output of `{skill}` failed validation with {} violation(s)", violations.len())]
    OutputValidation {
        skill: String,
        violations: Vec<Violation>,
    },

    /// Opaque failure from the skill handler, propagated unchanged.
    /// Retries, if any, are the handler's own responsibility.
    #[error("skill handler failed")]
    Handler {
        #[source]
        source: anyhow::Error,
    },

    /// The caller cancelled the invocation before the handler completed
    #[error("invocation cancelled before the handler completed")]
    Cancelled,
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Violations carried by a validation error, if this is one
    pub fn violations(&self) -> Option<&[Violation]> {
        match self {
            Error::InputValidation { violations, .. }
            | Error::OutputValidation { violations, .. } => Some(violations),
            _ => None,
        }
    }

    /// True for errors caused by the client's request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::UnknownSkill { .. } | Error::InputValidation { .. }
        )
    }
}
