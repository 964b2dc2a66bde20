//! Error taxonomy for the simulation core.
//!
//! `NotFound` and `BusinessRule` are terminal for a single invocation and
//! never leave partial state behind. Model unavailability is not represented
//! here: the probability estimator recovers from it locally and it never
//! reaches a caller (see [`crate::model::ModelUnavailable`]).

use std::fmt;

/// Failure of a persistence collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not durably apply the requested mutation.
    Unavailable(String),
    /// The mutation references records that do not belong together.
    Conflict(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "store unavailable: {msg}"),
            Self::Conflict(msg) => write!(f, "store conflict: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Terminal failure of a simulation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A referenced fighter or event does not exist or is soft-deleted.
    NotFound(String),
    /// The request violates a business rule (self fight, completed event,
    /// empty card, invalid round count).
    BusinessRule(String),
    /// A persistence collaborator failed; nothing was committed.
    Store(StoreError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(what) => write!(f, "{what} not found"),
            Self::BusinessRule(msg) => write!(f, "{msg}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for SimError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}
