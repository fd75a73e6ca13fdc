//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The HTTP layer maps each variant onto a status code.

use std::fmt;

use sea_orm::{DbErr, SqlErr};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Missing or malformed input
    Validation(String),
    /// The named resource does not exist
    NotFound(&'static str),
    /// The operation is blocked by the current state (e.g. an active loan)
    Conflict(String),
    /// A referenced tool or member does not exist
    Reference(String),
    /// Database/persistence error
    Database(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DomainError::NotFound(what) => write!(f, "{} not found", what),
            DomainError::Conflict(msg) => write!(f, "{}", msg),
            DomainError::Reference(msg) => write!(f, "Invalid reference: {}", msg),
            DomainError::Database(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Constraint violations raised by SQLite are classified before falling back to a
// generic database error.
impl From<DbErr> for DomainError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(msg)) => {
                DomainError::Validation(format!("duplicate value ({})", msg))
            }
            Some(SqlErr::ForeignKeyConstraintViolation(_)) => {
                DomainError::Reference("tool or member does not exist".to_string())
            }
            _ => DomainError::Database(e.to_string()),
        }
    }
}
