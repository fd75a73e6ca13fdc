pub mod loan;
pub mod member;
pub mod tool;

pub use loan::{Loan, LoanDetails};
pub use member::Member;
pub use tool::{Tool, ToolCondition};

use crate::domain::DomainError;

/// Trim a required text field, rejecting absent or blank values
pub(crate) fn required_text(field: &str, value: Option<String>) -> Result<String, DomainError> {
    match value.map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DomainError::Validation(format!("{} is required", field))),
    }
}

/// Trim an optional text field; blank input counts as absent
pub(crate) fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like `required_text`, but absence is allowed (partial updates)
pub(crate) fn changed_text(field: &str, value: Option<String>) -> Result<Option<String>, DomainError> {
    match value {
        Some(v) => required_text(field, Some(v)).map(Some),
        None => Ok(None),
    }
}
