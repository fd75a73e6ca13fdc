//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer; services only ever see
//! `&dyn` handles so tests can substitute in-memory doubles.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::loan::{Loan, LoanDetails, NewLoan};
use crate::models::member::{Member, MemberChanges, NewMember};
use crate::models::tool::{NewTool, Tool, ToolChanges};

/// Outcome of a delete that is refused while an open loan references the row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedDelete {
    Deleted,
    Missing,
    HasOpenLoan,
}

/// Repository trait for Tool entity
#[async_trait]
pub trait ToolRepository: Send + Sync {
    /// Find all tools ordered by id, with availability derived from open loans
    async fn find_all(&self) -> Result<Vec<Tool>, DomainError>;

    /// Find a tool by ID
    async fn find_by_id(&self, id: i32) -> Result<Option<Tool>, DomainError>;

    /// Create a new tool
    async fn create(&self, input: NewTool) -> Result<Tool, DomainError>;

    /// Apply a partial update; `None` when the tool does not exist
    async fn update(&self, id: i32, changes: ToolChanges) -> Result<Option<Tool>, DomainError>;

    /// Delete the tool unless an open loan references it
    async fn delete_unless_lent(&self, id: i32) -> Result<GuardedDelete, DomainError>;
}

/// Repository trait for Member entity
#[async_trait]
pub trait MemberRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Member>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Member>, DomainError>;

    /// Create a new member; a duplicate document is a validation error
    async fn create(&self, input: NewMember) -> Result<Member, DomainError>;

    async fn update(&self, id: i32, changes: MemberChanges)
        -> Result<Option<Member>, DomainError>;

    /// Delete the member unless an open loan references them
    async fn delete_unless_borrowing(&self, id: i32) -> Result<GuardedDelete, DomainError>;
}

/// Repository trait for Loan entity
#[async_trait]
pub trait LoanRepository: Send + Sync {
    /// All loans ordered by id, joined with tool and member names
    async fn find_all_with_names(&self) -> Result<Vec<LoanDetails>, DomainError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Loan>, DomainError>;

    /// Insert an open loan dated `loan_date`; unknown tool/member ids surface as
    /// `DomainError::Reference`
    async fn create(&self, input: NewLoan, loan_date: NaiveDate) -> Result<Loan, DomainError>;

    /// Set the return date; `None` when the loan does not exist
    async fn set_return_date(
        &self,
        id: i32,
        return_date: NaiveDate,
    ) -> Result<Option<Loan>, DomainError>;

    async fn update_observations(
        &self,
        id: i32,
        observations: Option<String>,
    ) -> Result<Option<Loan>, DomainError>;

    /// Delete a loan, returning whether a row was removed
    async fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
