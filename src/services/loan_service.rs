//! Loan Service - the loan lifecycle without the HTTP layer
//!
//! A loan is open from creation until a return date is recorded. Returning is
//! one-way: nothing here ever clears `return_date`.

use chrono::{Local, NaiveDate};

use crate::domain::{DomainError, LoanRepository};
use crate::models::loan::{Loan, LoanDetails, NewLoan};

/// Current local calendar date, used for loan and return dates
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// List all loans with tool and member names
pub async fn list_loans(loans: &dyn LoanRepository) -> Result<Vec<LoanDetails>, DomainError> {
    loans.find_all_with_names().await
}

pub async fn get_loan(loans: &dyn LoanRepository, id: i32) -> Result<Loan, DomainError> {
    loans
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound("Loan"))
}

/// Open a loan dated today. The tool and member ids are checked by storage.
pub async fn create_loan(loans: &dyn LoanRepository, input: NewLoan) -> Result<Loan, DomainError> {
    let loan = loans.create(input, today()).await?;

    tracing::info!(
        loan_id = loan.id,
        tool_id = loan.tool_id,
        member_id = loan.member_id,
        "Loan opened"
    );
    Ok(loan)
}

/// Record today as the return date. Returning an already closed loan moves its
/// return date to today; it never reopens it.
pub async fn mark_returned(loans: &dyn LoanRepository, id: i32) -> Result<Loan, DomainError> {
    let loan = loans
        .set_return_date(id, today())
        .await?
        .ok_or(DomainError::NotFound("Loan"))?;

    tracing::info!(loan_id = loan.id, "Loan returned");
    Ok(loan)
}

pub async fn update_observations(
    loans: &dyn LoanRepository,
    id: i32,
    observations: Option<String>,
) -> Result<Loan, DomainError> {
    loans
        .update_observations(id, observations)
        .await?
        .ok_or(DomainError::NotFound("Loan"))
}

/// Remove a loan whether open or closed
pub async fn delete_loan(loans: &dyn LoanRepository, id: i32) -> Result<(), DomainError> {
    if !loans.delete(id).await? {
        return Err(DomainError::NotFound("Loan"));
    }

    tracing::info!(loan_id = id, "Loan deleted");
    Ok(())
}
