//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{LoanRepository, MemberRepository, ToolRepository};
use crate::infrastructure::{SeaOrmLoanRepository, SeaOrmMemberRepository, SeaOrmToolRepository};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub tool_repo: Arc<dyn ToolRepository>,
    pub member_repo: Arc<dyn MemberRepository>,
    pub loan_repo: Arc<dyn LoanRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories sharing one connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            tool_repo: Arc::new(SeaOrmToolRepository::new(db.clone())),
            member_repo: Arc::new(SeaOrmMemberRepository::new(db.clone())),
            loan_repo: Arc::new(SeaOrmLoanRepository::new(db)),
        }
    }

    /// Build a state from arbitrary repository implementations
    pub fn with_repositories(
        tool_repo: Arc<dyn ToolRepository>,
        member_repo: Arc<dyn MemberRepository>,
        loan_repo: Arc<dyn LoanRepository>,
    ) -> Self {
        Self {
            tool_repo,
            member_repo,
            loan_repo,
        }
    }
}
