pub mod error;
pub mod health;
pub mod loans;
pub mod members;
pub mod tools;

use axum::{
    routing::{get, put},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Tools
        .route("/tools", get(tools::list_tools).post(tools::create_tool))
        .route(
            "/tools/:id",
            get(tools::get_tool)
                .put(tools::update_tool)
                .delete(tools::delete_tool),
        )
        // Members
        .route(
            "/members",
            get(members::list_members).post(members::create_member),
        )
        .route(
            "/members/:id",
            get(members::get_member)
                .put(members::update_member)
                .delete(members::delete_member),
        )
        // Loans
        .route("/loans", get(loans::list_loans).post(loans::create_loan))
        .route(
            "/loans/:id",
            get(loans::get_loan)
                .put(loans::update_loan)
                .delete(loans::delete_loan),
        )
        .route("/loans/:id/return", put(loans::return_loan))
        .with_state(state)
}
