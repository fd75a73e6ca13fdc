//! Services Layer
//!
//! This module contains pure business logic extracted from HTTP handlers.
//! Every function receives the repository it works on, so handlers pass the
//! handles held in `AppState` and tests pass in-memory doubles.

pub mod loan_service;
pub mod member_service;
pub mod tool_service;

#[cfg(test)]
pub(crate) mod fakes;
