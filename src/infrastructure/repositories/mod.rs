//! Repository implementations using SeaORM

pub mod loan_repository;
pub mod member_repository;
pub mod tool_repository;

pub use loan_repository::SeaOrmLoanRepository;
pub use member_repository::SeaOrmMemberRepository;
pub use tool_repository::SeaOrmToolRepository;
