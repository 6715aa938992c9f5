//! Repository Module
//!
//! Read-only access to the entity tables, one repository per entity. These
//! are the collaborators the reporting engine holds; it acquires them once
//! at construction and never writes through them.

pub mod booking;
pub mod category;
pub mod order;
pub mod product;
pub mod product_type;
pub mod user;

pub use booking::BookingRepository;
pub use category::CategoryRepository;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use product_type::ProductTypeRepository;
pub use user::UserRepository;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Data source error: {0}")]
    Database(String),
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
