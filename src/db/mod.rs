//! Data Layer
//!
//! In-memory snapshot store plus the read repositories the reporting engine
//! consumes. The engine treats this layer as an external collaborator: it
//! only ever reads, and every failure propagates as a [`repository::RepoError`].

pub mod models;
pub mod repository;
pub mod store;

pub use store::{Dataset, Store};
