//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check (public)
//! - [`statistics`] - admin reporting endpoints

pub mod health;
pub mod statistics;
