//! User Model

use serde::{Deserialize, Serialize};

/// User entity
///
/// The username is unique and used as the display key in rendered activity
/// lines; orders and bookings point back at the user by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
}
