//! Booking Repository

use super::{RepoError, RepoResult};
use crate::db::Store;
use crate::db::models::Booking;

#[derive(Debug, Clone)]
pub struct BookingRepository {
    store: Store,
}

impl BookingRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all bookings, in id order
    pub fn find_all(&self) -> RepoResult<Vec<Booking>> {
        Ok(self.store.read().bookings.values().cloned().collect())
    }

    /// Find all bookings made by the user with the given username
    pub fn find_by_username(&self, username: &str) -> RepoResult<Vec<Booking>> {
        let tables = self.store.read();
        let user = tables
            .users
            .values()
            .find(|u| u.username == username)
            .ok_or_else(|| RepoError::NotFound(format!("User '{}' not found", username)))?;
        Ok(tables
            .bookings
            .values()
            .filter(|b| b.user_id == user.id)
            .cloned()
            .collect())
    }

    /// Count all bookings
    pub fn count(&self) -> RepoResult<u64> {
        Ok(self.store.read().bookings.len() as u64)
    }
}
