//! User Repository

use super::RepoResult;
use crate::db::Store;
use crate::db::models::User;

#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Store,
}

impl UserRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all users, in id order
    pub fn find_all(&self) -> RepoResult<Vec<User>> {
        Ok(self.store.read().users.values().cloned().collect())
    }

    /// Find a user by id
    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        Ok(self.store.read().users.get(&id).cloned())
    }

    /// Count all users
    pub fn count(&self) -> RepoResult<u64> {
        Ok(self.store.read().users.len() as u64)
    }
}
