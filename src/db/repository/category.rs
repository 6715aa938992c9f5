//! Category Repository

use super::RepoResult;
use crate::db::Store;
use crate::db::models::Category;

#[derive(Debug, Clone)]
pub struct CategoryRepository {
    store: Store,
}

impl CategoryRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all categories, in id order
    pub fn find_all(&self) -> RepoResult<Vec<Category>> {
        Ok(self.store.read().categories.values().cloned().collect())
    }
}
