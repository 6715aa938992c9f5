//! Product Repository

use super::RepoResult;
use crate::db::Store;
use crate::db::models::Product;

#[derive(Debug, Clone)]
pub struct ProductRepository {
    store: Store,
}

impl ProductRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all products, in id order
    pub fn find_all(&self) -> RepoResult<Vec<Product>> {
        Ok(self.store.read().products.values().cloned().collect())
    }

    /// Find a product by id
    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<Product>> {
        Ok(self.store.read().products.get(&id).cloned())
    }
}
