//! Product Type Repository

use super::RepoResult;
use crate::db::Store;
use crate::db::models::ProductType;

#[derive(Debug, Clone)]
pub struct ProductTypeRepository {
    store: Store,
}

impl ProductTypeRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all product types, in id order
    pub fn find_all(&self) -> RepoResult<Vec<ProductType>> {
        Ok(self.store.read().product_types.values().cloned().collect())
    }

    /// Find a product type by id
    pub fn find_by_id(&self, id: i64) -> RepoResult<Option<ProductType>> {
        Ok(self.store.read().product_types.get(&id).cloned())
    }

    /// Count all product types
    pub fn count(&self) -> RepoResult<u64> {
        Ok(self.store.read().product_types.len() as u64)
    }
}
