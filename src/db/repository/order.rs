//! Order Repository

use super::RepoResult;
use crate::db::Store;
use crate::db::models::Order;

#[derive(Debug, Clone)]
pub struct OrderRepository {
    store: Store,
}

impl OrderRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Find all orders, in id order
    pub fn find_all(&self) -> RepoResult<Vec<Order>> {
        Ok(self.store.read().orders.values().cloned().collect())
    }

    /// Find all orders belonging to a user
    pub fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Order>> {
        Ok(self
            .store
            .read()
            .orders
            .values()
            .filter(|o| o.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Count all orders
    pub fn count(&self) -> RepoResult<u64> {
        Ok(self.store.read().orders.len() as u64)
    }
}
