//! Snapshot Store
//!
//! Process-local stand-in for the persistence collaborator. Holds one table
//! per entity behind a single read-write lock; the reporting engine only
//! ever takes read access, so concurrent report calls do not contend with
//! each other.
//!
//! A store can be seeded from a JSON dataset file at startup (`DATA_FILE`)
//! or populated directly in tests.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use parking_lot::{RwLock, RwLockReadGuard};
use serde::Deserialize;

use super::models::{Booking, Category, Order, Product, ProductType, User};

/// All entity tables, keyed by entity id
#[derive(Debug, Default)]
pub struct Tables {
    pub users: BTreeMap<i64, User>,
    pub products: BTreeMap<i64, Product>,
    pub categories: BTreeMap<i64, Category>,
    pub product_types: BTreeMap<i64, ProductType>,
    pub orders: BTreeMap<i64, Order>,
    pub bookings: BTreeMap<i64, Booking>,
}

/// Shared handle to the entity tables
///
/// Cloning is cheap (Arc); all clones see the same data.
#[derive(Debug, Clone, Default)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a JSON dataset file
    pub fn from_json_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file {}", path.display()))?;
        let dataset: Dataset = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse dataset file {}", path.display()))?;
        let store = Self::new();
        store.load_dataset(dataset);
        Ok(store)
    }

    /// Replace table contents with the given dataset
    pub fn load_dataset(&self, dataset: Dataset) {
        let mut tables = self.tables.write();
        tables.users = dataset.users.into_iter().map(|u| (u.id, u)).collect();
        tables.products = dataset.products.into_iter().map(|p| (p.id, p)).collect();
        tables.categories = dataset.categories.into_iter().map(|c| (c.id, c)).collect();
        tables.product_types = dataset
            .product_types
            .into_iter()
            .map(|t| (t.id, t))
            .collect();
        tables.orders = dataset.orders.into_iter().map(|o| (o.id, o)).collect();
        tables.bookings = dataset.bookings.into_iter().map(|b| (b.id, b)).collect();
    }

    /// Take shared read access to the tables
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read()
    }

    // ========== Seeding helpers ==========

    pub fn insert_user(&self, user: User) {
        self.tables.write().users.insert(user.id, user);
    }

    pub fn insert_product(&self, product: Product) {
        self.tables.write().products.insert(product.id, product);
    }

    pub fn insert_category(&self, category: Category) {
        self.tables.write().categories.insert(category.id, category);
    }

    pub fn insert_product_type(&self, product_type: ProductType) {
        self.tables
            .write()
            .product_types
            .insert(product_type.id, product_type);
    }

    pub fn insert_order(&self, order: Order) {
        self.tables.write().orders.insert(order.id, order);
    }

    pub fn insert_booking(&self, booking: Booking) {
        self.tables.write().bookings.insert(booking.id, booking);
    }
}

/// JSON dataset shape accepted by [`Store::from_json_file`]
///
/// Every table is optional; absent tables load empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Dataset {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub product_types: Vec<ProductType>,
    pub orders: Vec<Order>,
    pub bookings: Vec<Booking>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dataset_round_trip_through_file() {
        let json = r#"{
            "users": [{ "id": 1, "username": "an" }],
            "categories": [{ "id": 1, "name": "Main" }],
            "productTypes": [{ "id": 1, "name": "Noodles" }],
            "products": [{ "id": 7, "name": "Pho", "categoryId": 1, "productTypeId": 1 }]
        }"#;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let store = Store::from_json_file(file.path()).unwrap();
        let tables = store.read();
        assert_eq!(tables.users.len(), 1);
        assert_eq!(tables.products[&7].name, "Pho");
        assert_eq!(tables.products[&7].product_type_id, Some(1));
        assert!(tables.orders.is_empty());
    }

    #[test]
    fn test_missing_dataset_file_is_an_error() {
        assert!(Store::from_json_file("/nonexistent/dataset.json").is_err());
    }
}
