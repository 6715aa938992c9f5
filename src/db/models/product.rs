//! Product Model

use serde::{Deserialize, Serialize};

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub image: String,
    /// Record link to category
    pub category_id: i64,
    /// Record link to product type; not every product carries one
    #[serde(default)]
    pub product_type_id: Option<i64>,
}
