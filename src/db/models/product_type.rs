//! Product Type Model

use serde::{Deserialize, Serialize};

/// Product type lookup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub id: i64,
    pub name: String,
}
