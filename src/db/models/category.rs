//! Category Model

use serde::{Deserialize, Serialize};

/// Category lookup entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
