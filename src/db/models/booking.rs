//! Booking Model

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Table booking entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: i64,
    /// Owning user reference
    pub user_id: i64,
    pub created_at: NaiveDateTime,
    pub booking_date: NaiveDate,
    pub booking_time: NaiveTime,
    pub number_of_guests: i32,
}
