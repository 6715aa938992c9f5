//! Order Model
//!
//! An order carries its items inline; each item references a product by id.
//! The product reference is a tagged option: an item may point at a deleted
//! or missing product and still be a valid row.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Payment status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Unpaid,
    Paid,
    Refunded,
}

/// Order status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Shipping,
    Delivered,
    Cancelled,
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: i64,
    /// Owning user reference
    pub user_id: i64,
    pub fullname: String,
    pub email: String,
    pub phone_number: String,
    pub delivery_address: String,
    pub order_date: NaiveDateTime,
    #[serde(default)]
    pub delivery_date: Option<NaiveDate>,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    pub total_amount: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// Order item entity (a line within an order)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub id: i64,
    /// Referenced product; `None` when the product was deleted or never set
    #[serde(default)]
    pub product_id: Option<i64>,
    pub quantity: i32,
    pub unit_price: f64,
    pub subtotal: f64,
}
