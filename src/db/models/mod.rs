//! Entity Models
//!
//! Read-only snapshots of the entities owned by the persistence collaborator.
//! The reporting engine never mutates any of these.

pub mod booking;
pub mod category;
pub mod order;
pub mod product;
pub mod product_type;
pub mod user;

pub use booking::Booking;
pub use category::Category;
pub use order::{Order, OrderItem, OrderStatus, PaymentStatus};
pub use product::Product;
pub use product_type::ProductType;
pub use user::User;
