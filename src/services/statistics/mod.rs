//! Statistics Service
//!
//! The reporting engine behind the admin dashboard. Every view is computed
//! on demand as a pure function of the current table contents: load the
//! relevant collections, build intermediate maps, sort and truncate to the
//! caller's limit. No state is kept between calls and no entity is mutated.
//!
//! The only anomaly handled locally is an order item whose product reference
//! is null or dangling: the item is skipped with a diagnostic and the
//! aggregation continues. Everything else (missing users, store failures)
//! propagates as a [`RepoError`].

use std::collections::{HashMap, HashSet};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::db::Store;
use crate::db::models::{Category, Order, OrderItem, Product, ProductType};
use crate::db::repository::{
    BookingRepository, CategoryRepository, OrderRepository, ProductRepository,
    ProductTypeRepository, RepoError, RepoResult, UserRepository,
};

/// Placeholder shown for a user with no order history
const NO_ORDERS_PLACEHOLDER: &str = "Không có đơn hàng";
/// Placeholder shown for a user with no booking history
const NO_BOOKINGS_PLACEHOLDER: &str = "Không có đặt bàn";

/// Monetary amounts are rounded to 2 decimal places on the way out
const DECIMAL_PLACES: u32 = 2;

// ============================================================================
// View Types
// ============================================================================

/// One ranked dish: the first-encountered item's descriptive fields plus the
/// quantity accumulated across every order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishStat {
    /// Id of the first-encountered order item for this product
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    /// Quantity of the first-encountered item, not the accumulated total
    pub quantity: i32,
    pub product_image: String,
    pub unit_price: f64,
    pub subtotal: f64,
    pub total_ordered: i32,
}

/// One ranked user with rendered order/booking history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStat {
    pub username: String,
    pub orders: String,
    pub bookings: String,
    pub total_spending: f64,
}

/// Scalar counts and sums over the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickSummary {
    pub total_dishes: u64,
    pub total_users: u64,
    pub total_bookings: u64,
    pub total_orders: u64,
    pub total_revenue: f64,
    pub total_product_types: u64,
}

// ============================================================================
// Service
// ============================================================================

/// The reporting engine
///
/// Holds its read collaborators immutably; construction is the only setup.
#[derive(Debug, Clone)]
pub struct StatisticsService {
    orders: OrderRepository,
    bookings: BookingRepository,
    users: UserRepository,
    products: ProductRepository,
    categories: CategoryRepository,
    product_types: ProductTypeRepository,
}

impl StatisticsService {
    pub fn new(store: Store) -> Self {
        Self {
            orders: OrderRepository::new(store.clone()),
            bookings: BookingRepository::new(store.clone()),
            users: UserRepository::new(store.clone()),
            products: ProductRepository::new(store.clone()),
            categories: CategoryRepository::new(store.clone()),
            product_types: ProductTypeRepository::new(store),
        }
    }

    // ========================================================================
    // Top Dishes
    // ========================================================================

    /// Products ranked by cumulative ordered quantity, best first
    ///
    /// Scans every item of every order once, accumulating quantities per
    /// product while recording the first-encountered item as the
    /// representative detail row. Items with a null or dangling product
    /// reference are skipped with a warning. `limit` is coerced to at
    /// least 1.
    pub fn top_dishes(&self, limit: i32) -> RepoResult<Vec<DishStat>> {
        let orders = self.orders.find_all()?;

        let mut quantities: HashMap<i64, i32> = HashMap::new();
        let mut details: HashMap<i64, DishStat> = HashMap::new();

        for order in &orders {
            for item in &order.items {
                let Some(product) = self.resolve_product(item)? else {
                    warn!(item_id = item.id, "Order item has null product, skipping");
                    continue;
                };

                *quantities.entry(product.id).or_insert(0) += item.quantity;

                details.entry(product.id).or_insert_with(|| DishStat {
                    id: item.id,
                    product_id: product.id,
                    product_name: product.name.clone(),
                    quantity: item.quantity,
                    product_image: product.image.clone(),
                    unit_price: item.unit_price,
                    subtotal: item.subtotal,
                    total_ordered: 0,
                });
            }
        }

        // Ties keep the accumulator map's iteration order; no tie order is
        // guaranteed across runs
        let mut ranked: Vec<(i64, i32)> = quantities.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(ranked
            .into_iter()
            .take(limit.max(1) as usize)
            .filter_map(|(product_id, total_ordered)| {
                details.remove(&product_id).map(|mut stat| {
                    stat.total_ordered = total_ordered;
                    stat
                })
            })
            .collect())
    }

    // ========================================================================
    // Recent Activities
    // ========================================================================

    /// Merged order/booking event feed rendered as text lines
    ///
    /// The latest `limit` orders and latest `limit` bookings are rendered
    /// independently, then the combined lines are re-sorted in reverse
    /// lexicographic string order (not chronologically; kept that way for
    /// output compatibility with existing dashboards) and truncated to
    /// `max(1, limit)`.
    pub fn recent_activities(&self, limit: i32) -> RepoResult<Vec<String>> {
        let take = limit.max(0) as usize;

        let mut recent_orders = self.orders.find_all()?;
        recent_orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        recent_orders.truncate(take);

        let mut recent_bookings = self.bookings.find_all()?;
        recent_bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent_bookings.truncate(take);

        let mut activities = Vec::with_capacity(recent_orders.len() + recent_bookings.len());

        for order in &recent_orders {
            let username = self.username_of(order.user_id)?;
            let items = self.render_item_fragments(std::slice::from_ref(order))?;
            activities.push(format!(
                "User {} đặt đơn hàng: {} vào {}",
                username,
                items,
                order.order_date.format("%Y-%m-%dT%H:%M:%S"),
            ));
        }

        for booking in &recent_bookings {
            let username = self.username_of(booking.user_id)?;
            activities.push(format!(
                "User {} đặt bàn cho {} người vào {} {}",
                username,
                booking.number_of_guests,
                booking.booking_date,
                booking.booking_time.format("%H:%M:%S"),
            ));
        }

        activities.sort_by(|a, b| b.cmp(a));
        activities.truncate(limit.max(1) as usize);
        Ok(activities)
    }

    // ========================================================================
    // Top Users
    // ========================================================================

    /// Users ranked by total spending, biggest spender first
    ///
    /// Spending is the sum of `total_amount` over exactly that user's
    /// orders, accumulated as decimals. Order and booking histories are
    /// rendered as text, with fixed placeholders when empty.
    pub fn top_users(&self, limit: i32) -> RepoResult<Vec<UserStat>> {
        let users = self.users.find_all()?;
        let mut stats = Vec::with_capacity(users.len());

        for user in users {
            let user_orders = self.orders.find_by_user(user.id)?;

            let total_spending = user_orders
                .iter()
                .fold(Decimal::ZERO, |acc, o| acc + to_decimal(o.total_amount));

            let rendered_orders = self.render_item_fragments(&user_orders)?;
            let orders = if rendered_orders.is_empty() {
                NO_ORDERS_PLACEHOLDER.to_string()
            } else {
                rendered_orders
            };

            let user_bookings = self.bookings.find_by_username(&user.username)?;
            let rendered_bookings = user_bookings
                .iter()
                .map(|b| {
                    format!(
                        "Đặt bàn cho {} người vào {}",
                        b.number_of_guests, b.booking_date
                    )
                })
                .collect::<Vec<_>>()
                .join(", ");
            let bookings = if rendered_bookings.is_empty() {
                NO_BOOKINGS_PLACEHOLDER.to_string()
            } else {
                rendered_bookings
            };

            stats.push(UserStat {
                username: user.username,
                orders,
                bookings,
                total_spending: to_f64(total_spending),
            });
        }

        stats.sort_by(|a, b| b.total_spending.total_cmp(&a.total_spending));
        stats.truncate(limit.max(1) as usize);
        Ok(stats)
    }

    // ========================================================================
    // Quick Summary
    // ========================================================================

    /// Scalar counts and sums over the whole dataset
    ///
    /// `total_dishes` counts distinct products referenced by any order item
    /// (null/dangling references excluded); `total_revenue` sums every
    /// order's total regardless of payment or order status.
    pub fn quick_summary(&self) -> RepoResult<QuickSummary> {
        let orders = self.orders.find_all()?;

        let mut dishes: HashSet<i64> = HashSet::new();
        for order in &orders {
            for item in &order.items {
                if let Some(product) = self.resolve_product(item)? {
                    dishes.insert(product.id);
                }
            }
        }

        let total_revenue = orders
            .iter()
            .fold(Decimal::ZERO, |acc, o| acc + to_decimal(o.total_amount));

        Ok(QuickSummary {
            total_dishes: dishes.len() as u64,
            total_users: self.users.count()?,
            total_bookings: self.bookings.count()?,
            total_orders: self.orders.count()?,
            total_revenue: to_f64(total_revenue),
            total_product_types: self.product_types.count()?,
        })
    }

    // ========================================================================
    // Catalog Passthrough
    // ========================================================================

    /// Full unfiltered category listing
    pub fn all_categories(&self) -> RepoResult<Vec<Category>> {
        self.categories.find_all()
    }

    /// Full unfiltered product type listing
    pub fn all_product_types(&self) -> RepoResult<Vec<ProductType>> {
        self.product_types.find_all()
    }

    // ========================================================================
    // Internal helpers
    // ========================================================================

    /// Resolve an item's product reference
    ///
    /// `None` covers both a null reference and an id no longer present in
    /// the product table (deleted product).
    fn resolve_product(&self, item: &OrderItem) -> RepoResult<Option<Product>> {
        match item.product_id {
            Some(id) => self.products.find_by_id(id),
            None => Ok(None),
        }
    }

    /// Render the items of the given orders as `"Name (xQty) [Type]"`
    /// fragments joined by `", "`, omitting unresolvable products and the
    /// bracketed type when the product carries none
    fn render_item_fragments(&self, orders: &[Order]) -> RepoResult<String> {
        let mut fragments = Vec::new();
        for order in orders {
            for item in &order.items {
                let Some(product) = self.resolve_product(item)? else {
                    continue;
                };

                let mut fragment = format!("{} (x{})", product.name, item.quantity);
                if let Some(type_id) = product.product_type_id
                    && let Some(product_type) = self.product_types.find_by_id(type_id)?
                {
                    fragment.push_str(&format!(" [{}]", product_type.name));
                }
                fragments.push(fragment);
            }
        }
        Ok(fragments.join(", "))
    }

    /// Look up a username; a dangling user reference is fatal for the view
    fn username_of(&self, user_id: i64) -> RepoResult<String> {
        self.users
            .find_by_id(user_id)?
            .map(|u| u.username)
            .ok_or_else(|| RepoError::NotFound(format!("User {} not found", user_id)))
    }
}

// ============================================================================
// Decimal helpers
// ============================================================================

fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}
