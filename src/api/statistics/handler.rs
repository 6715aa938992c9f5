//! Statistics API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use crate::core::ServerState;
use crate::db::models::{Category, ProductType};
use crate::services::{DishStat, QuickSummary, UserStat};
use crate::utils::AppResult;

// Defaults applied when the query omits a limit; no upper bound is enforced
const DEFAULT_TOP_DISHES_LIMIT: i32 = 4;
const DEFAULT_RECENT_ACTIVITIES_LIMIT: i32 = 10;
const DEFAULT_TOP_USERS_LIMIT: i32 = 5;

#[derive(Debug, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<i32>,
}

/// GET /api/statistics/top-dishes - Products ranked by ordered quantity
pub async fn top_dishes(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<DishStat>>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_DISHES_LIMIT);
    tracing::debug!(limit, "Computing top dishes");
    Ok(Json(state.stats.top_dishes(limit)?))
}

/// GET /api/statistics/recent-activities - Merged order/booking event feed
pub async fn recent_activities(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<String>>> {
    let limit = query.limit.unwrap_or(DEFAULT_RECENT_ACTIVITIES_LIMIT);
    tracing::debug!(limit, "Computing recent activities");
    Ok(Json(state.stats.recent_activities(limit)?))
}

/// GET /api/statistics/top-users - Users ranked by total spending
pub async fn top_users(
    State(state): State<ServerState>,
    Query(query): Query<LimitQuery>,
) -> AppResult<Json<Vec<UserStat>>> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_USERS_LIMIT);
    tracing::debug!(limit, "Computing top users");
    Ok(Json(state.stats.top_users(limit)?))
}

/// GET /api/statistics/summary - Quick scalar counts and sums
pub async fn summary(State(state): State<ServerState>) -> AppResult<Json<QuickSummary>> {
    Ok(Json(state.stats.quick_summary()?))
}

/// GET /api/statistics/categories - Full category listing
pub async fn categories(State(state): State<ServerState>) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.stats.all_categories()?))
}

/// GET /api/statistics/product-types - Full product type listing
pub async fn product_types(State(state): State<ServerState>) -> AppResult<Json<Vec<ProductType>>> {
    Ok(Json(state.stats.all_product_types()?))
}
