//! Statistics API module
//!
//! Admin-facing reporting endpoints. Authorization is enforced by the
//! deployment boundary in front of this server, not here.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/statistics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/top-dishes", get(handler::top_dishes))
        .route("/recent-activities", get(handler::recent_activities))
        .route("/top-users", get(handler::top_users))
        .route("/summary", get(handler::summary))
        .route("/categories", get(handler::categories))
        .route("/product-types", get(handler::product_types))
}
