//! Foodee Reporting Server - admin reporting for a food-ordering platform
//!
//! # Architecture overview
//!
//! The server aggregates orders, bookings, users and products into derived
//! dashboard views: top dishes, a recent activity feed, top spenders, quick
//! counts and catalog listings. Each view is a pure, on-demand computation
//! over the current snapshot store; nothing is cached between calls.
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/          # config, state, server
//! ├── db/            # entity models, snapshot store, repositories
//! ├── services/      # the reporting engine
//! ├── api/           # HTTP routes and handlers
//! ├── routes/        # router assembly, middleware, oneshot ext
//! └── utils/         # error types, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use db::{Dataset, Store};
pub use routes::{OneshotRouter, build_app, build_router};
pub use services::{DishStat, QuickSummary, StatisticsService, UserStat};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging from the environment
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
    ______                __
   / ____/___  ____  ____/ /__  ___
  / /_  / __ \/ __ \/ __  / _ \/ _ \
 / __/ / /_/ / /_/ / /_/ /  __/  __/
/_/    \____/\____/\__,_/\___/\___/
    "#
    );
}
