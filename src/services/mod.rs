//! Service Layer

pub mod statistics;

pub use statistics::{DishStat, QuickSummary, StatisticsService, UserStat};
