//! Server state

use crate::core::Config;
use crate::db::Store;
use crate::services::StatisticsService;

/// Server state - shared handles for the whole application
///
/// Cloning is cheap: the store and the service's repositories share one Arc.
/// The reporting service acquires its read collaborators once here and holds
/// them immutably for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ServerState {
    /// Server configuration (immutable)
    pub config: Config,
    /// Entity snapshot store
    pub store: Store,
    /// Reporting engine
    pub stats: StatisticsService,
}

impl ServerState {
    pub fn new(config: Config, store: Store) -> Self {
        let stats = StatisticsService::new(store.clone());
        Self {
            config,
            store,
            stats,
        }
    }

    /// Build state from config alone, seeding the store from `DATA_FILE`
    /// when one is configured
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store = match &config.data_file {
            Some(path) => {
                tracing::info!(path = %path, "Seeding snapshot store from dataset file");
                Store::from_json_file(path)?
            }
            None => {
                tracing::warn!("No DATA_FILE configured, starting with an empty store");
                Store::new()
            }
        };
        Ok(Self::new(config.clone(), store))
    }
}
