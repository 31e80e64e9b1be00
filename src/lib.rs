pub mod aggregator;
pub mod api;
pub mod config;
pub mod demo;
pub mod error;
pub mod filter;
pub mod models;
pub mod registry;
pub mod sources;

use std::sync::Arc;
use aggregator::Aggregator;
use config::Config;
use registry::SourceRegistry;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub aggregator: Arc<Aggregator>,
}

impl AppState {
    /// Wires the real upstream sources using credentials from `config`.
    pub fn from_config(config: &Config) -> Self {
        let registry = Arc::new(SourceRegistry::from_config(config));
        let aggregator = Aggregator::new(registry, config.upstream_timeout);
        AppState {
            aggregator: Arc::new(aggregator),
        }
    }
}
