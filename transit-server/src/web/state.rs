//! Application state for the web layer.

use std::sync::Arc;

use crate::network::Network;
use crate::rules::RuleConfig;

/// Shared application state.
///
/// Holds the rule-adjusted network. Routing never mutates the graph,
/// so it is shared read-only across request handlers; changing the
/// rules means rebuilding the state with a freshly adjusted network.
#[derive(Clone)]
pub struct AppState {
    /// The network after rule application.
    pub network: Arc<Network>,

    /// The rules the network was adjusted with (the router reads the
    /// transfer penalty from here).
    pub rules: Arc<RuleConfig>,
}

impl AppState {
    /// Create app state from an already rule-adjusted network.
    pub fn new(network: Network, rules: RuleConfig) -> Self {
        Self {
            network: Arc::new(network),
            rules: Arc::new(rules),
        }
    }
}
