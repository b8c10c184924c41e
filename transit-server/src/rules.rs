//! Rule configuration and application.
//!
//! Rules adjust the built network before routing, in a fixed order:
//! explicitly blocked stations are removed first, then every station
//! whose status is closed, and finally (when enabled) an
//! accessibility penalty is applied to each segment arriving at an
//! inaccessible station. A removed station stays removed; later
//! passes never resurrect it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::StationId;
use crate::network::Network;

/// Caller-supplied routing rules.
///
/// Penalty values are accepted as configured. Negative values are not
/// rejected, but they break the non-negative-weight assumption the
/// router's optimality rests on; see [`crate::router`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Stations to remove from the network unconditionally.
    pub blocked_stations: HashSet<StationId>,

    /// Whether to penalize arrival at inaccessible stations.
    pub prefer_accessible: bool,

    /// Minutes added to each segment entering an inaccessible
    /// station when `prefer_accessible` is set.
    pub inaccessible_penalty_mins: f64,

    /// Minutes added per line change along a computed route. Consumed
    /// by the router, not by rule application.
    pub transfer_penalty_mins: f64,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            blocked_stations: HashSet::new(),
            prefer_accessible: true,
            inaccessible_penalty_mins: 100.0,
            transfer_penalty_mins: 3.0,
        }
    }
}

/// Apply a rule configuration to a network in place.
///
/// Idempotent: applying the same configuration twice leaves the
/// network exactly as after the first application. Removing a station
/// that is not present is a no-op.
pub fn apply_rules(network: &mut Network, rules: &RuleConfig) {
    let before = network.station_count();

    for blocked in &rules.blocked_stations {
        network.remove_station(blocked);
    }

    let closed: Vec<StationId> = network
        .stations()
        .filter(|attrs| attrs.is_closed())
        .map(|attrs| attrs.id.clone())
        .collect();
    for id in &closed {
        network.remove_station(id);
    }

    if rules.prefer_accessible {
        let inaccessible: HashSet<StationId> = network
            .stations()
            .filter(|attrs| !attrs.accessible)
            .map(|attrs| attrs.id.clone())
            .collect();
        for (_, to, segment) in network.segments_mut() {
            if inaccessible.contains(to) {
                // Overwrite rather than add, so re-application cannot
                // stack penalties.
                segment.penalty_minutes = rules.inaccessible_penalty_mins;
            }
        }
    }

    info!(
        removed = before - network.station_count(),
        stations = network.station_count(),
        segments = network.segment_count(),
        "rules applied"
    );
}
