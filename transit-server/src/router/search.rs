//! Transfer-aware least-cost search.
//!
//! A plain per-station Dijkstra is unsound here: the true cost of
//! leaving a station depends on which line you arrived on, because
//! continuing on the same line is free while changing lines costs the
//! transfer penalty. The search therefore runs over the augmented
//! state space `(station, last line used)`, with `None` for the
//! origin. Weights are assumed non-negative; with that assumption the
//! first time the destination is popped from the frontier its cost is
//! optimal, whatever line it was reached on.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::domain::{LineId, StationId};
use crate::network::Network;

/// A computed route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Total cost in minutes: travel time, rule penalties, and
    /// transfer penalties.
    pub total_minutes: f64,

    /// Stations visited in order, origin first, destination last.
    pub stations: Vec<StationId>,
}

/// Frontier entry. Ordered by ascending cost so that the binary heap
/// pops the cheapest state first; the path travelled so far is
/// carried on the state.
struct QueueEntry {
    cost: f64,
    station: StationId,
    last_line: Option<LineId>,
    path: Vec<StationId>,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cost.total_cmp(&other.cost) == Ordering::Equal
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want cheapest first.
        other.cost.total_cmp(&self.cost)
    }
}

/// Find the least-cost route between two stations.
///
/// `transfer_penalty_mins` is added whenever two consecutive segments
/// belong to different lines. Returns `None` when either station is
/// absent from the network or no path exists; the two cases are not
/// distinguished.
pub fn shortest_route(
    network: &Network,
    origin: &StationId,
    destination: &StationId,
    transfer_penalty_mins: f64,
) -> Option<RouteResult> {
    if !network.contains_station(origin) || !network.contains_station(destination) {
        debug!(%origin, %destination, "origin or destination not in network");
        return None;
    }

    let mut frontier = BinaryHeap::new();
    frontier.push(QueueEntry {
        cost: 0.0,
        station: origin.clone(),
        last_line: None,
        path: vec![origin.clone()],
    });

    // Best finalized cost per augmented state, for lazy deletion.
    let mut settled: HashMap<(StationId, Option<LineId>), f64> = HashMap::new();
    let mut popped = 0usize;

    while let Some(entry) = frontier.pop() {
        popped += 1;

        if &entry.station == destination {
            debug!(cost = entry.cost, states = popped, "route found");
            return Some(RouteResult {
                total_minutes: entry.cost,
                stations: entry.path,
            });
        }

        let key = (entry.station.clone(), entry.last_line.clone());
        if settled.get(&key).is_some_and(|&best| best <= entry.cost) {
            continue;
        }
        settled.insert(key, entry.cost);

        for (neighbor, segment) in network.outgoing(&entry.station) {
            let transfer = match &entry.last_line {
                Some(line) if *line != segment.line => transfer_penalty_mins,
                _ => 0.0,
            };
            let cost = entry.cost + segment.minutes() + transfer;

            let next_key = (neighbor.clone(), Some(segment.line.clone()));
            if settled.get(&next_key).is_none_or(|&best| best > cost) {
                let mut path = entry.path.clone();
                path.push(neighbor.clone());
                frontier.push(QueueEntry {
                    cost,
                    station: neighbor.clone(),
                    last_line: Some(segment.line.clone()),
                    path,
                });
            }
        }
    }

    debug!(%origin, %destination, states = popped, "no route");
    None
}
