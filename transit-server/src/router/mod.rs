//! Least-cost routing over the rule-adjusted network.
//!
//! Implements a priority-queue search on the augmented state space
//! `(station, last line used)` so that per-transfer penalties are
//! costed exactly.

mod search;

pub use search::{shortest_route, RouteResult};
