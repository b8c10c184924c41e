//! Route description and summary.
//!
//! Thin presentation pass over a computed route: looks up the single
//! surviving segment for each consecutive station pair and renders a
//! per-leg breakdown with a transfer count. Build-time merging and
//! rule application guarantee at most one segment per ordered pair,
//! so the segment found here is the one the router travelled.

use std::fmt::Write;

use crate::domain::{LineId, StationId, TransitMode};
use crate::network::Network;
use crate::router::RouteResult;

/// Message rendered when no route exists under the current rules.
pub const NO_ROUTE_MESSAGE: &str = "No route available under the current rules.";

/// One leg of a described route.
#[derive(Debug, Clone, PartialEq)]
pub struct LegSummary {
    pub from: StationId,
    pub to: StationId,
    pub line: LineId,
    pub mode: TransitMode,
    pub operator: String,
    pub minutes: f64,
}

/// Resolve a route's station sequence into per-leg summaries.
///
/// Consecutive pairs without a segment are skipped; this does not
/// happen for routes produced by the router against the same network.
pub fn legs(network: &Network, route: &RouteResult) -> Vec<LegSummary> {
    route
        .stations
        .windows(2)
        .filter_map(|pair| {
            let segment = network.segment(&pair[0], &pair[1])?;
            Some(LegSummary {
                from: pair[0].clone(),
                to: pair[1].clone(),
                line: segment.line.clone(),
                mode: segment.mode,
                operator: segment.operator.clone(),
                minutes: segment.minutes(),
            })
        })
        .collect()
}

/// Count line changes along a sequence of legs.
pub fn transfer_count(legs: &[LegSummary]) -> usize {
    legs.windows(2)
        .filter(|pair| pair[0].line != pair[1].line)
        .count()
}

/// Render a route as a multi-line human-readable description.
///
/// Returns the fixed no-route message when `route` is `None`.
pub fn describe(network: &Network, route: Option<&RouteResult>) -> String {
    let Some(route) = route else {
        return NO_ROUTE_MESSAGE.to_string();
    };

    let legs = legs(network, route);
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Route found (estimated cost): {:.2} minutes",
        route.total_minutes
    );
    let _ = writeln!(out, "Estimated transfers: {}", transfer_count(&legs));
    for leg in &legs {
        let _ = writeln!(
            out,
            "{} -> {} via {} ({:.2} min, {}, {})",
            leg.from, leg.to, leg.line, leg.minutes, leg.mode, leg.operator
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Segment;

    fn network_with_line(stops: &[&str], line: &str, minutes: f64) -> Network {
        use crate::domain::{Coordinates, StationAttributes, StationStatus};
        let mut network = Network::new();
        for name in stops {
            network.add_station(StationAttributes {
                id: StationId::from(*name),
                coordinates: Coordinates { lat: 0.0, lon: 0.0 },
                status: StationStatus::Open,
                accessible: true,
            });
        }
        for pair in stops.windows(2) {
            network.insert_segment(
                &StationId::from(pair[0]),
                &StationId::from(pair[1]),
                Segment::new(
                    LineId::new(line),
                    TransitMode::Trunk,
                    "Transmilenio S.A.".to_string(),
                    minutes,
                ),
            );
        }
        network
    }

    fn route(stations: &[&str], total: f64) -> RouteResult {
        RouteResult {
            total_minutes: total,
            stations: stations.iter().map(|s| StationId::from(*s)).collect(),
        }
    }

    #[test]
    fn legs_follow_the_path() {
        let network = network_with_line(&["A", "B", "C"], "L1", 5.0);
        let summaries = legs(&network, &route(&["A", "B", "C"], 10.0));

        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].from, StationId::new("A"));
        assert_eq!(summaries[0].to, StationId::new("B"));
        assert_eq!(summaries[0].line, LineId::new("L1"));
        assert_eq!(summaries[0].minutes, 5.0);
        assert_eq!(summaries[1].operator, "Transmilenio S.A.");
    }

    #[test]
    fn transfer_count_counts_line_changes() {
        let mk = |line: &str| LegSummary {
            from: StationId::new("X"),
            to: StationId::new("Y"),
            line: LineId::new(line),
            mode: TransitMode::Urban,
            operator: "Op".to_string(),
            minutes: 1.0,
        };
        assert_eq!(transfer_count(&[]), 0);
        assert_eq!(transfer_count(&[mk("L1")]), 0);
        assert_eq!(transfer_count(&[mk("L1"), mk("L1"), mk("L2")]), 1);
        assert_eq!(transfer_count(&[mk("L1"), mk("L2"), mk("L1")]), 2);
    }

    #[test]
    fn describe_renders_cost_transfers_and_legs() {
        let network = network_with_line(&["A", "B"], "L1", 5.0);
        let text = describe(&network, Some(&route(&["A", "B"], 5.0)));

        assert!(text.contains("Route found (estimated cost): 5.00 minutes"));
        assert!(text.contains("Estimated transfers: 0"));
        assert!(text.contains("A -> B via L1 (5.00 min, trunk, Transmilenio S.A.)"));
    }

    #[test]
    fn describe_without_route_uses_fixed_message() {
        let network = network_with_line(&["A", "B"], "L1", 5.0);
        assert_eq!(describe(&network, None), NO_ROUTE_MESSAGE);
    }

    #[test]
    fn single_station_route_has_no_legs() {
        let network = network_with_line(&["A", "B"], "L1", 5.0);
        let text = describe(&network, Some(&route(&["A"], 0.0)));
        assert!(text.contains("Estimated transfers: 0"));
        assert!(!text.contains("via"));
    }
}
