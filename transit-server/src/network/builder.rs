//! Network construction from route records.
//!
//! Builds the directed graph by scanning every record's stop sequence.
//! Overlapping service is merged with a best-observed policy: when two
//! lines cover the same ordered station pair, the segment with the
//! smaller apportioned time wins, and on exact ties the first record
//! processed keeps the segment. Every forward segment also completes
//! the reverse direction when no reverse segment exists yet, since
//! routes are assumed bidirectional unless the opposite direction was
//! already established.

use tracing::{debug, info};

use crate::domain::RouteRecord;
use crate::registry::{AttributeSource, StationRegistry};

use super::graph::{Network, Segment};

/// Build a network from a sequence of route records.
///
/// Never fails: records with fewer than two stops register their
/// stations but contribute no segments.
pub fn build_network<S: AttributeSource>(
    records: &[RouteRecord],
    registry: &mut StationRegistry<S>,
) -> Network {
    let mut network = Network::new();

    // Register every station before any segment is created.
    for record in records {
        for stop in &record.stops {
            let attrs = registry.register(stop).clone();
            network.add_station(attrs);
        }
    }

    for record in records {
        let Some(segment_time) = record.segment_time() else {
            debug!(route = %record.route_id, stops = record.stops.len(),
                "route has fewer than two stops, no segments");
            continue;
        };

        for pair in record.stops.windows(2) {
            let (from, to) = (&pair[0], &pair[1]);
            let candidate = Segment::new(
                record.route_id.clone(),
                record.mode,
                record.operator.clone(),
                segment_time,
            );

            // Strict improvement only: ties keep the first-seen segment.
            let improves = match network.segment(from, to) {
                Some(existing) => segment_time < existing.base_minutes,
                None => true,
            };
            if improves {
                network.insert_segment(from, to, candidate.clone());
            }

            // Reverse completion is independent of the forward merge
            // and never overwrites an established reverse segment.
            if !network.has_segment(to, from) {
                network.insert_segment(to, from, candidate);
            }
        }
    }

    info!(
        stations = network.station_count(),
        segments = network.segment_count(),
        routes = records.len(),
        "network built"
    );
    network
}
