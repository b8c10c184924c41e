//! Route record types.
//!
//! A route record describes one transit line: its ordered stop
//! sequence and the total scheduled travel time end to end. Records
//! are the sole input to network construction; where the time for an
//! individual hop is needed, the total is apportioned uniformly
//! across the consecutive stop pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::station::StationId;

/// Identifier of a transit line (one route record's `route_id`).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    /// Create a line id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the line id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LineId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineId({})", self.0)
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Service mode of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    /// High-capacity trunk corridor service.
    Trunk,
    /// Feeder service into a trunk corridor.
    Feeder,
    /// Regular urban bus service.
    Urban,
    /// Complementary zonal service.
    Complementary,
    /// Aerial cable car service.
    Cable,
}

impl fmt::Display for TransitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TransitMode::Trunk => "trunk",
            TransitMode::Feeder => "feeder",
            TransitMode::Urban => "urban",
            TransitMode::Complementary => "complementary",
            TransitMode::Cable => "cable",
        };
        f.write_str(s)
    }
}

/// One transit route as supplied by the feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteRecord {
    /// Unique route identifier; becomes the line id on segments.
    pub route_id: LineId,

    /// Service mode.
    pub mode: TransitMode,

    /// Operating company.
    pub operator: String,

    /// Stations visited, in order. Must have at least one entry; a
    /// record with fewer than two stops contributes no segments.
    pub stops: Vec<StationId>,

    /// Total scheduled travel time over the whole route, in minutes.
    pub total_travel_time_mins: f64,
}

impl RouteRecord {
    /// Travel time for each consecutive stop pair, apportioned
    /// uniformly with a one-minute floor.
    ///
    /// Returns `None` for records with fewer than two stops, which
    /// define no segments.
    pub fn segment_time(&self) -> Option<f64> {
        if self.stops.len() < 2 {
            return None;
        }
        let hops = (self.stops.len() - 1) as f64;
        Some((self.total_travel_time_mins / hops).max(1.0))
    }
}
