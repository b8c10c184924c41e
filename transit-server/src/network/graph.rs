//! Owned directed graph of stations and timed segments.
//!
//! The network stores station attributes and at most one directed
//! segment per ordered station pair. It is an explicit structure: a
//! segment can only be inserted between stations that have already
//! been added, there is no auto-creation of nodes on edge insertion.

use std::collections::HashMap;

use crate::domain::{LineId, StationAttributes, StationId, TransitMode};

/// A directed segment between two adjacent stations on some line.
///
/// Travel cost is split into the base time apportioned from the route
/// record and a rule-applied penalty. Keeping the penalty separate
/// makes rule application idempotent: re-applying a rule set
/// overwrites the penalty instead of accumulating it.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    /// Line that produced (or last improved) this segment.
    pub line: LineId,

    /// Service mode of that line.
    pub mode: TransitMode,

    /// Operator of that line.
    pub operator: String,

    /// Apportioned travel time in minutes.
    pub base_minutes: f64,

    /// Penalty minutes added by rule application.
    pub penalty_minutes: f64,
}

impl Segment {
    /// Create a segment with no penalty applied.
    pub fn new(line: LineId, mode: TransitMode, operator: String, base_minutes: f64) -> Self {
        Self {
            line,
            mode,
            operator,
            base_minutes,
            penalty_minutes: 0.0,
        }
    }

    /// Effective travel time in minutes, penalties included.
    pub fn minutes(&self) -> f64 {
        self.base_minutes + self.penalty_minutes
    }
}

/// The transit network graph.
///
/// Owns both station attributes and segment data exclusively. After
/// rule application the graph is read-only and may be shared freely
/// across threads; routing never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Network {
    stations: HashMap<StationId, StationAttributes>,
    /// Outgoing adjacency: `segments[from][to]`.
    segments: HashMap<StationId, HashMap<StationId, Segment>>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with its attributes.
    ///
    /// The first registration wins: adding a station that already
    /// exists leaves the stored attributes untouched.
    pub fn add_station(&mut self, attrs: StationAttributes) {
        self.stations.entry(attrs.id.clone()).or_insert(attrs);
    }

    /// Returns the attributes of a station, if present.
    pub fn station(&self, id: &StationId) -> Option<&StationAttributes> {
        self.stations.get(id)
    }

    /// Returns true if the station is present.
    pub fn contains_station(&self, id: &StationId) -> bool {
        self.stations.contains_key(id)
    }

    /// Iterate over all stations.
    pub fn stations(&self) -> impl Iterator<Item = &StationAttributes> {
        self.stations.values()
    }

    /// Number of stations.
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Number of directed segments.
    pub fn segment_count(&self) -> usize {
        self.segments.values().map(|targets| targets.len()).sum()
    }

    /// Insert or replace the segment for an ordered station pair.
    ///
    /// Both endpoints must already be stations in the network;
    /// returns false (and stores nothing) otherwise.
    pub fn insert_segment(&mut self, from: &StationId, to: &StationId, segment: Segment) -> bool {
        if !self.contains_station(from) || !self.contains_station(to) {
            return false;
        }
        self.segments
            .entry(from.clone())
            .or_default()
            .insert(to.clone(), segment);
        true
    }

    /// Returns the segment for an ordered station pair, if any.
    pub fn segment(&self, from: &StationId, to: &StationId) -> Option<&Segment> {
        self.segments.get(from)?.get(to)
    }

    /// Returns true if a segment exists for the ordered pair.
    pub fn has_segment(&self, from: &StationId, to: &StationId) -> bool {
        self.segment(from, to).is_some()
    }

    /// Iterate over the outgoing segments of a station.
    pub fn outgoing(&self, from: &StationId) -> impl Iterator<Item = (&StationId, &Segment)> {
        self.segments
            .get(from)
            .into_iter()
            .flat_map(|targets| targets.iter())
    }

    /// Iterate mutably over all segments with their endpoints.
    pub fn segments_mut(
        &mut self,
    ) -> impl Iterator<Item = (&StationId, &StationId, &mut Segment)> {
        self.segments.iter_mut().flat_map(|(from, targets)| {
            targets
                .iter_mut()
                .map(move |(to, segment)| (from, to, segment))
        })
    }

    /// Remove a station and every segment touching it.
    ///
    /// Removing a station that is not present is a no-op.
    pub fn remove_station(&mut self, id: &StationId) {
        self.stations.remove(id);
        self.segments.remove(id);
        for targets in self.segments.values_mut() {
            targets.remove(id);
        }
    }
}
