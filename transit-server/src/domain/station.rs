//! Station identity and attribute types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A station identifier.
///
/// Station ids double as display names: the network is keyed by the
/// names that appear in route records, and no separate name table
/// exists. Ids are compared exactly (no normalization).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Create a station id from a name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Geographic position of a station.
///
/// Carried for display and export only; routing never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Operational status of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StationStatus {
    Open,
    Closed,
}

/// Attributes attached to a station node.
///
/// Created once per distinct station id the first time it is seen and
/// immutable thereafter; see [`crate::registry::StationRegistry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationAttributes {
    /// Station id, also used as the display name.
    pub id: StationId,

    /// Geographic position (display only).
    pub coordinates: Coordinates,

    /// Whether the station is open or closed.
    pub status: StationStatus,

    /// Whether the station is step-free accessible.
    pub accessible: bool,
}

impl StationAttributes {
    /// Returns true if the station is closed.
    pub fn is_closed(&self) -> bool {
        self.status == StationStatus::Closed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn station_id_display() {
        let id = StationId::new("Portal Sur");
        assert_eq!(format!("{}", id), "Portal Sur");
        assert_eq!(format!("{:?}", id), "StationId(Portal Sur)");
        assert_eq!(id.as_str(), "Portal Sur");
    }

    #[test]
    fn station_id_equality_and_hash() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationId::new("Centro"));
        assert!(set.contains(&StationId::from("Centro")));
        assert!(!set.contains(&StationId::from("Suba")));
    }

    #[test]
    fn status_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&StationStatus::Closed).unwrap(),
            "\"closed\""
        );
        let status: StationStatus = serde_json::from_str("\"open\"").unwrap();
        assert_eq!(status, StationStatus::Open);
    }

    #[test]
    fn is_closed() {
        let attrs = StationAttributes {
            id: StationId::new("Tunal"),
            coordinates: Coordinates { lat: 4.6, lon: -74.08 },
            status: StationStatus::Closed,
            accessible: true,
        };
        assert!(attrs.is_closed());
    }
}
