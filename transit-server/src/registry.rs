//! Station registry: deduplicated per-station attributes.
//!
//! The registry is the single place station attributes come from. The
//! first time a station id is seen, attributes are fetched from the
//! configured [`AttributeSource`] and stored; every later lookup for
//! the same id returns the stored copy unchanged. Sources must be
//! deterministic so that rebuilding a network from the same feed
//! reproduces the same graph.

use std::collections::HashMap;

use crate::domain::{Coordinates, StationAttributes, StationId, StationStatus};

/// Supplies attributes for a station the first time it is seen.
///
/// Implementations must be pure: the same id must always yield the
/// same attributes. This abstraction lets tests pin attributes
/// explicitly instead of relying on the synthesized defaults.
pub trait AttributeSource {
    /// Produce attributes for the given station.
    fn attributes(&self, id: &StationId) -> StationAttributes;
}

/// Attribute source that synthesizes attributes from the station name.
///
/// In the absence of a real station database, attributes are derived
/// from a stable character-sum hash of the name: coordinates are
/// spread over a small area around Bogotá, roughly one station in
/// seventeen is closed, and roughly one in five is inaccessible. The
/// same name always yields the same attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SynthesizedAttributes;

impl AttributeSource for SynthesizedAttributes {
    fn attributes(&self, id: &StationId) -> StationAttributes {
        let seed: u32 = id.as_str().chars().map(|c| c as u32).sum::<u32>() % 1000;
        let spread = (seed % 100) as f64;
        let status = if seed % 17 == 0 {
            StationStatus::Closed
        } else {
            StationStatus::Open
        };
        StationAttributes {
            id: id.clone(),
            coordinates: Coordinates {
                lat: 4.6 + spread * 0.0005,
                lon: -74.08 + spread * 0.0006,
            },
            status,
            accessible: seed % 5 != 0,
        }
    }
}

/// Deduplicating table of station attributes.
pub struct StationRegistry<S = SynthesizedAttributes> {
    source: S,
    stations: HashMap<StationId, StationAttributes>,
}

impl Default for StationRegistry<SynthesizedAttributes> {
    fn default() -> Self {
        Self::new(SynthesizedAttributes)
    }
}

impl<S: AttributeSource> StationRegistry<S> {
    /// Create a registry backed by the given attribute source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            stations: HashMap::new(),
        }
    }

    /// Look up or create attributes for a station.
    ///
    /// Idempotent: repeated calls with the same id return the same
    /// stored attributes without consulting the source again.
    pub fn register(&mut self, id: &StationId) -> &StationAttributes {
        if !self.stations.contains_key(id) {
            let attrs = self.source.attributes(id);
            self.stations.insert(id.clone(), attrs);
        }
        &self.stations[id]
    }

    /// Returns the attributes for a station already registered.
    pub fn get(&self, id: &StationId) -> Option<&StationAttributes> {
        self.stations.get(id)
    }

    /// Number of distinct stations registered.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if no stations have been registered.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}

/// Test-only attribute sources.
#[cfg(test)]
pub(crate) mod testing {
    use super::*;

    /// Pinned attribute source for tests that need control over
    /// status and accessibility.
    pub(crate) struct FixedAttributes {
        pub closed: Vec<StationId>,
        pub inaccessible: Vec<StationId>,
    }

    impl FixedAttributes {
        /// Source where every station is open and accessible.
        pub(crate) fn all_open() -> Self {
            Self {
                closed: Vec::new(),
                inaccessible: Vec::new(),
            }
        }
    }

    impl AttributeSource for FixedAttributes {
        fn attributes(&self, id: &StationId) -> StationAttributes {
            StationAttributes {
                id: id.clone(),
                coordinates: Coordinates { lat: 0.0, lon: 0.0 },
                status: if self.closed.contains(id) {
                    StationStatus::Closed
                } else {
                    StationStatus::Open
                },
                accessible: !self.inaccessible.contains(id),
            }
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// The synthesized source is a pure function of the name.
        #[test]
        fn synthesis_deterministic(name in "[A-Za-z][A-Za-z ]{0,30}") {
            let source = SynthesizedAttributes;
            let id = StationId::new(name);
            prop_assert_eq!(source.attributes(&id), source.attributes(&id));
        }

        /// Synthesized coordinates stay inside the expected window.
        #[test]
        fn coordinates_in_range(name in "[A-Za-z][A-Za-z ]{0,30}") {
            let attrs = SynthesizedAttributes.attributes(&StationId::new(name));
            prop_assert!(attrs.coordinates.lat >= 4.6 && attrs.coordinates.lat < 4.65);
            prop_assert!(attrs.coordinates.lon >= -74.08 && attrs.coordinates.lon < -74.02);
        }

        /// Registering the same name repeatedly never grows the table.
        #[test]
        fn register_never_duplicates(name in "[A-Za-z]{1,20}", count in 1usize..10) {
            let mut registry = StationRegistry::default();
            let id = StationId::new(name);
            for _ in 0..count {
                registry.register(&id);
            }
            prop_assert_eq!(registry.len(), 1);
        }
    }
}
