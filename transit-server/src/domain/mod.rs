//! Domain types for the transit network router.
//!
//! This module contains the core value types shared across the crate:
//! station identity and attributes, and the route records that feed
//! network construction. Types here carry no behaviour beyond their
//! own invariants; graph structure lives in [`crate::network`].

mod route;
mod station;

pub use route::{LineId, RouteRecord, TransitMode};
pub use station::{Coordinates, StationAttributes, StationId, StationStatus};
