//! Transit network graph and its construction.
//!
//! [`Network`] is the owned directed graph of stations and timed
//! segments; [`build_network`] populates it from a route feed.

mod builder;
mod graph;

pub use builder::build_network;
pub use graph::{Network, Segment};
