//! Multi-operator transit network router.
//!
//! Builds a directed graph from route records, applies a configurable
//! rule set (blocked and closed stations, accessibility penalties),
//! and answers least-cost queries with a search that prices line
//! transfers correctly.

pub mod domain;
pub mod feed;
pub mod network;
pub mod registry;
pub mod report;
pub mod router;
pub mod rules;
pub mod web;
