//! Route feed adapters.
//!
//! The engine itself only consumes a sequence of [`RouteRecord`]s;
//! where those come from is a feed concern. This module provides a
//! JSON file loader and a small built-in demo network used when no
//! feed file is configured.

use std::path::Path;

use tracing::info;

use crate::domain::{LineId, RouteRecord, StationId, TransitMode};

/// Error loading a route feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The feed file could not be read.
    #[error("failed to read feed file: {0}")]
    Io(#[from] std::io::Error),

    /// The feed file is not valid route-record JSON.
    #[error("failed to parse feed file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load route records from a JSON file.
///
/// The file must contain a JSON array of route records:
///
/// ```json
/// [{"route_id": "R0001", "mode": "trunk", "operator": "Transmilenio S.A.",
///   "stops": ["Usme", "Portal Sur"], "total_travel_time_mins": 12.0}]
/// ```
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<RouteRecord>, FeedError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let records: Vec<RouteRecord> = serde_json::from_str(&contents)?;
    info!(path = %path.display(), routes = records.len(), "feed loaded");
    Ok(records)
}

fn record(id: &str, mode: TransitMode, operator: &str, stops: &[&str], total: f64) -> RouteRecord {
    RouteRecord {
        route_id: LineId::new(id),
        mode,
        operator: operator.to_string(),
        stops: stops.iter().map(|s| StationId::from(*s)).collect(),
        total_travel_time_mins: total,
    }
}

/// A small hand-written network for development and demos.
///
/// Covers a handful of corridors across the sample station set so
/// that multi-transfer queries have interesting answers.
pub fn demo_records() -> Vec<RouteRecord> {
    use TransitMode::*;
    vec![
        record(
            "T01",
            Trunk,
            "Transmilenio S.A.",
            &["Usme", "Portal Sur", "Tunal", "Centro", "Av.Calle26", "Calle80"],
            40.0,
        ),
        record(
            "T02",
            Trunk,
            "Transmilenio S.A.",
            &["Portal Norte", "Cedritos", "Usaquén", "Chapinero", "Marly", "Centro"],
            35.0,
        ),
        record(
            "U01",
            Urban,
            "Empresa SITP",
            &["Kennedy", "El Tintal", "Salitre", "Av.Calle26", "Teusaquillo", "Galerías"],
            45.0,
        ),
        record(
            "U02",
            Urban,
            "Empresa SITP",
            &["Suba", "ColinaCampestre", "La Castellana", "Calle80", "GranEstación"],
            38.0,
        ),
        record(
            "F01",
            Feeder,
            "Operador A",
            &["Chía", "Cedritos", "Portal Norte"],
            20.0,
        ),
        record(
            "F02",
            Feeder,
            "Operador B",
            &["Soacha", "Bosa", "Portal Sur"],
            25.0,
        ),
        record(
            "C01",
            Complementary,
            "Consorcio Zonal",
            &["Restrepo", "Tunal", "Venecia", "Alquería"],
            28.0,
        ),
        record(
            "K01",
            Cable,
            "Transmilenio S.A.",
            &["Tunal", "CiudadBolívar"],
            12.0,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn load_records_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"route_id": "R0001", "mode": "trunk",
                 "operator": "Transmilenio S.A.",
                 "stops": ["Usme", "Portal Sur", "Centro"],
                 "total_travel_time_mins": 24.0}}]"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].route_id, LineId::new("R0001"));
        assert_eq!(records[0].stops.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_records("/nonexistent/feed.json").unwrap_err();
        assert!(matches!(err, FeedError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();
        let err = load_records(file.path()).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn demo_records_build_a_connected_core() {
        use crate::network::build_network;
        use crate::registry::StationRegistry;
        use crate::router::shortest_route;

        let mut registry = StationRegistry::default();
        let network = build_network(&demo_records(), &mut registry);

        // The two trunk corridors meet at Centro, so a cross-city
        // query has an answer before any rules are applied.
        let result = shortest_route(
            &network,
            &StationId::new("Usme"),
            &StationId::new("Chapinero"),
            3.0,
        );
        assert!(result.is_some());
    }
}
