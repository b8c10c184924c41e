use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use transit_server::feed;
use transit_server::network::build_network;
use transit_server::registry::StationRegistry;
use transit_server::rules::{RuleConfig, apply_rules};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Feed: a JSON file of route records, or the built-in demo
    // network when unset.
    let records = match std::env::var("TRANSIT_FEED") {
        Ok(path) => feed::load_records(&path).expect("Failed to load route feed"),
        Err(_) => {
            info!("TRANSIT_FEED not set, using built-in demo network");
            feed::demo_records()
        }
    };

    // Rules: a JSON RuleConfig file, or defaults when unset.
    let rules: RuleConfig = match std::env::var("TRANSIT_RULES") {
        Ok(path) => {
            let contents = std::fs::read_to_string(&path).expect("Failed to read rules file");
            serde_json::from_str(&contents).expect("Failed to parse rules file")
        }
        Err(_) => RuleConfig::default(),
    };

    let mut registry = StationRegistry::default();
    let mut network = build_network(&records, &mut registry);
    apply_rules(&mut network, &rules);

    let state = AppState::new(network, rules);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    println!("Transit network router listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET /health    - Health check");
    println!("  GET /stations  - List stations after rule application");
    println!("  GET /route     - Plan a route (?from=...&to=...)");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
