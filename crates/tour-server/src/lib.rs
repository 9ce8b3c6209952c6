pub mod config;
pub mod migrate;
pub mod routes;
pub mod store;

pub use config::ServerConfig;
pub use routes::{router, AppState};
pub use store::{SceneStore, StoreError};

/// Install the fmt subscriber; `RUST_LOG` overrides the `info` default.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
