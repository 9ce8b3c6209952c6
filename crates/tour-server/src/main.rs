use std::sync::Arc;

use anyhow::Context;
use tour_server::{init_tracing, router, AppState, SceneStore, ServerConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ServerConfig::from_env()?;
    let store = SceneStore::new(&config.store_path);
    match store.find().await {
        Ok(scenes) => info!("scene store {:?}: {} scenes", store.path(), scenes.len()),
        Err(err) => warn!("scene store not readable yet: {err}"),
    }

    let state = AppState {
        store: Arc::new(store),
    };
    let app = router(state, &config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("bind {}", config.addr))?;
    info!("tour server listening on http://{}", config.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
