#![cfg(target_arch = "wasm32")]
use tour_core::{load_tour_data, start_tour};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod camera;
mod config;
mod constants;
mod dom;
mod loader;
mod overlay;
mod panolens;
mod viewer;

use config::TourConfig;
use constants::{API_URL_ATTR, CONTAINER_ID, FETCH_TIMEOUT_ATTR};
use loader::HttpSceneSource;
use viewer::PanolensViewer;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tour-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;

    let config = TourConfig::from_attributes(
        container.get_attribute(API_URL_ATTR),
        container.get_attribute(FETCH_TIMEOUT_ATTR),
    );
    log::info!(
        "[init] api={} timeout={}ms",
        config.api_url,
        config.fetch_timeout_ms
    );

    let mut viewer = PanolensViewer::new(&container)?;

    // The fetch is the only await; nothing is built until it resolves.
    let source = HttpSceneSource::new(config.api_url, config.fetch_timeout_ms);
    let scenes = load_tour_data(&source).await;

    let summary = start_tour(&scenes, &mut viewer);
    if !summary.wiring.skipped.is_empty() || summary.wiring.inert > 0 {
        log::warn!(
            "[init] {} spots skipped, {} hotspots inert",
            summary.wiring.skipped.len(),
            summary.wiring.inert
        );
    }
    log::info!("viewer initialised");
    Ok(())
}
