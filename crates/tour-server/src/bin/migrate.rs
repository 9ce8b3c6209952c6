use std::path::PathBuf;

use clap::Parser;
use tour_server::config::DEFAULT_STORE_PATH;
use tour_server::migrate::{migrate, read_fixture};
use tour_server::{init_tracing, SceneStore};
use tracing::info;

/// Load a JSON scene fixture into the tour store, replacing its contents.
#[derive(Debug, Parser)]
#[command(name = "migrate")]
struct Args {
    /// JSON array of scenes.
    #[arg(long, default_value = "fixtures/map.json")]
    fixture: PathBuf,

    /// Scene collection file.
    #[arg(long, env = "TOUR_STORE_PATH", default_value = DEFAULT_STORE_PATH)]
    store: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let fixture = read_fixture(&args.fixture).await?;
    info!("read {} scenes from {:?}", fixture.len(), args.fixture);

    let store = SceneStore::new(args.store);
    let report = migrate(&store, fixture).await?;
    info!(
        "migration done: removed={} inserted={} issues={}",
        report.removed,
        report.inserted,
        report.issues.len()
    );
    Ok(())
}
