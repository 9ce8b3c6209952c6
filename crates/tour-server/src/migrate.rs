//! One-shot loader from a JSON fixture into the scene store.

use std::path::Path;

use anyhow::Context;
use tour_core::{validate_records, SceneRecord, TourIssue};
use tracing::{info, warn};

use crate::store::{SceneStore, StoreError};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub removed: usize,
    pub inserted: usize,
    pub issues: Vec<TourIssue>,
}

pub async fn read_fixture(path: &Path) -> anyhow::Result<Vec<SceneRecord>> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("read fixture {path:?}"))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parse fixture {path:?}"))
}

/// Apply the store's field defaults to every spot.
pub fn format_records(scenes: Vec<SceneRecord>) -> Vec<SceneRecord> {
    scenes
        .into_iter()
        .map(|scene| SceneRecord {
            spots: scene
                .spots
                .into_iter()
                .map(|spot| spot.with_store_defaults())
                .collect(),
            ..scene
        })
        .collect()
}

/// Replace the whole collection with `fixture`.
///
/// Consistency problems (duplicate ids, dangling targets) are reported but do
/// not stop the load; the viewer degrades around them.
pub async fn migrate(
    store: &SceneStore,
    fixture: Vec<SceneRecord>,
) -> Result<MigrationReport, StoreError> {
    let issues = validate_records(&fixture);
    for issue in &issues {
        warn!("fixture issue: {issue}");
    }

    let removed = store.delete_many().await?;
    info!("removed {removed} existing scenes");

    let inserted = store.insert_many(format_records(fixture)).await?;
    info!("inserted {inserted} scenes into {:?}", store.path());

    Ok(MigrationReport {
        removed,
        inserted,
        issues,
    })
}
