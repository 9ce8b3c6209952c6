//! File-backed scene collection.
//!
//! The whole collection is one JSON array on disk. Every read goes to the
//! file so changes made by the migration tool are visible to a running
//! server; writes go through a temp file and a rename.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;
use tour_core::SceneRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt scene collection {path:?}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("could not encode scenes: {0}")]
    Encode(#[from] serde_json::Error),
}

pub struct SceneStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl SceneStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Every scene, in insertion order. A missing file is an empty collection.
    pub async fn find(&self) -> Result<Vec<SceneRecord>, StoreError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    /// Remove every scene; returns how many were removed.
    pub async fn delete_many(&self) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let removed = self.find().await?.len();
        self.persist(&[]).await?;
        Ok(removed)
    }

    /// Append scenes; returns how many were inserted.
    pub async fn insert_many(&self, scenes: Vec<SceneRecord>) -> Result<usize, StoreError> {
        let _guard = self.write_lock.lock().await;
        let inserted = scenes.len();
        let mut all = self.find().await?;
        all.extend(scenes);
        self.persist(&all).await?;
        Ok(inserted)
    }

    async fn persist(&self, scenes: &[SceneRecord]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }
        let body = serde_json::to_vec_pretty(scenes)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body).await.map_err(io_err)?;
        tokio::fs::rename(&tmp, &self.path).await.map_err(io_err)?;
        Ok(())
    }
}
