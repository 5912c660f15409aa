//! Archive persistence.
//!
//! One JSON document per symbol, named `{code}.json` inside the data
//! directory. Every save is a full rewrite published atomically: the
//! document is written to a temporary sibling and renamed over the old one,
//! so a crash mid-run loses at most the in-progress symbol's update and can
//! never leave a half-written document behind.

use async_trait::async_trait;
use log::warn;
use std::path::{Path, PathBuf};
use tokio::fs;

use berza_market_data::SymbolCode;

use super::model::SymbolArchive;
use crate::errors::{Result, StoreError};

/// Storage interface for symbol archives.
///
/// Implementations must guarantee that `save` either publishes the complete
/// document or leaves the previous one intact - partial writes are the one
/// failure mode the harvesting engine cannot tolerate.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Load a symbol's archive. `None` when no document exists yet.
    async fn load(&self, code: &SymbolCode) -> Result<Option<SymbolArchive>>;

    /// Persist a symbol's archive, replacing any previous document.
    async fn save(&self, archive: &SymbolArchive) -> Result<()>;
}

/// File-backed archive store.
pub struct FileArchiveStore {
    data_dir: PathBuf,
}

impl FileArchiveStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    fn document_path(&self, code: &SymbolCode) -> PathBuf {
        self.data_dir.join(format!("{}.json", code))
    }
}

#[async_trait]
impl ArchiveStore for FileArchiveStore {
    async fn load(&self, code: &SymbolCode) -> Result<Option<SymbolArchive>> {
        let path = self.document_path(code);
        let body = match fs::read_to_string(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(
                    StoreError::ReadFailed(format!("{}: {}", path.display(), e)).into(),
                )
            }
        };

        match serde_json::from_str(&body) {
            Ok(archive) => Ok(Some(archive)),
            Err(e) => {
                // A document we cannot parse is rebuilt from scratch; the
                // atomic publish below means we never wrote it ourselves.
                warn!("discarding unparseable archive {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    async fn save(&self, archive: &SymbolArchive) -> Result<()> {
        fs::create_dir_all(&self.data_dir).await.map_err(|e| {
            StoreError::WriteFailed(format!("{}: {}", self.data_dir.display(), e))
        })?;

        let body = serde_json::to_vec_pretty(archive)
            .map_err(|e| StoreError::SerializeFailed(e.to_string()))?;

        let path = self.document_path(&SymbolCode::new(archive.company_code.as_str()));
        let tmp_path = path.with_extension("json.tmp");

        fs::write(&tmp_path, &body)
            .await
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", tmp_path.display(), e)))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| StoreError::WriteFailed(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }
}
