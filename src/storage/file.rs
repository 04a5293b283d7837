// ABOUTME: File-backed LocalStore writing one JSON document per key
// ABOUTME: Writes go through a temporary file and an atomic rename
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 DietBalancer Contributors

use super::LocalStore;
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Key/value store persisted under a data directory
///
/// Each key maps to `<data_dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Store rooted at `root`; the directory is created on first write
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> AppResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(AppError::invalid_input(format!(
                "Invalid storage key '{key}'"
            )));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl LocalStore for FileStore {
    async fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                AppLogger::log_storage_operation("get", key, false);
                Err(AppError::storage(format!("Failed to read {}: {e}", path.display()))
                    .with_source(e))
            }
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("json.tmp");

        fs::create_dir_all(&self.root).await?;
        fs::write(&tmp, value).await?;
        if let Err(e) = fs::rename(&tmp, &path).await {
            AppLogger::log_storage_operation("set", key, false);
            // Best effort: leave no temp file behind
            let _ = fs::remove_file(&tmp).await;
            return Err(
                AppError::storage(format!("Failed to replace {}: {e}", path.display()))
                    .with_source(e),
            );
        }

        AppLogger::log_storage_operation("set", key, true);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> AppResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path).await {
            Ok(()) => {
                AppLogger::log_storage_operation("remove", key, true);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                AppLogger::log_storage_operation("remove", key, false);
                Err(AppError::from(e))
            }
        }
    }
}
