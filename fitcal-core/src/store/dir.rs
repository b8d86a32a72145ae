//! Directory-backed store.
//!
//! Layout: `{root}/user/{user}/{month}_{year}/{day}.json`, each file holding
//! `{"date": n, "workout": {...}}`.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::DocumentStore;
use crate::error::FitCalResult;
use crate::month_key::{DocPath, MonthKey, check_user_id};
use crate::workout::DayRecord;

const EXTENSION: &str = "json";

#[derive(Debug, Clone)]
pub struct DirStore {
    root: PathBuf,
}

impl DirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        DirStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn month_dir(&self, user: &str, month: &MonthKey) -> FitCalResult<PathBuf> {
        check_user_id(user)?;
        Ok(self.root.join("user").join(user).join(month.to_string()))
    }

    fn file_path(&self, path: &DocPath) -> FitCalResult<PathBuf> {
        Ok(self
            .month_dir(&path.user, &path.month)?
            .join(format!("{}.{}", path.day, EXTENSION)))
    }

    /// The day a record file is stored under, from its `{day}.json` name.
    fn file_day(path: &Path) -> Option<u32> {
        path.file_stem()?.to_str()?.parse().ok()
    }

    async fn read_record(path: &Path) -> FitCalResult<DayRecord> {
        let content = tokio::fs::read_to_string(path).await?;
        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl DocumentStore for DirStore {
    async fn list(&self, user: &str, month: &MonthKey) -> FitCalResult<Vec<DayRecord>> {
        let dir = self.month_dir(user, month)?;

        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().is_none_or(|e| e != EXTENSION) {
                continue;
            }

            match Self::read_record(&path).await {
                Ok(record) if Self::file_day(&path) == Some(record.date) => records.push(record),
                Ok(record) => tracing::warn!(
                    path = %path.display(),
                    date = record.date,
                    "skipping day record stored under the wrong day"
                ),
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable day record"),
            }
        }

        tracing::debug!(user, month = %month, count = records.len(), "listed day records");
        Ok(records)
    }

    async fn get(&self, path: &DocPath) -> FitCalResult<Option<DayRecord>> {
        let file = self.file_path(path)?;

        match Self::read_record(&file).await {
            Ok(record) if record.date == path.day => Ok(Some(record)),
            Ok(record) => {
                tracing::warn!(path = %path, date = record.date, "ignoring day record stored under the wrong day");
                Ok(None)
            }
            Err(crate::error::FitCalError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn set(&self, path: &DocPath, record: &DayRecord) -> FitCalResult<()> {
        let file = self.file_path(path)?;
        let dir = self.month_dir(&path.user, &path.month)?;
        tokio::fs::create_dir_all(&dir).await?;

        let temp = file.with_extension(format!("{}.tmp", EXTENSION));
        let content = serde_json::to_string_pretty(record)?;

        tokio::fs::write(&temp, content).await?;
        tokio::fs::rename(&temp, &file).await?;

        tracing::debug!(path = %path, "wrote day record");
        Ok(())
    }

    async fn delete(&self, path: &DocPath) -> FitCalResult<()> {
        match tokio::fs::remove_file(self.file_path(path)?).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
