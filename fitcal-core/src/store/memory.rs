//! In-memory store.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::DocumentStore;
use crate::error::FitCalResult;
use crate::month_key::{DocPath, MonthKey};
use crate::workout::DayRecord;

#[derive(Default)]
pub struct MemoryStore {
    docs: RwLock<BTreeMap<DocPath, DayRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.docs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.docs.read().await.is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn list(&self, user: &str, month: &MonthKey) -> FitCalResult<Vec<DayRecord>> {
        let docs = self.docs.read().await;

        Ok(docs
            .iter()
            .filter(|(path, _)| path.user == user && path.month == *month)
            .map(|(_, record)| record.clone())
            .collect())
    }

    async fn get(&self, path: &DocPath) -> FitCalResult<Option<DayRecord>> {
        Ok(self.docs.read().await.get(path).cloned())
    }

    async fn set(&self, path: &DocPath, record: &DayRecord) -> FitCalResult<()> {
        self.docs.write().await.insert(path.clone(), record.clone());
        Ok(())
    }

    async fn delete(&self, path: &DocPath) -> FitCalResult<()> {
        self.docs.write().await.remove(path);
        Ok(())
    }
}
