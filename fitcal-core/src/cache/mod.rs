//! Tag-indexed query cache.
//!
//! Every cached query result records the tags it was built from. The cache
//! keeps a reverse index from tag to dependent queries, so a mutation can
//! drop exactly the results it made stale.
//!
//! Invalidation also stamps each tag with a generation. A fetch that started
//! before a mutation may only be stored if none of its tags were stamped in
//! between, otherwise it would cache the pre-mutation result.

mod tag;

pub use tag::Tag;

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::error::QueryError;
use crate::month_key::MonthKey;
use crate::workout::DayRecord;

/// Identifies a query by its endpoint and arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    MonthWorkouts {
        user: String,
        month: MonthKey,
    },
    NextWorkout {
        user: String,
        month: MonthKey,
        today: chrono::NaiveDate,
    },
    ClickedDate {
        user: String,
        month: MonthKey,
        day: u32,
    },
}

/// Successful query payloads.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryData {
    Month(BTreeMap<u32, DayRecord>),
    Record(DayRecord),
}

pub type QueryResult = Result<QueryData, QueryError>;

struct Entry {
    result: QueryResult,
    tags: Vec<Tag>,
}

#[derive(Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Entry>,
    dependents: HashMap<Tag, HashSet<QueryKey>>,
    generation: u64,
    invalidated_at: HashMap<Tag, u64>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &QueryKey) -> Option<&QueryResult> {
        self.entries.get(key).map(|e| &e.result)
    }

    pub fn tags(&self, key: &QueryKey) -> Option<&[Tag]> {
        self.entries.get(key).map(|e| e.tags.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a result under `key`, replacing any previous entry and its tags.
    pub fn insert(&mut self, key: QueryKey, result: QueryResult, tags: Vec<Tag>) {
        self.remove(&key);

        for tag in &tags {
            self.dependents
                .entry(tag.clone())
                .or_default()
                .insert(key.clone());
        }
        self.entries.insert(key, Entry { result, tags });
    }

    /// The current generation, to pass to `insert_if_fresh` once a fetch
    /// started now completes.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store a result fetched at generation `since`, unless one of `tags` was
    /// invalidated after that. Returns whether the result was stored.
    pub fn insert_if_fresh(
        &mut self,
        key: QueryKey,
        result: QueryResult,
        tags: Vec<Tag>,
        since: u64,
    ) -> bool {
        let stale = tags
            .iter()
            .any(|tag| self.invalidated_at.get(tag).is_some_and(|&at| at > since));
        if stale {
            return false;
        }

        self.insert(key, result, tags);
        true
    }

    /// Drop every entry that depends on any of `tags`.
    ///
    /// Returns the invalidated keys, so callers can refetch them.
    pub fn invalidate(&mut self, tags: &[Tag]) -> Vec<QueryKey> {
        let mut stale: Vec<QueryKey> = Vec::new();

        self.generation += 1;
        for tag in tags {
            self.invalidated_at.insert(tag.clone(), self.generation);
        }

        for tag in tags {
            if let Some(keys) = self.dependents.get(tag) {
                for key in keys {
                    if !stale.contains(key) {
                        stale.push(key.clone());
                    }
                }
            }
        }

        for key in &stale {
            self.remove(key);
        }

        stale
    }

    /// Drop a single entry.
    pub fn forget(&mut self, key: &QueryKey) {
        self.remove(key);
    }

    fn remove(&mut self, key: &QueryKey) {
        let Some(entry) = self.entries.remove(key) else {
            return;
        };

        for tag in &entry.tags {
            if let Some(keys) = self.dependents.get_mut(tag) {
                keys.remove(key);
                if keys.is_empty() {
                    self.dependents.remove(tag);
                }
            }
        }
    }
}
