//! Day record storage.
//!
//! A store holds at most one `DayRecord` per `(user, month, day)` path.
//! Implementations do no caching, batching or retrying; that is left to
//! `CalendarApi`.

mod dir;
mod memory;

pub use dir::DirStore;
pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::FitCalResult;
use crate::month_key::{DocPath, MonthKey};
use crate::workout::DayRecord;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// All records stored for a user's month, in no particular order.
    async fn list(&self, user: &str, month: &MonthKey) -> FitCalResult<Vec<DayRecord>>;

    async fn get(&self, path: &DocPath) -> FitCalResult<Option<DayRecord>>;

    /// Create or overwrite the record at `path`.
    async fn set(&self, path: &DocPath, record: &DayRecord) -> FitCalResult<()>;

    /// Remove the record at `path`. Removing a missing record succeeds.
    async fn delete(&self, path: &DocPath) -> FitCalResult<()>;
}
