//! Calendar queries and mutations.
//!
//! `CalendarApi` reads day records through a `DocumentStore`, caches query
//! results together with the tags they depend on, and invalidates those tags
//! whenever a mutation touches a day. Classified outcomes such as
//! `OlderDate` are cached like data, since they also depend on what is
//! stored for the month.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tokio::sync::Mutex;

use crate::cache::{QueryCache, QueryData, QueryKey, QueryResult, Tag};
use crate::error::{FitCalError, FitCalResult, QueryError};
use crate::month_key::{DocPath, MonthKey};
use crate::program::Program;
use crate::store::DocumentStore;
use crate::workout::{DayRecord, Workout};

/// The outcome of a mutation, with the cached queries it made stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation<T> {
    pub value: T,
    pub invalidated: Vec<QueryKey>,
}

pub struct CalendarApi<S> {
    store: S,
    cache: Mutex<QueryCache>,
}

impl<S: DocumentStore> CalendarApi<S> {
    pub fn new(store: S) -> Self {
        CalendarApi {
            store,
            cache: Mutex::new(QueryCache::new()),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // QUERIES:

    /// Every record in a user's month, keyed by day.
    pub async fn month_workouts(
        &self,
        user: Option<&str>,
        month: MonthKey,
    ) -> FitCalResult<BTreeMap<u32, DayRecord>> {
        let user = user.ok_or(QueryError::MissingUser)?;
        let key = QueryKey::MonthWorkouts {
            user: user.to_string(),
            month,
        };

        match self.query(key).await? {
            QueryData::Month(days) => Ok(days),
            QueryData::Record(_) => Err(FitCalError::Serialization(
                "expected a month of day records".to_string(),
            )),
        }
    }

    /// The next workout to show for the viewed month.
    ///
    /// Past months yield `OlderDate`, empty months `NoDates`. Future months
    /// yield their earliest record and the current month its earliest record
    /// on or after `today`, or `NoUpcomingWorkout`.
    pub async fn next_workout(
        &self,
        user: Option<&str>,
        month: MonthKey,
        today: NaiveDate,
    ) -> FitCalResult<DayRecord> {
        let user = user.ok_or(QueryError::UserIdError)?;
        let key = QueryKey::NextWorkout {
            user: user.to_string(),
            month,
            today,
        };

        self.query_record(key).await
    }

    /// The record for a clicked day, or `NoWorkoutForDate`.
    pub async fn clicked_on_date(
        &self,
        user: Option<&str>,
        month: MonthKey,
        day: u32,
    ) -> FitCalResult<DayRecord> {
        let user = user.ok_or(QueryError::UserIdError)?;
        let key = QueryKey::ClickedDate {
            user: user.to_string(),
            month,
            day,
        };

        self.query_record(key).await
    }

    /// Re-run queries, typically the keys a mutation invalidated.
    pub async fn refetch(&self, keys: &[QueryKey]) -> FitCalResult<()> {
        for key in keys {
            self.cache.lock().await.forget(key);
            // Classified outcomes are cached results, not refetch failures
            match self.query(key.clone()).await {
                Ok(_) | Err(FitCalError::Query(_)) => {}
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    // MUTATIONS:

    /// Remove a day's record. Removing a day with no record is a no-op.
    pub async fn delete_day_record(
        &self,
        user: Option<&str>,
        month: MonthKey,
        day: u32,
    ) -> FitCalResult<Mutation<()>> {
        let user = user.ok_or(QueryError::MissingUser)?;
        let path = DocPath::new(user, month, day);

        self.store.delete(&path).await?;
        tracing::info!(path = %path, "removed workout from calendar");

        self.mutated((), &Tag::for_day(&month, day)).await
    }

    /// Flip a day's `complete` flag, returning the new value.
    pub async fn toggle_complete(
        &self,
        user: Option<&str>,
        month: MonthKey,
        day: u32,
    ) -> FitCalResult<Mutation<bool>> {
        let user = user.ok_or(QueryError::MissingUser)?;
        let path = DocPath::new(user, month, day);

        let mut record = self
            .store
            .get(&path)
            .await?
            .ok_or(QueryError::NoWorkoutForDate)?;
        record.workout.complete = !record.workout.complete;
        self.store.set(&path, &record).await?;
        tracing::info!(path = %path, complete = record.workout.complete, "toggled workout completion");

        self.mutated(record.workout.complete, &Tag::for_day(&month, day))
            .await
    }

    /// Create or overwrite a day's record.
    pub async fn write_day_record(
        &self,
        user: Option<&str>,
        month: MonthKey,
        day: u32,
        workout: Workout,
    ) -> FitCalResult<Mutation<()>> {
        let user = user.ok_or(QueryError::MissingUser)?;
        if month.date(day).is_none() {
            return Err(FitCalError::InvalidDate(format!(
                "{} has no day {}",
                month.spaced(),
                day
            )));
        }

        let path = DocPath::new(user, month, day);
        self.store.set(&path, &DayRecord::new(day, workout)).await?;
        tracing::info!(path = %path, "added workout to calendar");

        self.mutated((), &Tag::for_day(&month, day)).await
    }

    /// Write a program's workouts onto the calendar starting at `start`.
    ///
    /// Returns the `Month`/`Day` tag pair of every day written. Either every
    /// day is written or none is: if a write fails, days already written are
    /// restored to what they held before and the error is returned.
    pub async fn expand_program_to_calendar(
        &self,
        user: Option<&str>,
        start: NaiveDate,
        program: &Program,
    ) -> FitCalResult<Mutation<Vec<Tag>>> {
        let user = user.ok_or(QueryError::MissingUser)?;
        let schedule = program.schedule(start)?;

        let mut touched: Vec<Tag> = Vec::with_capacity(schedule.len() * 2);
        let mut undo: Vec<(DocPath, Option<DayRecord>)> = Vec::with_capacity(schedule.len());

        for day in &schedule {
            let month = day.month();
            let path = DocPath::new(user, month, day.day());
            touched.push(Tag::month(&month));
            touched.push(Tag::day(day.day()));

            let written = async {
                let previous = self.store.get(&path).await?;
                let record = DayRecord::new(day.day(), day.workout.clone());
                self.store.set(&path, &record).await?;
                Ok::<_, FitCalError>(previous)
            }
            .await;

            match written {
                Ok(previous) => undo.push((path, previous)),
                Err(e) => {
                    tracing::warn!(path = %path, error = %e, "program expansion failed, rolling back");
                    self.roll_back(undo).await;
                    self.cache.lock().await.invalidate(&touched);
                    return Err(e);
                }
            }
        }

        tracing::info!(user, start = %start, days = schedule.len(), "added program to calendar");
        self.mutated(touched.clone(), &touched).await
    }

    // INTERNALS:

    async fn roll_back(&self, undo: Vec<(DocPath, Option<DayRecord>)>) {
        for (path, previous) in undo.into_iter().rev() {
            let restored = match &previous {
                Some(record) => self.store.set(&path, record).await,
                None => self.store.delete(&path).await,
            };

            if let Err(e) = restored {
                tracing::warn!(path = %path, error = %e, "could not restore day record");
            }
        }
    }

    async fn mutated<T>(&self, value: T, tags: &[Tag]) -> FitCalResult<Mutation<T>> {
        let invalidated = self.cache.lock().await.invalidate(tags);
        tracing::debug!(
            tags = %tags.iter().map(Tag::to_string).collect::<Vec<_>>().join(","),
            invalidated = invalidated.len(),
            "invalidated cached queries"
        );
        Ok(Mutation { value, invalidated })
    }

    async fn query_record(&self, key: QueryKey) -> FitCalResult<DayRecord> {
        match self.query(key).await? {
            QueryData::Record(record) => Ok(record),
            QueryData::Month(_) => Err(FitCalError::Serialization(
                "expected a single day record".to_string(),
            )),
        }
    }

    /// Serve from cache, or fetch, cache and return.
    async fn query(&self, key: QueryKey) -> FitCalResult<QueryData> {
        if let Some(hit) = self.cache.lock().await.get(&key).cloned() {
            tracing::debug!(?key, "query cache hit");
            return hit.map_err(FitCalError::from);
        }

        tracing::debug!(?key, "query cache miss");
        let since = self.cache.lock().await.generation();
        let (result, tags) = self.fetch(&key).await?;

        let cacheable = match &result {
            Ok(_) => true,
            Err(kind) => kind.is_cacheable(),
        };
        if cacheable {
            let stored = self
                .cache
                .lock()
                .await
                .insert_if_fresh(key.clone(), result.clone(), tags, since);
            if !stored {
                tracing::debug!(?key, "not caching result fetched before a mutation");
            }
        }

        result.map_err(FitCalError::from)
    }

    /// Run a query against the store. Store failures are returned as errors;
    /// classified outcomes come back inside the `QueryResult`.
    async fn fetch(&self, key: &QueryKey) -> FitCalResult<(QueryResult, Vec<Tag>)> {
        match key {
            QueryKey::MonthWorkouts { user, month } => {
                let records = self.store.list(user, month).await?;

                let mut tags: Vec<Tag> = records.iter().map(|r| Tag::day(r.date)).collect();
                tags.push(Tag::month(month));

                let days = records.into_iter().map(|r| (r.date, r)).collect();
                Ok((Ok(QueryData::Month(days)), tags))
            }
            QueryKey::NextWorkout { user, month, today } => {
                let records = self.store.list(user, month).await?;
                let result = next_workout_in(&records, *month, *today).map(QueryData::Record);

                Ok((result, vec![Tag::month(month)]))
            }
            QueryKey::ClickedDate { user, month, day } => {
                let records = self.store.list(user, month).await?;
                let result = records
                    .into_iter()
                    .find(|r| r.date == *day)
                    .map(QueryData::Record)
                    .ok_or(QueryError::NoWorkoutForDate);

                Ok((result, vec![Tag::month(month), Tag::day(*day)]))
            }
        }
    }
}

/// Pick the next workout to show for `month`, given today's date.
pub fn next_workout_in(
    records: &[DayRecord],
    month: MonthKey,
    today: NaiveDate,
) -> Result<DayRecord, QueryError> {
    let current = MonthKey::from_date(today);

    if month < current {
        return Err(QueryError::OlderDate);
    }
    if records.is_empty() {
        return Err(QueryError::NoDates);
    }

    let next = if month > current {
        records.iter().min_by_key(|r| r.date)
    } else {
        records
            .iter()
            .filter(|r| r.date >= today.day())
            .min_by_key(|r| r.date)
    };

    next.cloned().ok_or(QueryError::NoUpcomingWorkout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::workout::fixtures::workout;
    use async_trait::async_trait;
    use chrono::Month;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::Notify;

    const USER: Option<&str> = Some("u1");

    fn june() -> MonthKey {
        MonthKey::new(2025, Month::June)
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn api_with_days(month: MonthKey, days: &[(u32, &str)]) -> CalendarApi<MemoryStore> {
        let api = CalendarApi::new(MemoryStore::new());
        for (day, name) in days {
            api.write_day_record(USER, month, *day, workout(name))
                .await
                .unwrap();
        }
        api
    }

    fn query_error<T: std::fmt::Debug>(result: FitCalResult<T>) -> QueryError {
        result
            .unwrap_err()
            .query_error()
            .expect("expected a classified query error")
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let api = api_with_days(june(), &[(14, "Push Day")]).await;

        let record = api.clicked_on_date(USER, june(), 14).await.unwrap();

        assert_eq!(record, DayRecord::new(14, workout("Push Day")));
    }

    #[tokio::test]
    async fn test_month_workouts_keyed_by_day_and_tagged() {
        let api = api_with_days(june(), &[(20, "B"), (3, "A")]).await;

        let days = api.month_workouts(USER, june()).await.unwrap();

        assert_eq!(days.keys().copied().collect::<Vec<_>>(), vec![3, 20]);
        let key = QueryKey::MonthWorkouts {
            user: "u1".to_string(),
            month: june(),
        };
        let cache = api.cache.lock().await;
        let tags = cache.tags(&key).unwrap();
        assert!(tags.contains(&Tag::day(3)));
        assert!(tags.contains(&Tag::day(20)));
        assert!(tags.contains(&Tag::month(&june())));
    }

    #[tokio::test]
    async fn test_month_workouts_without_user() {
        let api = CalendarApi::new(MemoryStore::new());

        assert_eq!(
            query_error(api.month_workouts(None, june()).await),
            QueryError::MissingUser
        );
    }

    #[tokio::test]
    async fn test_next_workout_future_month_is_earliest_regardless_of_order() {
        let api = api_with_days(june(), &[(25, "Late"), (4, "Early"), (11, "Mid")]).await;

        let record = api
            .next_workout(USER, june(), date(2025, 5, 30))
            .await
            .unwrap();

        assert_eq!(record.date, 4);
        assert_eq!(record.workout.name, "Early");
    }

    #[tokio::test]
    async fn test_next_workout_current_month_on_or_after_today() {
        let api = api_with_days(june(), &[(2, "Past"), (10, "Today"), (18, "Later")]).await;

        let on_day = api.next_workout(USER, june(), date(2025, 6, 10)).await.unwrap();
        assert_eq!(on_day.workout.name, "Today");

        let after = api.next_workout(USER, june(), date(2025, 6, 11)).await.unwrap();
        assert_eq!(after.workout.name, "Later");
    }

    #[tokio::test]
    async fn test_next_workout_current_month_nothing_left() {
        let api = api_with_days(june(), &[(2, "Past")]).await;

        assert_eq!(
            query_error(api.next_workout(USER, june(), date(2025, 6, 20)).await),
            QueryError::NoUpcomingWorkout
        );
    }

    #[tokio::test]
    async fn test_next_workout_past_month_is_older_date_even_with_records() {
        let api = api_with_days(june(), &[(28, "Old")]).await;

        assert_eq!(
            query_error(api.next_workout(USER, june(), date(2025, 7, 1)).await),
            QueryError::OlderDate
        );
        assert_eq!(
            query_error(api.next_workout(USER, june(), date(2026, 1, 1)).await),
            QueryError::OlderDate
        );
    }

    #[tokio::test]
    async fn test_next_workout_empty_month_is_no_dates() {
        let api = CalendarApi::new(MemoryStore::new());

        assert_eq!(
            query_error(api.next_workout(USER, june(), date(2025, 6, 1)).await),
            QueryError::NoDates
        );
    }

    #[tokio::test]
    async fn test_next_workout_without_user() {
        let api = CalendarApi::new(MemoryStore::new());

        assert_eq!(
            query_error(api.next_workout(None, june(), date(2025, 6, 1)).await),
            QueryError::UserIdError
        );
    }

    #[tokio::test]
    async fn test_clicked_date_without_workout() {
        let api = api_with_days(june(), &[(3, "A")]).await;

        assert_eq!(
            query_error(api.clicked_on_date(USER, june(), 4).await),
            QueryError::NoWorkoutForDate
        );
        assert_eq!(
            query_error(api.clicked_on_date(None, june(), 3).await),
            QueryError::UserIdError
        );
    }

    #[tokio::test]
    async fn test_delete_missing_record_is_noop() {
        let api = CalendarApi::new(MemoryStore::new());

        let mutation = api.delete_day_record(USER, june(), 9).await.unwrap();

        assert!(mutation.invalidated.is_empty());
    }

    #[tokio::test]
    async fn test_delete_invalidates_and_next_query_refetches() {
        let api = api_with_days(june(), &[(3, "A"), (9, "B")]).await;
        let today = date(2025, 6, 1);

        assert_eq!(api.next_workout(USER, june(), today).await.unwrap().date, 3);
        assert_eq!(api.clicked_on_date(USER, june(), 9).await.unwrap().date, 9);

        let mutation = api.delete_day_record(USER, june(), 3).await.unwrap();

        // Both queries depend on Month:june
        assert_eq!(mutation.invalidated.len(), 2);
        assert_eq!(api.next_workout(USER, june(), today).await.unwrap().date, 9);
    }

    #[tokio::test]
    async fn test_cached_error_is_invalidated_by_write() {
        let api = CalendarApi::new(MemoryStore::new());
        let today = date(2025, 6, 1);

        assert_eq!(
            query_error(api.clicked_on_date(USER, june(), 5).await),
            QueryError::NoWorkoutForDate
        );

        let mutation = api
            .write_day_record(USER, june(), 5, workout("New"))
            .await
            .unwrap();
        assert_eq!(mutation.invalidated.len(), 1);

        assert_eq!(api.clicked_on_date(USER, june(), 5).await.unwrap().workout.name, "New");
        assert_eq!(api.next_workout(USER, june(), today).await.unwrap().date, 5);
    }

    #[tokio::test]
    async fn test_missing_user_results_are_not_cached() {
        let api = CalendarApi::new(MemoryStore::new());

        let _ = api.clicked_on_date(None, june(), 5).await;

        assert!(api.cache.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_toggle_complete_flips_and_invalidates() {
        let api = api_with_days(june(), &[(7, "A")]).await;
        assert!(!api.clicked_on_date(USER, june(), 7).await.unwrap().workout.complete);

        let first = api.toggle_complete(USER, june(), 7).await.unwrap();
        assert!(first.value);
        assert_eq!(first.invalidated.len(), 1);
        assert!(api.clicked_on_date(USER, june(), 7).await.unwrap().workout.complete);

        let second = api.toggle_complete(USER, june(), 7).await.unwrap();
        assert!(!second.value);
    }

    #[tokio::test]
    async fn test_toggle_missing_record() {
        let api = CalendarApi::new(MemoryStore::new());

        assert_eq!(
            query_error(api.toggle_complete(USER, june(), 7).await),
            QueryError::NoWorkoutForDate
        );
        assert!(api.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_mutations_without_user() {
        let api = CalendarApi::new(MemoryStore::new());

        assert_eq!(
            query_error(api.delete_day_record(None, june(), 1).await),
            QueryError::MissingUser
        );
        assert_eq!(
            query_error(api.write_day_record(None, june(), 1, workout("A")).await),
            QueryError::MissingUser
        );
        assert_eq!(
            query_error(api.toggle_complete(None, june(), 1).await),
            QueryError::MissingUser
        );
    }

    #[tokio::test]
    async fn test_write_rejects_day_outside_month() {
        let api = CalendarApi::new(MemoryStore::new());

        let result = api.write_day_record(USER, june(), 31, workout("A")).await;

        assert!(matches!(result, Err(FitCalError::InvalidDate(_))));
    }

    #[tokio::test]
    async fn test_refetch_repopulates_invalidated_queries() {
        let api = api_with_days(june(), &[(3, "A")]).await;
        api.clicked_on_date(USER, june(), 3).await.unwrap();

        let mutation = api.delete_day_record(USER, june(), 3).await.unwrap();
        api.refetch(&mutation.invalidated).await.unwrap();

        let cache = api.cache.lock().await;
        assert_eq!(
            cache.get(&mutation.invalidated[0]),
            Some(&Err(QueryError::NoWorkoutForDate))
        );
    }

    #[tokio::test]
    async fn test_expand_program_writes_two_days_seven_apart() {
        let api = CalendarApi::new(MemoryStore::new());
        let program = Program {
            duration: 2,
            shape: [Some(0), None, None, None, None, None, None],
            workouts: vec![workout("W")],
        };

        let mutation = api
            .expand_program_to_calendar(USER, date(2025, 6, 3), &program)
            .await
            .unwrap();

        assert_eq!(api.store().len().await, 2);
        assert_eq!(api.clicked_on_date(USER, june(), 3).await.unwrap().workout.name, "W");
        assert_eq!(api.clicked_on_date(USER, june(), 10).await.unwrap().workout.name, "W");
        assert_eq!(
            mutation.value,
            vec![
                Tag::Month("june".to_string()),
                Tag::Day(3),
                Tag::Month("june".to_string()),
                Tag::Day(10),
            ]
        );
    }

    #[tokio::test]
    async fn test_expand_program_invalidates_touched_months() {
        let api = CalendarApi::new(MemoryStore::new());
        let july = MonthKey::new(2025, Month::July);
        let today = date(2025, 6, 1);
        assert_eq!(
            query_error(api.next_workout(USER, july, today).await),
            QueryError::NoDates
        );

        let program = Program {
            duration: 1,
            shape: [Some(0), None, None, None, None, None, Some(0)],
            workouts: vec![workout("W")],
        };
        let mutation = api
            .expand_program_to_calendar(USER, date(2025, 6, 28), &program)
            .await
            .unwrap();

        assert_eq!(mutation.invalidated.len(), 1);
        assert_eq!(api.next_workout(USER, july, today).await.unwrap().date, 4);
    }

    /// Fails every `set` for one day of the month.
    struct FailingStore {
        inner: MemoryStore,
        fail_day: u32,
        sets: AtomicUsize,
    }

    #[async_trait]
    impl DocumentStore for FailingStore {
        async fn list(&self, user: &str, month: &MonthKey) -> FitCalResult<Vec<DayRecord>> {
            self.inner.list(user, month).await
        }

        async fn get(&self, path: &DocPath) -> FitCalResult<Option<DayRecord>> {
            self.inner.get(path).await
        }

        async fn set(&self, path: &DocPath, record: &DayRecord) -> FitCalResult<()> {
            self.sets.fetch_add(1, Ordering::SeqCst);
            if path.day == self.fail_day {
                return Err(std::io::Error::other("disk full").into());
            }
            self.inner.set(path, record).await
        }

        async fn delete(&self, path: &DocPath) -> FitCalResult<()> {
            self.inner.delete(path).await
        }
    }

    #[tokio::test]
    async fn test_expand_program_rolls_back_on_failure() {
        let inner = MemoryStore::new();
        let existing = DocPath::new("u1", june(), 5);
        inner
            .set(&existing, &DayRecord::new(5, workout("Keep Me")))
            .await
            .unwrap();

        // Days 3 and 5 are written, day 7 fails
        let api = CalendarApi::new(FailingStore {
            inner,
            fail_day: 7,
            sets: AtomicUsize::new(0),
        });
        let program = Program {
            duration: 1,
            shape: [Some(0), None, Some(0), None, Some(0), None, None],
            workouts: vec![workout("Program Day")],
        };

        let result = api
            .expand_program_to_calendar(USER, date(2025, 6, 3), &program)
            .await;

        assert!(matches!(result, Err(FitCalError::Io(_))));
        // 3 writes, then restoring day 5
        assert_eq!(api.store().sets.load(Ordering::SeqCst), 4);
        let store = &api.store().inner;
        assert_eq!(store.len().await, 1);
        assert_eq!(
            store.get(&existing).await.unwrap().unwrap().workout.name,
            "Keep Me"
        );
    }

    /// Pauses the first `list` after reading, until released.
    struct PausedList {
        inner: MemoryStore,
        armed: AtomicBool,
        listed: Notify,
        release: Notify,
    }

    #[async_trait]
    impl DocumentStore for PausedList {
        async fn list(&self, user: &str, month: &MonthKey) -> FitCalResult<Vec<DayRecord>> {
            let records = self.inner.list(user, month).await?;
            if self.armed.swap(false, Ordering::SeqCst) {
                self.listed.notify_one();
                self.release.notified().await;
            }
            Ok(records)
        }

        async fn get(&self, path: &DocPath) -> FitCalResult<Option<DayRecord>> {
            self.inner.get(path).await
        }

        async fn set(&self, path: &DocPath, record: &DayRecord) -> FitCalResult<()> {
            self.inner.set(path, record).await
        }

        async fn delete(&self, path: &DocPath) -> FitCalResult<()> {
            self.inner.delete(path).await
        }
    }

    #[tokio::test]
    async fn test_fetch_racing_a_write_is_not_cached() {
        let api = Arc::new(CalendarApi::new(PausedList {
            inner: MemoryStore::new(),
            armed: AtomicBool::new(true),
            listed: Notify::new(),
            release: Notify::new(),
        }));

        let reader = {
            let api = Arc::clone(&api);
            tokio::spawn(async move { api.clicked_on_date(USER, june(), 5).await })
        };

        // The read has listed an empty month and is paused
        api.store().listed.notified().await;
        api.write_day_record(USER, june(), 5, workout("Push"))
            .await
            .unwrap();
        api.store().release.notify_one();

        assert_eq!(
            query_error(reader.await.unwrap()),
            QueryError::NoWorkoutForDate
        );
        let key = QueryKey::ClickedDate {
            user: "u1".to_string(),
            month: june(),
            day: 5,
        };
        assert!(api.cache.lock().await.get(&key).is_none());

        let record = api.clicked_on_date(USER, june(), 5).await.unwrap();
        assert_eq!(record.workout.name, "Push");
    }

    #[test]
    fn test_next_workout_in_checks_past_before_empty() {
        let july = MonthKey::new(2025, Month::July);

        assert_eq!(
            next_workout_in(&[], june(), date(2025, 7, 2)),
            Err(QueryError::OlderDate)
        );
        assert_eq!(
            next_workout_in(&[], july, date(2025, 7, 2)),
            Err(QueryError::NoDates)
        );
    }
}
