//! The workout prompt view: runs the query for the current state and picks what to say.

use chrono::NaiveDate;

use super::narrative::Narrative;
use super::selector::{ActiveQuery, PromptAction, PromptState};
use crate::calendar_api::CalendarApi;
use crate::error::{FitCalError, FitCalResult, QueryError};
use crate::store::DocumentStore;
use crate::workout::DayRecord;

/// Runs the active query for a prompt state and picks the narrative branch.
pub struct PromptView<'a, S> {
    api: &'a CalendarApi<S>,
    user: Option<&'a str>,
    today: NaiveDate,
}

impl<'a, S: DocumentStore> PromptView<'a, S> {
    pub fn new(api: &'a CalendarApi<S>, user: Option<&'a str>, today: NaiveDate) -> Self {
        PromptView { api, user, today }
    }

    pub async fn render(&self, state: &PromptState) -> FitCalResult<Vec<Narrative>> {
        let mut narratives = Vec::new();

        if state.shows_intro() {
            narratives.push(Narrative::Intro { today: self.today });
        }

        let branch = match state.active_query() {
            None => None,
            Some(ActiveQuery::NextWorkout(month)) => {
                match self.api.next_workout(self.user, month, self.today).await {
                    Ok(record) => Some(Narrative::UpcomingWorkout { month, record }),
                    Err(e) => match classified(e)? {
                        QueryError::NoUpcomingWorkout | QueryError::NoDates => {
                            Some(Narrative::NoUpcomingWorkout { month })
                        }
                        QueryError::OlderDate => Some(Narrative::OlderMonth { month }),
                        _ => None,
                    },
                }
            }
            Some(ActiveQuery::ClickedDate(month, day)) => {
                match self.api.clicked_on_date(self.user, month, day).await {
                    Ok(record) => Some(Narrative::ClickedWorkout { month, record }),
                    Err(e) => match classified(e)? {
                        QueryError::UserIdError => None,
                        _ => Some(Narrative::ClickedNoWorkout { month, day }),
                    },
                }
            }
        };

        narratives.extend(branch);
        Ok(narratives)
    }

    /// Remove the workout the prompt is showing, refetch what that made
    /// stale, and move to the next state.
    ///
    /// Returns the removed record, or `None` when nothing was shown.
    pub async fn remove_from_calendar(
        &self,
        state: PromptState,
    ) -> FitCalResult<(PromptState, Option<DayRecord>)> {
        let shown = match state.active_query() {
            None => return Ok((state, None)),
            Some(ActiveQuery::NextWorkout(month)) => self
                .api
                .next_workout(self.user, month, self.today)
                .await
                .map(|record| (month, record)),
            Some(ActiveQuery::ClickedDate(month, day)) => self
                .api
                .clicked_on_date(self.user, month, day)
                .await
                .map(|record| (month, record)),
        }
        .map(Some)
        .or_else(|e| classified(e).map(|_| None))?;

        let Some((month, record)) = shown else {
            return Ok((state, None));
        };

        let mutation = self
            .api
            .delete_day_record(self.user, month, record.date)
            .await?;
        self.api.refetch(&mutation.invalidated).await?;

        Ok((state.apply(PromptAction::RemoveFromCalendar), Some(record)))
    }
}

/// Classified outcomes become a branch choice; store failures propagate.
fn classified(e: FitCalError) -> FitCalResult<QueryError> {
    match e {
        FitCalError::Query(kind) => Ok(kind),
        other => Err(other),
    }
}
