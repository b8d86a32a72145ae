//! Which prompt query is active.

use crate::month_key::MonthKey;

/// User actions that move the prompt between states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptAction {
    SelectMonth(MonthKey),
    ClickDate(MonthKey, u32),
    RemoveFromCalendar,
}

/// The single query a prompt state runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveQuery {
    NextWorkout(MonthKey),
    ClickedDate(MonthKey, u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromptState {
    #[default]
    Idle,
    ViewingMonth(MonthKey),
    ViewingClickedDate(MonthKey, u32),
}

impl PromptState {
    pub fn apply(self, action: PromptAction) -> PromptState {
        match (self, action) {
            (_, PromptAction::SelectMonth(month)) => PromptState::ViewingMonth(month),
            (_, PromptAction::ClickDate(month, day)) => PromptState::ViewingClickedDate(month, day),
            (PromptState::ViewingClickedDate(month, _), PromptAction::RemoveFromCalendar) => {
                PromptState::ViewingMonth(month)
            }
            (state, PromptAction::RemoveFromCalendar) => state,
        }
    }

    pub fn active_query(&self) -> Option<ActiveQuery> {
        match *self {
            PromptState::Idle => None,
            PromptState::ViewingMonth(month) => Some(ActiveQuery::NextWorkout(month)),
            PromptState::ViewingClickedDate(month, day) => Some(ActiveQuery::ClickedDate(month, day)),
        }
    }

    /// The "Today is..." intro shows whenever no date is clicked.
    pub fn shows_intro(&self) -> bool {
        !matches!(self, PromptState::ViewingClickedDate(..))
    }
}
