pub mod add;
pub mod month;
pub mod next;
pub mod program;
pub mod remove;
pub mod show;
pub mod toggle;
pub mod user;

use std::time::Duration;

use anyhow::Result;
use chrono::NaiveDate;
use fitcal_core::calendar_api::CalendarApi;
use fitcal_core::fitcal::FitCal;
use fitcal_core::prompt::{PromptState, PromptView};
use fitcal_core::store::DirStore;

use crate::utils::typewriter;

/// What every command needs: config, the calendar API and who is asking.
pub struct Context {
    pub fitcal: FitCal,
    pub api: CalendarApi<DirStore>,
    pub user: Option<String>,
    pub today: NaiveDate,
}

impl Context {
    pub fn new(fitcal: FitCal, user: Option<String>, today: NaiveDate) -> Self {
        let user = user.or_else(|| fitcal.user_id().map(String::from));
        let api = fitcal.api();

        Context {
            fitcal,
            api,
            user,
            today,
        }
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn view(&self) -> PromptView<'_, DirStore> {
        PromptView::new(&self.api, self.user(), self.today)
    }

    pub fn type_speed(&self) -> Duration {
        Duration::from_millis(self.fitcal.config().type_speed_ms)
    }

    /// Render the prompt for `state`, typing out highlighted text.
    pub async fn print_prompt(&self, state: &PromptState) -> Result<()> {
        let narratives = self.view().render(state).await?;

        for narrative in &narratives {
            typewriter::print_narrative(narrative, self.type_speed()).await?;
            println!("\n");
        }

        Ok(())
    }
}

/// Shared error message for commands that need a user
pub fn require_user(ctx: &Context) -> Result<&str> {
    ctx.user().ok_or_else(|| {
        anyhow::anyhow!(
            "No user selected.\n\n\
            Pass --user <id>, or set a default with:\n  \
            fitcal user <id>"
        )
    })
}
