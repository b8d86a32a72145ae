//! The workout prompt: a narrative of the next workout in the viewed month,
//! or of the workout on a clicked date.

mod narrative;
mod selector;
mod view;

pub use narrative::{Emphasis, Narrative, Segment};
pub use selector::{ActiveQuery, PromptAction, PromptState};
pub use view::PromptView;
