//! Core types for fitcal.
//!
//! - `store`: per-day workout documents under `user/{user}/{month}_{year}/{day}`
//! - `calendar_api`: cached queries and mutations over a store, with
//!   tag-based invalidation
//! - `prompt`: the workout prompt's state machine and narrative text

pub mod cache;
pub mod calendar_api;
pub mod error;
pub mod fitcal;
pub mod fitcal_config;
pub mod month_key;
pub mod program;
pub mod prompt;
pub mod store;
pub mod workout;
