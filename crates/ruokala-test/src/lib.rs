//! Testing harness for the Ruokala restaurant board.
//!
//! - [`fixture`]: restaurant and menu builders plus [`FakeSource`], a
//!   recording in-memory [`DataSource`](ruokala_core::DataSource)
//! - [`harness`]: [`Harness`], which drives a board the way the browser does
//!   and records what the page would show

#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::new_without_default)]

pub mod fixture;
pub mod harness;

pub use fixture::{restaurant, sample_daily_menu, sample_weekly_menu, FakeSource, SourceCall};
pub use harness::{Harness, Page};
