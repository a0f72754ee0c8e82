//! Core types and state for the Ruokala student-restaurant browser.
//!
//! This crate holds everything that does not need a browser:
//! - Data model: [`Restaurant`], [`Course`], [`DailyMenu`], [`WeeklyMenu`]
//! - Distance ranking: [`planar_distance`], [`rank_by_distance`]
//! - Company filtering: [`CompanyFilter`]
//! - Escaped markup rendering: [`view`]
//! - The UI state machine: [`BoardState`], [`BoardMessage`], [`Command`]
//! - The remote API seam: [`DataSource`], [`Endpoints`]
//! - Configuration and errors: [`AppConfig`], [`RequestError`], [`SetupError`]

#![allow(
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]

mod config;
mod error;
mod filter;
mod geolocation;
mod geometry;
mod model;
mod source;
mod state;
pub mod view;

pub use config::{ApiConfig, AppConfig, GeolocationConfig, MapConfig, Selectors};
pub use error::{ConfigError, RequestError, SetupError};
pub use filter::CompanyFilter;
pub use geolocation::{PositionError, PositionErrorKind, PositionOptions};
pub use geometry::{planar_distance, rank_by_distance, Coordinates};
pub use model::{Course, DailyMenu, DayMenu, Location, Menu, MenuKind, Restaurant, WeeklyMenu};
pub use source::{load_board, load_menu, DataSource, Endpoints};
pub use state::{
    BoardMessage, BoardState, Command, DialogTarget, MarkerSpec, MenuRequest, OpenDialog,
    RowState, State, TableRow,
};
