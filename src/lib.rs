//! ladle — a terminal client for searching a recipe index over HTTP.
//!
//! The crate is organized around one view: a search input, an optional
//! category filter row, and a scrollable list of recipe cards. All state
//! lives in [`app::App`]; the only background work is the search request
//! itself, whose outcome is delivered to the event loop as an
//! [`app::AppEvent`].

pub mod app;
pub mod config;
pub mod search;
pub mod theme;
pub mod ui;
pub mod util;
