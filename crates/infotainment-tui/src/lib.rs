//! Cycle infotainment terminal front end
//!
//! Renders the head unit screens with ratatui and drives the state machines
//! from `infotainment-core` with keyboard, mouse and timer events.

pub mod app;
pub mod ui;

pub use app::App;
