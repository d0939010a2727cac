//! Reusable UI components

pub mod battery;
pub mod header;
pub mod indicator;
pub mod keypad;
pub mod notification;
pub mod status_bar;
