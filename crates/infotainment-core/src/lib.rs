//! Infotainment Core - State machines behind the cycle infotainment screens
//!
//! This crate holds everything the head unit decides on its own: the lock
//! screen PIN gatekeeper, the turn-signal/hazard blink controller, swipe
//! detection, screen navigation and the small amount of state kept by the
//! dashboard and control center. Drawing is left to the front end.

pub mod blink;
pub mod clock;
pub mod control;
pub mod error;
pub mod gesture;
pub mod lights;
pub mod media;
pub mod navigation;
pub mod pin;

pub use blink::{BlinkController, BlinkEvent, BlinkState, Indicator};
pub use clock::ClockFace;
pub use control::{Battery, BatteryLevel, ControlCenter, Slider, Toggle, ToggleBoard};
pub use error::{CoreError, Result};
pub use gesture::{Point, Swipe, SwipeThresholds, SwipeTracker};
pub use lights::{DisplayPower, Lamp, LampPanel, TripLabels};
pub use media::{PlaybackState, Playlist};
pub use navigation::{NavEvent, Navigator, Screen};
pub use pin::{Key, PinOutcome, PinPad, PinPhase, PinPrompt};

/// Maximum number of digits the lock screen accepts
pub const PIN_LENGTH: usize = 4;

/// Secret used when no PIN has been configured
pub const DEFAULT_PIN: &str = "1234";
