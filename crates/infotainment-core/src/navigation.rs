//! Screen navigation state machine
//!
//! All screens live in one process. Hand-offs that used to replace the whole
//! application (home → lock, lock → dashboard) reset the view stack; screens
//! opened from the dashboard are pushed and return with [`NavEvent::Back`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the fixed set of screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Clock over the background image
    #[default]
    Home,
    /// PIN keypad
    Lock,
    /// Indicators, lamps, clock and trip labels
    Dashboard,
    /// Toggles, sliders, battery and music
    ControlCenter,
    /// Map view
    Navigation,
    /// Vehicle model viewer
    ModelViewer,
}

impl Screen {
    pub const ALL: [Screen; 6] = [
        Screen::Home,
        Screen::Lock,
        Screen::Dashboard,
        Screen::ControlCenter,
        Screen::Navigation,
        Screen::ModelViewer,
    ];

    /// Window title
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home Screen",
            Screen::Lock => "Lock Screen",
            Screen::Dashboard => "Infotainment",
            Screen::ControlCenter => "Control Center",
            Screen::Navigation => "Navigation",
            Screen::ModelViewer => "3D Vehicle Model",
        }
    }

    /// Stable name used in config files and on the command line
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Home => "home",
            Screen::Lock => "lock",
            Screen::Dashboard => "dashboard",
            Screen::ControlCenter => "control-center",
            Screen::Navigation => "navigation",
            Screen::ModelViewer => "model-viewer",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Screen {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Screen::ALL
            .into_iter()
            .find(|screen| screen.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownScreen(s.to_string()))
    }
}

/// Requests that may move the user to another screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Swipe up on the home screen
    SwipeUp,
    /// Horizontal swipe on the lock screen
    SwipeLeftToRight,
    /// Lock screen accepted the PIN
    PinAccepted,
    OpenControlCenter,
    OpenNavigation,
    OpenModelViewer,
    /// Return to the previous screen
    Back,
    /// Lock the unit again
    Lock,
}

/// Route represents a navigation path
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    /// Title for breadcrumb
    pub title: &'static str,
}

impl Route {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            title: screen.title(),
        }
    }
}

/// View stack over [`Screen`]
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Route>,
    max_depth: usize,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Screen::default())
    }
}

impl Navigator {
    /// Create a navigator showing `start`
    pub fn new(start: Screen) -> Self {
        Self {
            history: vec![Route::new(start)],
            max_depth: 20,
        }
    }

    /// Screen currently shown
    pub fn current(&self) -> Screen {
        self.history
            .last()
            .map(|route| route.screen)
            .unwrap_or_default()
    }

    /// Apply an event, returning the new screen if it changed
    pub fn handle(&mut self, event: NavEvent) -> Option<Screen> {
        let from = self.current();
        let to = match (from, event) {
            (Screen::Home, NavEvent::SwipeUp) => self.reset(Screen::Lock),
            (Screen::Lock, NavEvent::SwipeLeftToRight) => self.reset(Screen::Home),
            (Screen::Lock, NavEvent::PinAccepted) => self.reset(Screen::Dashboard),
            (Screen::Dashboard, NavEvent::OpenControlCenter) => self.push(Screen::ControlCenter),
            (Screen::Dashboard, NavEvent::OpenNavigation) => self.push(Screen::Navigation),
            (Screen::Dashboard, NavEvent::OpenModelViewer) => self.push(Screen::ModelViewer),
            (_, NavEvent::Back) => self.back(),
            (Screen::Home | Screen::Lock, NavEvent::Lock) => None,
            (_, NavEvent::Lock) => self.reset(Screen::Lock),
            _ => None,
        };

        match to {
            Some(screen) => tracing::info!(%from, to = %screen, ?event, "screen transition"),
            None => tracing::debug!(%from, ?event, "navigation event ignored"),
        }
        to
    }

    fn push(&mut self, screen: Screen) -> Option<Screen> {
        if self.history.len() >= self.max_depth {
            self.history.remove(0);
        }
        self.history.push(Route::new(screen));
        Some(screen)
    }

    fn reset(&mut self, screen: Screen) -> Option<Screen> {
        self.history.clear();
        self.history.push(Route::new(screen));
        Some(screen)
    }

    fn back(&mut self) -> Option<Screen> {
        if !self.can_go_back() {
            return None;
        }
        self.history.pop();
        Some(self.current())
    }

    /// Check if we can go back
    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Get the breadcrumb trail
    pub fn breadcrumb(&self) -> Vec<&str> {
        self.history.iter().map(|route| route.title).collect()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_home_to_lock_to_dashboard() {
        let mut nav = Navigator::new(Screen::Home);
        assert_eq!(nav.handle(NavEvent::SwipeUp), Some(Screen::Lock));
        assert_eq!(nav.handle(NavEvent::PinAccepted), Some(Screen::Dashboard));
        assert!(!nav.can_go_back());
    }

    #[test]
    fn test_lock_swipe_returns_home() {
        let mut nav = Navigator::new(Screen::Lock);
        assert_eq!(nav.handle(NavEvent::SwipeLeftToRight), Some(Screen::Home));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_dashboard_children_push_and_back() {
        let mut nav = Navigator::new(Screen::Dashboard);
        assert_eq!(nav.handle(NavEvent::OpenNavigation), Some(Screen::Navigation));
        assert_eq!(nav.breadcrumb(), vec!["Infotainment", "Navigation"]);
        assert_eq!(nav.handle(NavEvent::Back), Some(Screen::Dashboard));
        assert_eq!(nav.handle(NavEvent::Back), None);
    }

    #[test]
    fn test_invalid_events_ignored() {
        let mut nav = Navigator::new(Screen::Home);
        assert_eq!(nav.handle(NavEvent::PinAccepted), None);
        assert_eq!(nav.handle(NavEvent::OpenControlCenter), None);
        assert_eq!(nav.handle(NavEvent::Lock), None);
        assert_eq!(nav.current(), Screen::Home);
    }

    #[test]
    fn test_lock_from_nested_screen_resets() {
        let mut nav = Navigator::new(Screen::Dashboard);
        nav.handle(NavEvent::OpenControlCenter);
        assert_eq!(nav.handle(NavEvent::Lock), Some(Screen::Lock));
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_screen_names_round_trip() {
        for screen in Screen::ALL {
            assert_eq!(screen.name().parse::<Screen>().unwrap(), screen);
        }
        assert!("garage".parse::<Screen>().is_err());
    }
}
