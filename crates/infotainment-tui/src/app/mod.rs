//! Application state and event handling

pub mod config;
pub mod events;
mod state;

pub use config::{ConfigError, MapConfig, TuiConfig};
pub use events::{Event, EventHandler};
pub use state::{
    AppState, ControlCenterState, DashboardState, HomeState, LockState, ModelViewerState,
    NavigationState, ScreenState,
};

use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use infotainment_core::{
    clock::CLOCK_REFRESH, Lamp, NavEvent, PinOutcome, PinPad, Point, Screen, Swipe,
    SwipeTracker, Toggle,
};
use ratatui::prelude::*;

use crate::ui::{self, components::notification::{Notification, NotificationManager}, Theme};

/// Slider change per key press
const SLIDER_STEP: u8 = 10;

/// Shortest tick the event loop accepts
const MIN_TICK: Duration = Duration::from_millis(10);

/// Main application struct
pub struct App {
    /// Application state
    pub state: AppState,

    /// Loaded configuration
    pub config: TuiConfig,

    /// Where configuration changes are written back, if anywhere
    config_path: Option<PathBuf>,

    /// Active colour theme
    pub theme: Theme,

    /// High-contrast palette requested on the command line
    high_contrast: bool,

    /// Toast notifications
    pub notifications: NotificationManager,

    /// Drag in progress, for swipe gestures
    swipe: SwipeTracker,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Tick counter for animations
    pub tick: u64,

    /// Last clock refresh
    last_clock: Instant,
}

impl App {
    /// Create a new application instance
    ///
    /// Fails when the configured PIN is not a valid lock screen secret.
    pub fn new(config: TuiConfig, config_path: Option<PathBuf>) -> infotainment_core::Result<Self> {
        PinPad::new(&config.pin)?;

        let theme = Theme::select(config.dark_mode, false);

        Ok(Self {
            state: AppState::new(&config),
            swipe: SwipeTracker::new(config.swipe_thresholds()),
            config,
            config_path,
            theme,
            high_contrast: false,
            notifications: NotificationManager::new(),
            should_quit: false,
            tick: 0,
            last_clock: Instant::now(),
        })
    }

    /// Switch to the high-contrast palette for the rest of the session
    pub fn set_high_contrast(&mut self, on: bool) {
        self.high_contrast = on;
        self.theme = Theme::select(self.config.dark_mode, on);
    }

    /// Run the application main loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()> {
        let tick_rate = Duration::from_millis(self.config.tick_rate_ms).max(MIN_TICK);
        let mut events = EventHandler::new(tick_rate);

        tracing::info!(screen = %self.state.current_screen(), "infotainment started");

        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, self))?;

            match events.next().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        tracing::info!("infotainment stopped");
        Ok(())
    }

    /// Dispatch one event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(..) => {}
            Event::Tick => self.on_tick(Instant::now()),
        }
    }

    /// Advance timers to `now`
    pub fn on_tick(&mut self, now: Instant) {
        self.tick = self.tick.wrapping_add(1);

        let refresh_clock = now.saturating_duration_since(self.last_clock) >= CLOCK_REFRESH;
        if refresh_clock {
            self.last_clock = now;
        }
        self.state.screen.tick(now, refresh_clock);
        self.notifications.tick();
    }

    /// Handle key press events
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Global quit handlers
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }
        if key.code == KeyCode::Esc {
            self.navigate(NavEvent::Back);
            return;
        }

        // Delegate to screen-specific handlers
        match self.state.current_screen() {
            Screen::Home => self.handle_home_key(key.code),
            Screen::Lock => self.handle_lock_key(key.code),
            Screen::Dashboard => self.handle_dashboard_key(key.code),
            Screen::ControlCenter => self.handle_control_center_key(key.code),
            Screen::Navigation | Screen::ModelViewer => {}
        }
    }

    /// Handle mouse drags as swipes
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let at = Point::new(i32::from(mouse.column), i32::from(mouse.row));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.swipe.press(at),
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(swipe) = self.swipe.release(at) {
                    self.handle_swipe(swipe);
                }
            }
            _ => {}
        }
    }

    fn handle_swipe(&mut self, swipe: Swipe) {
        tracing::debug!(?swipe, "swipe detected");
        match swipe {
            Swipe::Up => self.navigate(NavEvent::SwipeUp),
            Swipe::Right => self.navigate(NavEvent::SwipeLeftToRight),
            Swipe::Left => {}
        }
    }

    /// Move to another screen; the old screen's state is dropped
    fn navigate(&mut self, event: NavEvent) {
        if let Some(screen) = self.state.navigator.handle(event) {
            self.state.screen = ScreenState::enter(screen, &self.config);
            self.state.status_message = None;
            self.swipe.cancel();
        }
    }

    fn handle_home_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('u') => self.navigate(NavEvent::SwipeUp),
            _ => {}
        }
    }

    fn handle_lock_key(&mut self, key: KeyCode) {
        if key == KeyCode::Right {
            self.navigate(NavEvent::SwipeLeftToRight);
            return;
        }

        let pin_key = match key {
            KeyCode::Char(c @ '0'..='9') => infotainment_core::Key::from_char(c).ok(),
            KeyCode::Backspace | KeyCode::Char('c') => Some(infotainment_core::Key::Clear),
            KeyCode::Enter | KeyCode::Char('e') => Some(infotainment_core::Key::Submit),
            _ => None,
        };
        let Some(pin_key) = pin_key else {
            return;
        };
        let ScreenState::Lock(lock) = &mut self.state.screen else {
            return;
        };

        let outcome = lock.pad.press(pin_key);
        if let Some(toast) = Notification::for_outcome(outcome) {
            self.notifications.push(toast);
        }
        if outcome == PinOutcome::Accepted {
            self.navigate(NavEvent::PinAccepted);
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyCode) {
        let ScreenState::Dashboard(dashboard) = &mut self.state.screen else {
            return;
        };

        // A blank display wakes on any key
        if !dashboard.power.is_on() {
            dashboard.power.toggle();
            return;
        }

        let now = Instant::now();
        let nav = match key {
            KeyCode::Left => {
                dashboard.blink.start_left(now);
                None
            }
            KeyCode::Right => {
                dashboard.blink.start_right(now);
                None
            }
            KeyCode::Char('h') => {
                dashboard.blink.toggle_hazard(now);
                None
            }
            KeyCode::Char('b') => {
                dashboard.lamps.toggle(Lamp::HighBeam);
                None
            }
            KeyCode::Char('l') => {
                dashboard.lamps.toggle(Lamp::LowBeam);
                None
            }
            KeyCode::Char('g') => {
                dashboard.lamps.toggle(Lamp::Charging);
                None
            }
            KeyCode::Char('p') => {
                dashboard.power.toggle();
                None
            }
            KeyCode::Char('c') => Some(NavEvent::OpenControlCenter),
            KeyCode::Char('n') => Some(NavEvent::OpenNavigation),
            KeyCode::Char('m') => Some(NavEvent::OpenModelViewer),
            KeyCode::Char('k') => Some(NavEvent::Lock),
            _ => None,
        };

        if let Some(event) = nav {
            self.navigate(event);
        }
    }

    fn handle_control_center_key(&mut self, key: KeyCode) {
        let ScreenState::ControlCenter(center) = &mut self.state.screen else {
            return;
        };

        match key {
            KeyCode::Char(c @ '1'..='8') => {
                let slot = c as usize - '0' as usize;
                if let Some(toggle) = Toggle::from_slot(slot) {
                    let on = center.control.toggles.toggle(toggle);
                    self.on_toggle(toggle, on);
                }
            }
            KeyCode::Up => center.control.brightness.step_up(SLIDER_STEP),
            KeyCode::Down => center.control.brightness.step_down(SLIDER_STEP),
            KeyCode::Char('+') | KeyCode::Char('=') => center.control.volume.step_up(SLIDER_STEP),
            KeyCode::Char('-') => center.control.volume.step_down(SLIDER_STEP),
            KeyCode::Char(' ') => center.playlist.play_pause(),
            KeyCode::Char('[') => center.playlist.prev(),
            KeyCode::Char(']') => center.playlist.next(),
            _ => {}
        }
    }

    fn on_toggle(&mut self, toggle: Toggle, on: bool) {
        let state = if on { "on" } else { "off" };
        self.state.status_message = Some(format!("{} {}", toggle, state));

        match toggle {
            Toggle::DarkMode => self.apply_dark_mode(on),
            Toggle::Lock if on => self.navigate(NavEvent::Lock),
            _ => {}
        }
    }

    fn apply_dark_mode(&mut self, on: bool) {
        self.config.dark_mode = on;
        self.theme = Theme::select(on, self.high_contrast);

        if let Some(path) = &self.config_path {
            if let Err(e) = TuiConfig::store_dark_mode(path, on) {
                tracing::warn!("Failed to save config: {}", e);
                self.notifications
                    .push(Notification::warning("Could not save settings"));
            }
        }
    }
}
