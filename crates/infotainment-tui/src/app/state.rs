//! Application state
//!
//! Only the visible screen has live state. Entering a screen builds a fresh
//! state object and leaving it drops the old one, so timers and entry
//! buffers never outlive their screen.

use std::path::{Path, PathBuf};
use std::time::Instant;

use infotainment_core::{
    BlinkController, Battery, ClockFace, ControlCenter, CoreError, DisplayPower, LampPanel,
    Navigator, PinPad, Playlist, Screen, Toggle, TripLabels,
};

use super::config::{MapConfig, TuiConfig};

/// Home screen: clock over the background image
#[derive(Debug)]
pub struct HomeState {
    pub clock: ClockFace,
    /// `None` when the image is missing; the screen draws without it
    pub background: Option<PathBuf>,
}

/// Lock screen: PIN keypad
#[derive(Debug)]
pub struct LockState {
    pub pad: PinPad,
    pub background: Option<PathBuf>,
}

/// Dashboard: indicators, lamps, clock and trip labels
#[derive(Debug)]
pub struct DashboardState {
    pub blink: BlinkController,
    pub lamps: LampPanel,
    pub power: DisplayPower,
    pub trip: TripLabels,
    pub clock: ClockFace,
}

/// Control center: toggles, sliders, battery and music
#[derive(Debug)]
pub struct ControlCenterState {
    pub control: ControlCenter,
    pub playlist: Playlist,
}

/// Navigation: map placeholder
#[derive(Debug)]
pub struct NavigationState {
    pub map: MapConfig,
}

/// Model viewer: asset placeholder
#[derive(Debug)]
pub struct ModelViewerState {
    pub model_path: PathBuf,
    pub available: bool,
}

/// Live state of the visible screen
#[derive(Debug)]
pub enum ScreenState {
    Home(HomeState),
    Lock(LockState),
    Dashboard(DashboardState),
    ControlCenter(ControlCenterState),
    Navigation(NavigationState),
    ModelViewer(ModelViewerState),
}

impl ScreenState {
    /// Build the state for a freshly entered screen
    pub fn enter(screen: Screen, config: &TuiConfig) -> Self {
        match screen {
            Screen::Home => ScreenState::Home(HomeState {
                clock: ClockFace::now(),
                background: existing_asset(&config.background_image),
            }),
            Screen::Lock => ScreenState::Lock(LockState {
                // The secret is validated in App::new
                pad: PinPad::new(&config.pin).unwrap_or_default(),
                background: existing_asset(&config.background_image),
            }),
            Screen::Dashboard => ScreenState::Dashboard(DashboardState {
                blink: BlinkController::new(),
                lamps: LampPanel::new(),
                power: DisplayPower::On,
                trip: TripLabels::default(),
                clock: ClockFace::now(),
            }),
            Screen::ControlCenter => ScreenState::ControlCenter(ControlCenterState {
                control: control_center(config),
                playlist: load_playlist(config),
            }),
            Screen::Navigation => ScreenState::Navigation(NavigationState { map: config.map }),
            Screen::ModelViewer => {
                let available = existing_asset(&config.model_path).is_some();
                ScreenState::ModelViewer(ModelViewerState {
                    model_path: config.model_path.clone(),
                    available,
                })
            }
        }
    }

    pub fn screen(&self) -> Screen {
        match self {
            ScreenState::Home(_) => Screen::Home,
            ScreenState::Lock(_) => Screen::Lock,
            ScreenState::Dashboard(_) => Screen::Dashboard,
            ScreenState::ControlCenter(_) => Screen::ControlCenter,
            ScreenState::Navigation(_) => Screen::Navigation,
            ScreenState::ModelViewer(_) => Screen::ModelViewer,
        }
    }

    /// Advance timers; returns whether anything visible changed
    pub fn tick(&mut self, now: Instant, refresh_clock: bool) -> bool {
        match self {
            ScreenState::Home(home) if refresh_clock => {
                home.clock = ClockFace::now();
                true
            }
            ScreenState::Dashboard(dashboard) => {
                let events = dashboard.blink.poll(now);
                if refresh_clock {
                    dashboard.clock = ClockFace::now();
                }
                refresh_clock || !events.is_empty()
            }
            _ => false,
        }
    }
}

/// Application state
#[derive(Debug)]
pub struct AppState {
    /// Screen history
    pub navigator: Navigator,

    /// Live state of the current screen
    pub screen: ScreenState,

    /// Status message to display
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Self {
        let start = config.start_screen;
        Self {
            navigator: Navigator::new(start),
            screen: ScreenState::enter(start, config),
            status_message: None,
        }
    }

    /// Currently visible screen
    pub fn current_screen(&self) -> Screen {
        self.screen.screen()
    }
}

fn control_center(config: &TuiConfig) -> ControlCenter {
    let mut control = ControlCenter::new(Battery::new(config.battery_percent));
    control.toggles.set(Toggle::DarkMode, config.dark_mode);
    control
}

fn load_playlist(config: &TuiConfig) -> Playlist {
    let Some(folder) = &config.music_folder else {
        return Playlist::missing();
    };

    match Playlist::load(folder) {
        Ok(playlist) => playlist,
        Err(e) => {
            tracing::warn!("Music unavailable: {}", e);
            Playlist::missing()
        }
    }
}

/// Path of an asset if it exists, logging the miss otherwise
fn existing_asset(path: &Path) -> Option<PathBuf> {
    if path.exists() {
        Some(path.to_path_buf())
    } else {
        tracing::warn!("{}", CoreError::ResourceMissing(path.to_path_buf()));
        None
    }
}
