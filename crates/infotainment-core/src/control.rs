//! Control center state: quick toggles, sliders and battery gauge

use std::fmt;

/// Quick-setting buttons, in on-screen order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    Bluetooth,
    Wifi,
    Lock,
    DarkMode,
    ScreenRotation,
    Flashlight,
    Timer,
    Calculator,
}

impl Toggle {
    pub const ALL: [Toggle; 8] = [
        Toggle::Bluetooth,
        Toggle::Wifi,
        Toggle::Lock,
        Toggle::DarkMode,
        Toggle::ScreenRotation,
        Toggle::Flashlight,
        Toggle::Timer,
        Toggle::Calculator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Toggle::Bluetooth => "Bluetooth",
            Toggle::Wifi => "WiFi",
            Toggle::Lock => "Lock",
            Toggle::DarkMode => "Dark Mode",
            Toggle::ScreenRotation => "Screen Rotation",
            Toggle::Flashlight => "Flashlight",
            Toggle::Timer => "Timer",
            Toggle::Calculator => "Calculator",
        }
    }

    /// Toggle bound to a 1-based slot number
    pub fn from_slot(slot: usize) -> Option<Self> {
        slot.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    fn index(&self) -> usize {
        Self::ALL
            .iter()
            .position(|t| t == self)
            .unwrap_or_default()
    }
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// On/off state of every quick toggle; all start off
#[derive(Debug, Clone, Default)]
pub struct ToggleBoard {
    states: [bool; 8],
}

impl ToggleBoard {
    /// Flip a toggle, returning its new state
    pub fn toggle(&mut self, toggle: Toggle) -> bool {
        let state = &mut self.states[toggle.index()];
        *state = !*state;
        tracing::debug!(%toggle, on = *state, "quick toggle");
        *state
    }

    pub fn is_on(&self, toggle: Toggle) -> bool {
        self.states[toggle.index()]
    }

    pub fn set(&mut self, toggle: Toggle, on: bool) {
        self.states[toggle.index()] = on;
    }
}

/// Vertical slider with a 0-100 range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slider {
    value: u8,
}

impl Slider {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(Self::MAX),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn set(&mut self, value: u8) {
        self.value = value.min(Self::MAX);
    }

    pub fn step_up(&mut self, step: u8) {
        self.set(self.value.saturating_add(step));
    }

    pub fn step_down(&mut self, step: u8) {
        self.value = self.value.saturating_sub(step);
    }

    /// Fill ratio for gauges
    pub fn ratio(&self) -> f64 {
        f64::from(self.value) / f64::from(Self::MAX)
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(50)
    }
}

/// Colour band of the battery ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryLevel {
    High,
    Medium,
    Low,
}

/// Battery charge in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Battery {
    percentage: u8,
}

impl Default for Battery {
    fn default() -> Self {
        Self { percentage: 85 }
    }
}

impl Battery {
    pub fn new(percentage: i32) -> Self {
        let mut battery = Self::default();
        battery.update(percentage);
        battery
    }

    /// Set the charge, clamped to 0-100
    pub fn update(&mut self, percentage: i32) {
        self.percentage = percentage.clamp(0, 100) as u8;
    }

    pub fn percentage(&self) -> u8 {
        self.percentage
    }

    pub fn level(&self) -> BatteryLevel {
        match self.percentage {
            p if p > 70 => BatteryLevel::High,
            p if p > 30 => BatteryLevel::Medium,
            _ => BatteryLevel::Low,
        }
    }
}

/// Everything the control center screen keeps between key presses
#[derive(Debug, Clone, Default)]
pub struct ControlCenter {
    pub toggles: ToggleBoard,
    pub brightness: Slider,
    pub volume: Slider,
    pub battery: Battery,
}

impl ControlCenter {
    pub fn new(battery: Battery) -> Self {
        Self {
            battery,
            ..Self::default()
        }
    }
}
