//! Dashboard lamps, display power and trip labels

use std::collections::HashSet;

/// Latching lamp buttons on the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lamp {
    HighBeam,
    LowBeam,
    Charging,
}

impl Lamp {
    pub const ALL: [Lamp; 3] = [Lamp::HighBeam, Lamp::LowBeam, Lamp::Charging];

    pub fn label(&self) -> &'static str {
        match self {
            Lamp::HighBeam => "High beam",
            Lamp::LowBeam => "Low beam",
            Lamp::Charging => "Charging",
        }
    }
}

/// Which lamps are switched on
#[derive(Debug, Clone, Default)]
pub struct LampPanel {
    on: HashSet<Lamp>,
}

impl LampPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a lamp, returning its new state
    pub fn toggle(&mut self, lamp: Lamp) -> bool {
        let now_on = if self.on.remove(&lamp) {
            false
        } else {
            self.on.insert(lamp);
            true
        };
        tracing::debug!(lamp = lamp.label(), on = now_on, "lamp toggled");
        now_on
    }

    pub fn is_on(&self, lamp: Lamp) -> bool {
        self.on.contains(&lamp)
    }
}

/// Dashboard display state; the power button blanks the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayPower {
    #[default]
    On,
    Off,
}

impl DisplayPower {
    pub fn is_on(&self) -> bool {
        matches!(self, DisplayPower::On)
    }

    pub fn toggle(&mut self) {
        *self = match self {
            DisplayPower::On => DisplayPower::Off,
            DisplayPower::Off => DisplayPower::On,
        };
    }
}

/// Three labels along the bottom of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripLabels {
    pub left: String,
    pub center: String,
    pub right: String,
}

impl Default for TripLabels {
    fn default() -> Self {
        Self {
            left: "20 km".to_string(),
            center: "Battery: 75%".to_string(),
            right: "Range: 30 km".to_string(),
        }
    }
}

impl TripLabels {
    pub fn set_left(&mut self, text: impl Into<String>) {
        self.left = text.into();
    }

    pub fn set_center(&mut self, text: impl Into<String>) {
        self.center = text.into();
    }

    pub fn set_right(&mut self, text: impl Into<String>) {
        self.right = text.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lamps_toggle_independently() {
        let mut panel = LampPanel::new();
        assert!(panel.toggle(Lamp::HighBeam));
        assert!(panel.toggle(Lamp::Charging));
        assert!(!panel.toggle(Lamp::HighBeam));
        assert!(!panel.is_on(Lamp::HighBeam));
        assert!(panel.is_on(Lamp::Charging));
        assert!(!panel.is_on(Lamp::LowBeam));
    }

    #[test]
    fn test_display_power() {
        let mut power = DisplayPower::default();
        assert!(power.is_on());
        power.toggle();
        assert_eq!(power, DisplayPower::Off);
    }

    #[test]
    fn test_trip_labels() {
        let mut labels = TripLabels::default();
        assert_eq!(labels.center, "Battery: 75%");
        labels.set_right("Range: 12 km");
        assert_eq!(labels.right, "Range: 12 km");
    }
}
