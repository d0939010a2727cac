//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

use infotainment_core::BatteryLevel;

/// Head unit color palette
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    // Panel colors
    pub accent: Color,
    pub background: Color,
    pub panel: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub info: Color,

    // Dashboard lamps
    pub indicator_lit: Color,
    pub indicator_dim: Color,
    pub lamp_on: Color,

    // UI element colors
    pub border: Color,
    pub border_focused: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Slider and battery gauges
    pub gauge_empty: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            accent: Color::Rgb(127, 255, 212),    // #7FFFD4 - Aquamarine
            background: Color::Rgb(18, 32, 38),   // #122026
            panel: Color::Rgb(30, 52, 60),        // #1E343C

            // Status colors
            success: Color::Rgb(76, 175, 80), // #4CAF50 - Green
            warning: Color::Rgb(255, 152, 0), // #FF9800 - Orange
            danger: Color::Rgb(244, 67, 54),  // #F44336 - Red
            info: Color::Rgb(33, 150, 243),   // #2196F3 - Blue

            // Lamps
            indicator_lit: Color::Rgb(0, 230, 118), // #00E676
            indicator_dim: Color::Rgb(55, 71, 79),  // #37474F
            lamp_on: Color::Rgb(41, 182, 246),      // #29B6F6

            // UI elements
            border: Color::Rgb(84, 110, 122),          // #546E7A
            border_focused: Color::Rgb(127, 255, 212), // #7FFFD4
            text_primary: Color::Rgb(250, 250, 250),   // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),     // #757575

            gauge_empty: Color::Rgb(55, 71, 79),
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get highlighted text style
    pub fn text_highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Get title style
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Screen background
    pub fn screen(&self) -> Style {
        Style::default().bg(self.background).fg(self.text_primary)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.border_focused)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default().fg(self.danger).add_modifier(Modifier::BOLD)
    }

    /// Get info style
    pub fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    /// Turn signal arrow
    pub fn indicator(&self, lit: bool) -> Style {
        if lit {
            Style::default()
                .fg(self.indicator_lit)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.indicator_dim)
        }
    }

    /// Latching lamp or quick toggle button
    pub fn switch(&self, on: bool) -> Style {
        if on {
            Style::default()
                .fg(self.background)
                .bg(self.lamp_on)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_secondary).bg(self.panel)
        }
    }

    /// Keypad button
    pub fn key_cap(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.panel)
    }

    /// Battery ring color band
    pub fn battery(&self, level: BatteryLevel) -> Style {
        let color = match level {
            BatteryLevel::High => self.success,
            BatteryLevel::Medium => self.warning,
            BatteryLevel::Low => self.danger,
        };
        Style::default().fg(color)
    }

    /// Slider gauge
    pub fn gauge(&self) -> Style {
        Style::default().fg(self.accent).bg(self.gauge_empty)
    }

    /// Create a dark theme variant
    pub fn dark() -> Self {
        Self {
            accent: Color::Rgb(0, 191, 165), // #00BFA5
            background: Color::Rgb(10, 10, 10),
            panel: Color::Rgb(33, 33, 33),
            border: Color::Rgb(66, 66, 66),
            border_focused: Color::Rgb(0, 191, 165),
            gauge_empty: Color::Rgb(48, 48, 48),
            ..Self::default()
        }
    }

    /// Create a high-contrast theme variant
    pub fn high_contrast() -> Self {
        Self {
            accent: Color::Yellow,
            background: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            border: Color::White,
            border_focused: Color::Yellow,
            indicator_lit: Color::LightGreen,
            indicator_dim: Color::DarkGray,
            ..Self::default()
        }
    }

    /// Palette for the current settings; high contrast wins over dark mode
    pub fn select(dark_mode: bool, high_contrast: bool) -> Self {
        if high_contrast {
            Self::high_contrast()
        } else if dark_mode {
            Self::dark()
        } else {
            Self::default()
        }
    }

    /// Whether this is the dark variant
    pub fn is_dark(&self) -> bool {
        self.background == Self::dark().background
    }
}
