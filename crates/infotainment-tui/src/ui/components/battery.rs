//! Battery and slider gauges

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge};

use infotainment_core::{Battery, Slider};

use crate::ui::Theme;

/// Render the battery charge, colored by level
pub fn render_battery(frame: &mut Frame, area: Rect, battery: &Battery, theme: &Theme) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(theme.battery(battery.level()).bg(theme.gauge_empty))
        .percent(u16::from(battery.percentage()))
        .label(format!("Battery {}%", battery.percentage()));

    frame.render_widget(gauge, area);
}

/// Render a labelled 0-100 slider
pub fn render_slider(frame: &mut Frame, area: Rect, label: &str, slider: &Slider, theme: &Theme) {
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::NONE))
        .gauge_style(theme.gauge())
        .ratio(slider.ratio())
        .label(format!("{} {}", label, slider.value()));

    frame.render_widget(gauge, area);
}
