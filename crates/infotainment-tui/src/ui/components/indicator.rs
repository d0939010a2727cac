//! Turn signal arrows and lamp buttons

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use infotainment_core::{BlinkController, Indicator, Lamp, LampPanel};

use crate::ui::{layout, Theme};

/// Arrow glyph for an indicator
pub fn glyph(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Left => "◀━━",
        Indicator::Right => "━━▶",
        Indicator::Hazard => "▲",
    }
}

/// Render one indicator lamp, bright while lit
pub fn render(
    frame: &mut Frame,
    area: Rect,
    blink: &BlinkController,
    indicator: Indicator,
    theme: &Theme,
) {
    let alignment = match indicator {
        Indicator::Left => Alignment::Left,
        Indicator::Right => Alignment::Right,
        Indicator::Hazard => Alignment::Center,
    };
    let widget = Paragraph::new(glyph(indicator))
        .style(theme.indicator(blink.is_lit(indicator)))
        .alignment(alignment);
    frame.render_widget(widget, area);
}

/// Render the row of latching lamp buttons
pub fn render_lamps(frame: &mut Frame, area: Rect, lamps: &LampPanel, theme: &Theme) {
    for (lamp, cell) in Lamp::ALL.iter().zip(layout::columns(area, Lamp::ALL.len() as u16)) {
        let widget = Paragraph::new(lamp.label())
            .style(theme.switch(lamps.is_on(*lamp)))
            .alignment(Alignment::Center);
        frame.render_widget(widget, cell);
    }
}
