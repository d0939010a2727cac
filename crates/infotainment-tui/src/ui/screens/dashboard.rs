//! Dashboard: turn signals, hazard, lamps, clock and trip labels

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use infotainment_core::Indicator;

use crate::app::{App, DashboardState};
use crate::ui::components::{header, indicator, status_bar};
use crate::ui::layout::{self, ScreenLayout};

/// Draw the dashboard
pub fn draw(frame: &mut Frame, area: Rect, app: &App, dashboard: &DashboardState) {
    let theme = &app.theme;

    if !dashboard.power.is_on() {
        let hint = Paragraph::new("Display off. Press any key")
            .style(theme.text_muted())
            .alignment(Alignment::Center);
        frame.render_widget(hint, layout::centered_rect_fixed(area.width, 1, area));
        return;
    }

    let screen = ScreenLayout::new(area);
    header::render(
        frame,
        screen.header,
        &crate::ui::breadcrumb(app),
        Some(&dashboard.clock),
        theme,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Signals
            Constraint::Min(3),    // Clock
            Constraint::Length(1), // Lamps
            Constraint::Length(3), // Trip labels
        ])
        .split(screen.content);

    let signals = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border());
    let signal_area = signals.inner(chunks[0]);
    frame.render_widget(signals, chunks[0]);
    for (which, cell) in Indicator::ALL
        .iter()
        .zip(signal_columns(signal_area))
    {
        indicator::render(frame, cell, &dashboard.blink, *which, theme);
    }

    let face = layout::centered_rect_fixed(chunks[1].width, 2, chunks[1]);
    let clock = vec![
        Line::styled(dashboard.clock.time.as_str(), theme.title()),
        Line::styled(dashboard.clock.date.as_str(), theme.text_secondary()),
    ];
    frame.render_widget(Paragraph::new(clock).alignment(Alignment::Center), face);

    indicator::render_lamps(frame, chunks[2], &dashboard.lamps, theme);

    let trip = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border());
    let trip_area = trip.inner(chunks[3]);
    frame.render_widget(trip, chunks[3]);
    let labels = [
        (dashboard.trip.left.as_str(), Alignment::Left),
        (dashboard.trip.center.as_str(), Alignment::Center),
        (dashboard.trip.right.as_str(), Alignment::Right),
    ];
    for ((text, alignment), cell) in labels.into_iter().zip(layout::columns(trip_area, 3)) {
        frame.render_widget(
            Paragraph::new(text)
                .style(theme.text())
                .alignment(alignment),
            cell,
        );
    }

    status_bar::render_help_footer(
        frame,
        screen.footer,
        &[
            ("←/→", "Signal"),
            ("h", "Hazard"),
            ("b/l/g", "Lamps"),
            ("p", "Power"),
            ("c", "Controls"),
            ("n", "Map"),
            ("m", "Model"),
            ("k", "Lock"),
        ],
        theme,
    );
}

/// Left arrow, hazard, right arrow
fn signal_columns(area: Rect) -> [Rect; 3] {
    let (left, rest) = layout::two_column_layout(area, 33);
    let (hazard, right) = layout::two_column_layout(rest, 50);
    [left, hazard, right]
}
