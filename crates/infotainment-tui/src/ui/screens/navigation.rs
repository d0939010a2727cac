//! Navigation: map centre placeholder

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use crate::app::{App, NavigationState};
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{centered_rect, section_block, ScreenLayout};

/// Draw the navigation screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App, nav: &NavigationState) {
    let theme = &app.theme;
    let screen = ScreenLayout::new(area);

    header::render(frame, screen.header, &crate::ui::breadcrumb(app), None, theme);

    let panel = centered_rect(80, 60, screen.content);
    let lines = vec![
        Line::from(vec![
            Span::styled("Latitude   ", theme.text_muted()),
            Span::styled(nav.map.latitude.to_string(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("Longitude  ", theme.text_muted()),
            Span::styled(nav.map.longitude.to_string(), theme.text()),
        ]),
        Line::from(vec![
            Span::styled("Zoom       ", theme.text_muted()),
            Span::styled(nav.map.zoom.to_string(), theme.text()),
        ]),
        Line::raw(""),
        Line::styled(nav.map.url(), theme.info()),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(section_block("Map", theme)),
        panel,
    );

    status_bar::render_help_footer(frame, screen.footer, &[("Esc", "Back"), ("q", "Quit")], theme);
}
