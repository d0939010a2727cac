//! Home screen: large clock and date over the background

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, HomeState};
use crate::ui::components::status_bar;
use crate::ui::layout::{centered_rect_fixed, ScreenLayout};

/// Draw the home screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App, home: &HomeState) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let face = centered_rect_fixed(area.width, 4, layout.content);
    let text = vec![
        Line::styled(home.clock.time.as_str(), theme.title()),
        Line::styled(home.clock.date.as_str(), theme.text_secondary()),
        Line::raw(""),
        Line::styled("▲ swipe up to unlock", theme.text_muted()),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), face);

    if let Some(background) = &home.background {
        let name = background
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        frame.render_widget(
            Paragraph::new(name)
                .style(theme.text_muted())
                .alignment(Alignment::Right),
            layout.header,
        );
    }

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[("↑/u", "Swipe up"), ("q", "Quit")],
        theme,
    );
}
