//! Model viewer: placeholder for the vehicle model

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{App, ModelViewerState};
use crate::ui::components::{header, status_bar};
use crate::ui::layout::{centered_rect, section_block, ScreenLayout};

/// Draw the model viewer
pub fn draw(frame: &mut Frame, area: Rect, app: &App, model: &ModelViewerState) {
    let theme = &app.theme;
    let screen = ScreenLayout::new(area);

    header::render(frame, screen.header, &crate::ui::breadcrumb(app), None, theme);

    let (status, style) = if model.available {
        ("Model loaded", theme.success())
    } else {
        ("Model file not found", theme.warning())
    };
    let lines = vec![
        Line::styled(model.model_path.display().to_string(), theme.text()),
        Line::styled(status, style),
    ];
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(section_block("Vehicle model", theme)),
        centered_rect(70, 40, screen.content),
    );

    status_bar::render_help_footer(frame, screen.footer, &[("Esc", "Back"), ("q", "Quit")], theme);
}
