//! Control center: quick toggles, sliders, battery and music

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use infotainment_core::{PlaybackState, Toggle};

use crate::app::{App, ControlCenterState};
use crate::ui::components::{battery, header, status_bar};
use crate::ui::layout::{self, section_block, ScreenLayout};

/// Toggle buttons per row
const TOGGLE_COLUMNS: usize = 2;

/// Draw the control center
pub fn draw(frame: &mut Frame, area: Rect, app: &App, center: &ControlCenterState) {
    let theme = &app.theme;
    let screen = ScreenLayout::new(area);

    header::render(frame, screen.header, &crate::ui::breadcrumb(app), None, theme);

    let (left, right) = layout::two_column_layout(screen.content, 55);

    // Quick toggles, numbered for the keyboard
    let block = section_block("Quick settings", theme);
    let toggles_area = block.inner(left);
    frame.render_widget(block, left);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..Toggle::ALL.len() / TOGGLE_COLUMNS).map(|_| Constraint::Length(2)))
        .split(toggles_area);
    for (row_toggles, (row_index, row)) in Toggle::ALL
        .chunks(TOGGLE_COLUMNS)
        .zip(rows.iter().enumerate())
    {
        for (col, (toggle, cell)) in row_toggles
            .iter()
            .zip(layout::columns(*row, TOGGLE_COLUMNS as u16))
            .enumerate()
        {
            let slot = row_index * TOGGLE_COLUMNS + col + 1;
            let on = center.control.toggles.is_on(*toggle);
            let button = Paragraph::new(format!("{} {}", slot, toggle.label()))
                .style(theme.switch(on))
                .alignment(Alignment::Center);
            frame.render_widget(button, Rect { height: 1, ..cell });
        }
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Brightness
            Constraint::Length(1), // Volume
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Battery
            Constraint::Length(1), // Spacer
            Constraint::Min(4),    // Music
        ])
        .split(right);

    battery::render_slider(frame, chunks[0], "Brightness", &center.control.brightness, theme);
    battery::render_slider(frame, chunks[1], "Volume", &center.control.volume, theme);
    battery::render_battery(frame, chunks[3], &center.control.battery, theme);

    let music = section_block("Music", theme);
    let music_area = music.inner(chunks[5]);
    frame.render_widget(music, chunks[5]);
    let state = match center.playlist.state() {
        PlaybackState::Playing => "▶ Playing",
        PlaybackState::Paused => "⏸ Paused",
        PlaybackState::Stopped => "■ Stopped",
    };
    let lines = vec![
        Line::styled(center.playlist.status_text(), theme.text()),
        Line::styled(state, theme.text_secondary()),
    ];
    frame.render_widget(Paragraph::new(lines), music_area);

    let (status, hints) = layout::two_column_layout(screen.footer, 30);
    status_bar::render_status(frame, status, app.state.status_message.as_deref(), theme);
    status_bar::render_help_footer(
        frame,
        hints,
        &[
            ("1-8", "Toggle"),
            ("↑/↓", "Bright"),
            ("+/-", "Vol"),
            ("Space", "Play"),
            ("[/]", "Track"),
            ("Esc", "Back"),
        ],
        theme,
    );
}
