//! 4x3 PIN keypad

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use infotainment_core::Key;

use crate::ui::{layout, Theme};

/// Keys per keypad row
const COLUMNS: usize = 3;

/// Render the keypad in `area`, one row of keys per line pair
pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
    let rows = Key::LAYOUT.len() / COLUMNS;
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..rows).map(|_| Constraint::Length(2)))
        .split(area);

    for (keys, row) in Key::LAYOUT.chunks(COLUMNS).zip(row_areas.iter()) {
        let cells = layout::columns(*row, COLUMNS as u16);
        for (key, cell) in keys.iter().zip(cells) {
            let label = Paragraph::new(format!("[ {} ]", key.label()))
                .style(theme.key_cap())
                .alignment(Alignment::Center);
            frame.render_widget(label, Rect { height: 1, ..cell });
        }
    }
}
