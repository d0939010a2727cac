//! Header component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use infotainment_core::ClockFace;

use crate::ui::Theme;

/// Render the header bar: screen title on the left, clock on the right
pub fn render(frame: &mut Frame, area: Rect, title: &str, clock: Option<&ClockFace>, theme: &Theme) {
    let time = clock.map(|c| c.time.as_str()).unwrap_or_default();
    let padding = area
        .width
        .saturating_sub(title.chars().count() as u16 + time.chars().count() as u16 + 4);

    let header_text = Line::from(vec![
        Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.background)
                .bg(theme.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" ".repeat(padding as usize)),
        Span::styled(format!(" {} ", time), theme.text_highlight()),
    ]);

    let header = Paragraph::new(header_text).style(Style::default().bg(theme.panel));
    frame.render_widget(header, area);
}
