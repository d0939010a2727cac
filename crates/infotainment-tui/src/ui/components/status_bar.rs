//! Status bar component

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::ui::Theme;

/// Render help hints in footer
pub fn render_help_footer(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], theme: &Theme) {
    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            vec![
                Span::styled(format!("[{}]", key), theme.text_highlight()),
                Span::styled(format!(" {} ", action), theme.text_muted()),
                Span::raw(" "),
            ]
        })
        .collect();

    let line = Line::from(hint_spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Render a one-line status message, if any
pub fn render_status(frame: &mut Frame, area: Rect, status: Option<&str>, theme: &Theme) {
    let Some(status) = status else {
        return;
    };
    let paragraph = Paragraph::new(status)
        .style(theme.text_secondary())
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
