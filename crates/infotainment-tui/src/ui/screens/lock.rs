//! Lock screen: PIN prompt and keypad

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use infotainment_core::{PinPrompt, PIN_LENGTH};

use crate::app::{App, LockState};
use crate::ui::components::{keypad, status_bar};
use crate::ui::layout::{centered_rect_fixed, ScreenLayout};

/// Draw the lock screen
pub fn draw(frame: &mut Frame, area: Rect, app: &App, lock: &LockState) {
    let theme = &app.theme;
    let layout = ScreenLayout::new(area);

    let dialog = centered_rect_fixed(34, 14, layout.content);
    let block = Block::default()
        .title(" Lock Screen ")
        .title_style(theme.title())
        .borders(Borders::ALL)
        .border_style(theme.border_focused());

    let inner = block.inner(dialog);
    frame.render_widget(block, dialog);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Slots
            Constraint::Length(1), // Spacer
            Constraint::Min(8),    // Keypad
        ])
        .split(inner);

    let prompt = lock.pad.prompt();
    let prompt_style = match prompt {
        PinPrompt::Rejected => theme.danger(),
        PinPrompt::Granted => theme.success(),
        PinPrompt::EnterPin => theme.text_secondary(),
        PinPrompt::Masked(_) => theme.text_highlight(),
    };
    frame.render_widget(
        Paragraph::new(prompt.to_string())
            .style(prompt_style)
            .alignment(Alignment::Center),
        chunks[0],
    );

    // Filled and empty slots, like the dots on a phone lock screen
    let filled = lock.pad.len();
    let slots: String = (0..PIN_LENGTH)
        .map(|i| if i < filled { "● " } else { "○ " })
        .collect();
    frame.render_widget(
        Paragraph::new(slots.trim_end().to_string())
            .style(theme.text_muted())
            .alignment(Alignment::Center),
        chunks[1],
    );

    keypad::render(frame, chunks[3], theme);

    status_bar::render_help_footer(
        frame,
        layout.footer,
        &[
            ("0-9", "Digit"),
            ("c", "Clear"),
            ("Enter/e", "Unlock"),
            ("→", "Home"),
        ],
        theme,
    );
}
