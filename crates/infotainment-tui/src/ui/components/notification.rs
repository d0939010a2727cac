//! Short-lived toasts for unlock results and failed settings writes

use std::collections::VecDeque;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use infotainment_core::{CoreError, PinOutcome, PinPrompt};

use crate::ui::Theme;

/// Ticks a toast stays up, 100 ms each at the default rate
const GRANTED_TICKS: u64 = 15;
const FAILURE_TICKS: u64 = 30;

/// Toasts kept on screen at once
const MAX_TOASTS: usize = 2;

/// What a toast reports, which decides its color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Warning,
    Error,
}

/// One toast
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub level: NotificationLevel,
    /// Remaining ticks until dismissal
    pub ttl: u64,
}

impl Notification {
    /// Toast for a finished PIN entry; nothing while digits are still coming
    pub fn for_outcome(outcome: PinOutcome) -> Option<Self> {
        match outcome.into_result() {
            Ok(PinOutcome::Accepted) => Some(Self {
                message: PinPrompt::Granted.to_string(),
                level: NotificationLevel::Success,
                ttl: GRANTED_TICKS,
            }),
            Ok(_) => None,
            Err(e) => Some(Self::from(&e)),
        }
    }

    /// Toast for something the rider should know but can ignore
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            level: NotificationLevel::Warning,
            ttl: FAILURE_TICKS,
        }
    }

    fn style(&self, theme: &Theme) -> Style {
        match self.level {
            NotificationLevel::Success => theme.success(),
            NotificationLevel::Warning => theme.warning(),
            NotificationLevel::Error => theme.danger(),
        }
    }
}

impl From<&CoreError> for Notification {
    fn from(error: &CoreError) -> Self {
        Self {
            message: error.to_string(),
            level: NotificationLevel::Error,
            ttl: FAILURE_TICKS,
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Default)]
pub struct NotificationManager {
    toasts: VecDeque<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast, dropping the oldest when full
    pub fn push(&mut self, notification: Notification) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(notification);
    }

    /// Count down every toast and drop the expired ones
    pub fn tick(&mut self) {
        self.toasts.retain_mut(|toast| {
            toast.ttl = toast.ttl.saturating_sub(1);
            toast.ttl > 0
        });
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back()
    }

    /// Draw the toasts as boxes along the top right of `area`
    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let mut y = area.y;
        for toast in &self.toasts {
            if y + 3 > area.bottom() {
                break;
            }
            let width = (toast.message.chars().count() as u16 + 4).min(area.width);
            let rect = Rect::new(area.right().saturating_sub(width + 1), y, width, 3);

            let style = toast.style(theme);
            frame.render_widget(Clear, rect);
            frame.render_widget(
                Paragraph::new(toast.message.as_str())
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                rect,
            );
            y += 3;
        }
    }
}
