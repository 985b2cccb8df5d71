//! Transient, self-dismissing error notification.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::layout::bottom_centered_rect;
use crate::ui::theme::{HEADER_TEXT, STATUS_ERROR};

const MAX_WIDTH: u16 = 72;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

#[derive(Debug)]
pub struct Notifier {
    current: Option<Toast>,
    duration: Duration,
}

impl Notifier {
    pub fn new(duration: Duration) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show `message`, replacing whatever is on screen.
    pub fn show(&mut self, message: impl Into<String>, now: Instant) {
        let message = message.into();
        tracing::debug!("Showing notification: {}", message);
        self.current = Some(Toast {
            message,
            shown_at: now,
        });
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Drop the toast once its time is up. Returns `true` if one was removed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_duration_since(toast.shown_at) >= self.duration);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        let Some(toast) = &self.current else {
            return;
        };

        let text_width = Line::from(toast.message.as_str()).width() as u16;
        let width = text_width.saturating_add(4).min(MAX_WIDTH);
        let inner = width.saturating_sub(4).max(1);
        let lines = text_width.div_ceil(inner).max(1);
        let rect = bottom_centered_rect(area, width, lines.saturating_add(2));

        let block = Block::default()
            .title(Span::styled(" Error ", Style::default().fg(STATUS_ERROR)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR));
        let widget = Paragraph::new(toast.message.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true })
            .block(block);

        frame.render_widget(Clear, rect);
        frame.render_widget(widget, rect);
    }
}
