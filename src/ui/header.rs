use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// What the header reports about the last fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStatus {
    Loading,
    Ready,
    Failed,
}

pub struct Header {
    status: FetchStatus,
    count: usize,
}

impl Header {
    pub fn new(status: FetchStatus, count: usize) -> Self {
        Self { status, count }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_text, status_color) = match self.status {
            FetchStatus::Loading => ("Loading…", ACCENT),
            FetchStatus::Ready => ("Up to date", STATUS_OK),
            FetchStatus::Failed => ("Fetch failed", STATUS_ERROR),
        };
        let noun = if self.count == 1 { "country" } else { "countries" };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Countries",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} {}", self.count, noun), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_text, Style::default().fg(status_color)),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
