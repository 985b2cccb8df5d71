//! Scrollable list of countries.
//!
//! Each row has two lines: `"name, region"` with the code right-aligned, then
//! the capital. Row views are cached and only rebuilt for positions whose
//! identity or content changed since the previous submission.

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::country::Country;
use crate::ui::theme::{CODE_TEXT, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SELECTED_ROW};

const HIGHLIGHT_SYMBOL: &str = "▌ ";

/// Display strings for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub title: String,
    pub code: String,
    pub capital: String,
}

impl RowView {
    pub fn from_country(country: &Country) -> Self {
        Self {
            title: country.title(),
            code: country.code.clone().unwrap_or_default(),
            capital: country.capital.clone().unwrap_or_default(),
        }
    }

    /// First line padded so that the code ends at `width`.
    pub fn first_line(&self, width: usize) -> Line<'static> {
        let title = Span::styled(self.title.clone(), Style::default().fg(HEADER_TEXT));
        let code = Span::styled(
            self.code.clone(),
            Style::default().fg(CODE_TEXT).add_modifier(Modifier::BOLD),
        );
        let padding = width
            .saturating_sub(title.width())
            .saturating_sub(code.width())
            .max(usize::from(!self.code.is_empty()));
        Line::from(vec![title, Span::raw(" ".repeat(padding)), code])
    }

    pub fn second_line(&self) -> Line<'static> {
        Line::from(Span::styled(
            self.capital.clone(),
            Style::default().fg(MUTED_TEXT),
        ))
    }
}

/// What happened at one list position between two submissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowChange {
    /// Same identity, different content.
    Changed(usize),
    /// Different identity.
    Replaced(usize),
    Inserted(usize),
    Removed(usize),
}

/// Positional diff between two lists.
///
/// Rows that keep both identity (code) and content are omitted.
pub fn diff(old: &[Country], new: &[Country]) -> Vec<RowChange> {
    let mut changes = Vec::new();
    for index in 0..old.len().max(new.len()) {
        match (old.get(index), new.get(index)) {
            (Some(before), Some(after)) => {
                if !before.same_identity(after) {
                    changes.push(RowChange::Replaced(index));
                } else if before != after {
                    changes.push(RowChange::Changed(index));
                }
            }
            (None, Some(_)) => changes.push(RowChange::Inserted(index)),
            (Some(_), None) => changes.push(RowChange::Removed(index)),
            (None, None) => {}
        }
    }
    changes
}

#[derive(Debug, Default)]
pub struct CountryList {
    countries: Vec<Country>,
    rows: Vec<RowView>,
    state: ListState,
}

impl CountryList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the list. Returns the positions whose rows were rebuilt or
    /// dropped.
    pub fn submit(&mut self, countries: Vec<Country>) -> Vec<RowChange> {
        let changes = diff(&self.countries, &countries);
        if changes.is_empty() {
            return changes;
        }

        self.rows.truncate(countries.len());
        for change in &changes {
            match *change {
                RowChange::Changed(index) | RowChange::Replaced(index) => {
                    self.rows[index] = RowView::from_country(&countries[index]);
                }
                RowChange::Inserted(index) => {
                    self.rows.push(RowView::from_country(&countries[index]));
                }
                RowChange::Removed(_) => {}
            }
        }
        self.countries = countries;
        self.clamp_selection();
        tracing::trace!("Country list updated: {} row changes", changes.len());
        changes
    }

    pub fn rows(&self) -> &[RowView] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    /// Move the selection by `delta` rows, stopping at either end.
    pub fn move_selection(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let current = self.state.selected().unwrap_or(0);
        let last = self.rows.len() - 1;
        let next = current.saturating_add_signed(delta).min(last);
        self.state.select(Some(next));
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if let Some(last) = self.rows.len().checked_sub(1) {
            self.state.select(Some(last));
        }
    }

    fn clamp_selection(&mut self) {
        match self.rows.len().checked_sub(1) {
            None => self.state.select(None),
            Some(last) => {
                let selected = self.state.selected().unwrap_or(0).min(last);
                self.state.select(Some(selected));
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame<'_>, area: Rect, placeholder: &str) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER));

        if self.rows.is_empty() {
            let message = Paragraph::new(Line::from(placeholder))
                .style(Style::default().fg(MUTED_TEXT))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(message, area);
            return;
        }

        let width = area
            .width
            .saturating_sub(2)
            .saturating_sub(HIGHLIGHT_SYMBOL.chars().count() as u16) as usize;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| ListItem::new(vec![row.first_line(width), row.second_line()]))
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(SELECTED_ROW))
            .highlight_symbol(HIGHLIGHT_SYMBOL);
        frame.render_stateful_widget(list, area, &mut self.state);
    }
}
