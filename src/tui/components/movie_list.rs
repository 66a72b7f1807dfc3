//! # MovieList Component
//!
//! Main area of the search screen. Shows exactly one of:
//!
//! - loading view ("Buscando filmes...")
//! - error view with the message and a retry hint
//! - empty state (different text with and without a query)
//! - the result list, one card per movie
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `MovieListState` lives in `TuiState`
//! - `MovieList` is created each frame with borrowed state and props

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::catalog::MovieSummary;
use crate::core::search::SearchOrchestrator;
use crate::core::state::RequestState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::title_bar::spinner_char;
use crate::tui::event::TuiEvent;

const PAGE_STEP: usize = 5;

/// Persistent selection state for the result list.
#[derive(Default)]
pub struct MovieListState {
    pub list_state: ListState,
    /// Mirror of the current result ids (refreshed every frame)
    ids: Vec<String>,
    /// Whether the list is showing an error view
    showing_error: bool,
}

impl MovieListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sync with the latest results, keeping the selection in range.
    pub fn sync(&mut self, state: &RequestState<Vec<MovieSummary>>) {
        self.showing_error = state.is_failed();
        let movies = state.loaded().map(Vec::as_slice).unwrap_or(&[]);
        let ids_changed = movies.len() != self.ids.len()
            || movies.iter().zip(&self.ids).any(|(m, id)| &m.id != id);
        if ids_changed {
            self.ids = movies.iter().map(|m| m.id.clone()).collect();
            self.list_state
                .select(if self.ids.is_empty() { None } else { Some(0) });
        }
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.ids.get(i))
            .map(String::as_str)
    }

    fn move_selection(&mut self, delta: isize) {
        if self.ids.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let last = self.ids.len() as isize - 1;
        let next = (current + delta).clamp(0, last) as usize;
        self.list_state.select(Some(next));
    }
}

/// Events emitted by the movie list.
#[derive(Debug, Clone, PartialEq)]
pub enum MovieListEvent {
    Open(String),
    Retry,
}

impl EventHandler for MovieListState {
    type Event = MovieListEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MovieListEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.move_selection(-1);
                None
            }
            TuiEvent::CursorDown => {
                self.move_selection(1);
                None
            }
            TuiEvent::PageUp => {
                self.move_selection(-(PAGE_STEP as isize));
                None
            }
            TuiEvent::PageDown => {
                self.move_selection(PAGE_STEP as isize);
                None
            }
            TuiEvent::Submit if self.showing_error => Some(MovieListEvent::Retry),
            TuiEvent::Submit => self.selected_id().map(|id| MovieListEvent::Open(id.to_string())),
            _ => None,
        }
    }
}

/// Transient render wrapper for the result area.
pub struct MovieList<'a> {
    state: &'a mut MovieListState,
    search: &'a SearchOrchestrator,
    spinner_frame: usize,
}

impl<'a> MovieList<'a> {
    pub fn new(
        state: &'a mut MovieListState,
        search: &'a SearchOrchestrator,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            search,
            spinner_frame,
        }
    }

    fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
        let height = lines.len() as u16;
        let [centered] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, centered);
    }

    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                spinner_char(self.spinner_frame).to_string(),
                Style::default().fg(Color::Blue),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Buscando filmes...",
                Style::default().fg(Color::Gray),
            )),
        ];
        Self::render_centered(frame, area, lines);
    }

    fn render_error(frame: &mut Frame, area: Rect, message: &str) {
        let lines = vec![
            Line::from(Span::styled(
                "✖",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            Line::from(""),
            Line::from(Span::styled(
                " Tentar novamente (Enter) ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        Self::render_centered(frame, area, lines);
    }

    fn render_empty(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled("🎬", Style::default().fg(Color::DarkGray))),
            Line::from(""),
            Line::from(Span::styled(
                self.search.empty_message(),
                Style::default().fg(Color::DarkGray),
            )),
        ];
        Self::render_centered(frame, area, lines);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect, movies: &[MovieSummary]) {
        let inner_width = area.width.saturating_sub(4) as usize;
        let selected = self.state.list_state.selected();

        let items: Vec<ListItem> = movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                let is_selected = selected == Some(i);
                let title_style = if is_selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                };

                let poster = if movie.poster_url.is_some() {
                    "▣ pôster"
                } else {
                    "▢ sem pôster"
                };

                ListItem::new(vec![
                    Line::from(Span::styled(truncate_str(&movie.title, inner_width), title_style)),
                    Line::from(vec![
                        Span::styled(format!("🎞 {}", movie.year), Style::default().fg(Color::Gray)),
                        Span::raw("   "),
                        Span::styled(poster, Style::default().fg(Color::DarkGray)),
                        Span::raw("   "),
                        Span::styled("Ver detalhes ›", Style::default().fg(Color::Blue)),
                    ]),
                    Line::from(""),
                ])
            })
            .collect();

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::NONE)
                .padding(Padding::horizontal(1)),
        );
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

impl Component for MovieList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let search = self.search;
        self.state.sync(search.state());

        match search.state() {
            RequestState::Loading => self.render_loading(frame, area),
            RequestState::Failed(message) => Self::render_error(frame, area, message),
            RequestState::Loaded(movies) if !movies.is_empty() => {
                self.render_results(frame, area, movies)
            }
            RequestState::Loaded(_) | RequestState::Idle => self.render_empty(frame, area),
        }
    }
}

/// Truncate a string to fit within `max_width` display columns, adding "..." if needed.
fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::iron_man;

    fn loaded(n: usize) -> RequestState<Vec<MovieSummary>> {
        RequestState::Loaded(
            (0..n)
                .map(|i| MovieSummary {
                    id: format!("tt{i}"),
                    ..iron_man()
                })
                .collect(),
        )
    }

    #[test]
    fn test_sync_selects_first_result() {
        let mut state = MovieListState::new();
        state.sync(&loaded(3));
        assert_eq!(state.selected_id(), Some("tt0"));
    }

    #[test]
    fn test_navigation_clamps_to_bounds() {
        let mut state = MovieListState::new();
        state.sync(&loaded(3));

        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected_id(), Some("tt0"));

        state.handle_event(&TuiEvent::PageDown);
        assert_eq!(state.selected_id(), Some("tt2"));
    }

    #[test]
    fn test_submit_opens_selected_movie() {
        let mut state = MovieListState::new();
        state.sync(&loaded(2));
        state.handle_event(&TuiEvent::CursorDown);

        let event = state.handle_event(&TuiEvent::Submit);
        assert_eq!(event, Some(MovieListEvent::Open("tt1".to_string())));
    }

    #[test]
    fn test_submit_on_error_retries() {
        let mut state = MovieListState::new();
        state.sync(&RequestState::Failed("Movie not found!".to_string()));

        assert_eq!(state.handle_event(&TuiEvent::Submit), Some(MovieListEvent::Retry));
    }

    #[test]
    fn test_submit_on_empty_does_nothing() {
        let mut state = MovieListState::new();
        state.sync(&RequestState::Idle);
        assert_eq!(state.handle_event(&TuiEvent::Submit), None);
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Iron Man", 20), "Iron Man");
        assert_eq!(truncate_str("The Lord of the Rings", 10), "The Lor...");
        assert_eq!(truncate_str("Alien", 2), "..");
    }
}
