//! # MovieDetail Component
//!
//! Full-screen view for one title. Mirrors the three loader states:
//! "Carregando detalhes...", the error message (Enter retries), or the
//! record itself laid out as poster, title, rating, chips and labelled
//! sections. The record scrolls when it is taller than the screen.

use std::borrow::Cow;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::MovieDetail;
use crate::core::detail::DetailLoader;
use crate::core::state::RequestState;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::title_bar::spinner_char;
use crate::tui::event::TuiEvent;

/// Persistent scroll state for the detail view.
#[derive(Default)]
pub struct MovieDetailState {
    pub scroll_state: ScrollViewState,
}

impl MovieDetailState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailEvent {
    Back,
    Retry,
}

impl EventHandler for MovieDetailState {
    type Event = DetailEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Backspace => Some(DetailEvent::Back),
            TuiEvent::Submit => Some(DetailEvent::Retry),
            TuiEvent::CursorUp => {
                self.scroll_state.scroll_up();
                None
            }
            TuiEvent::CursorDown => {
                self.scroll_state.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll_state.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll_state.scroll_page_down();
                None
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the detail view.
pub struct MovieDetailView<'a> {
    state: &'a mut MovieDetailState,
    loader: &'a DetailLoader,
    spinner_frame: usize,
}

impl<'a> MovieDetailView<'a> {
    pub fn new(
        state: &'a mut MovieDetailState,
        loader: &'a DetailLoader,
        spinner_frame: usize,
    ) -> Self {
        Self {
            state,
            loader,
            spinner_frame,
        }
    }
}

impl Component for MovieDetailView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let loader = self.loader;
        match loader.state() {
            RequestState::Idle | RequestState::Loading => {
                let lines = vec![
                    Line::from(Span::styled(
                        spinner_char(self.spinner_frame).to_string(),
                        Style::default().fg(Color::Blue),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Carregando detalhes...",
                        Style::default().fg(Color::Gray),
                    )),
                ];
                render_centered(frame, area, lines);
            }
            RequestState::Failed(message) => {
                let lines = vec![
                    Line::from(Span::styled(
                        "✖",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        message.clone(),
                        Style::default().fg(Color::Red),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Enter tenta novamente  ·  Esc volta",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                render_centered(frame, area, lines);
            }
            RequestState::Loaded(detail) => {
                let content_width = area.width.saturating_sub(1);
                let lines = detail_lines(detail, content_width as usize);
                let height = lines.len() as u16;

                let mut scroll_view = ScrollView::new(Size::new(content_width, height))
                    .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                    .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
                scroll_view.render_widget(
                    Paragraph::new(lines),
                    Rect::new(0, 0, content_width, height),
                );
                frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
            }
        }
    }
}

fn render_centered(frame: &mut Frame, area: Rect, lines: Vec<Line<'static>>) {
    let [centered] = Layout::vertical([Constraint::Length(lines.len() as u16)])
        .flex(Flex::Center)
        .areas(area);
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), centered);
}

/// Lays out a loaded record as pre-wrapped lines.
fn detail_lines(detail: &MovieDetail, width: usize) -> Vec<Line<'static>> {
    let width = width.max(10);
    let mut lines = Vec::new();

    let poster = detail.summary.poster_or_placeholder();
    lines.push(Line::from(vec![
        Span::styled("Pôster: ", Style::default().fg(Color::DarkGray)),
        Span::styled(poster.to_string(), Style::default().fg(Color::DarkGray)),
    ]));
    lines.push(Line::from(""));

    for chunk in wrap(detail.title(), width) {
        lines.push(Line::from(Span::styled(
            chunk.into_owned(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )));
    }

    lines.push(rating_line(detail));

    let chip_style = Style::default().fg(Color::Black).bg(Color::Gray);
    let mut chips = Vec::new();
    for chip in [&detail.summary.year, &detail.runtime, &detail.rated] {
        chips.push(Span::styled(format!(" {chip} "), chip_style));
        chips.push(Span::raw(" "));
    }
    lines.push(Line::from(chips));

    for (label, value) in [
        ("Gênero", &detail.genre),
        ("Diretor", &detail.director),
        ("Elenco", &detail.actors),
        ("Sinopse", &detail.plot),
    ] {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            label,
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        )));
        for chunk in wrap(value, width) {
            lines.push(Line::from(chunk.into_owned()));
        }
    }

    lines
}

/// Star line. Unrated titles ("N/A") are dimmed instead of highlighted.
fn rating_line(detail: &MovieDetail) -> Line<'static> {
    let (text, color) = match detail.rating_value() {
        Some(_) => (detail.rating.trim().to_string(), Color::Yellow),
        None => (String::from("N/A"), Color::DarkGray),
    };
    Line::from(vec![
        Span::styled("★ ", Style::default().fg(color)),
        Span::styled(text, Style::default().fg(color)),
    ])
}

fn wrap(text: &str, width: usize) -> Vec<Cow<'_, str>> {
    textwrap::wrap(text, textwrap::Options::new(width))
}
