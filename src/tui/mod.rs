//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Screens
//!
//! - **Search**: search bar, result list, retry on error, Ctrl+R refresh.
//! - **Detail**: one title, scrollable. Esc goes back.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (loading or refreshing): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms, only redraws on events, resizes or
//!   background settlements.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc::unbounded_channel;

use crate::catalog::MovieCatalog;
use crate::core::action::{Action, Effect, update};
use crate::core::search::SearchSettings;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    DetailEvent, MovieDetailState, MovieListEvent, MovieListState, SearchBar, SearchBarEvent,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATION_TICK: Duration = Duration::from_millis(80);
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub search_bar: SearchBar,
    pub movie_list: MovieListState,
    pub movie_detail: MovieDetailState,
}

impl TuiState {
    pub fn new(initial_query: &str) -> Self {
        Self {
            search_bar: SearchBar::new(initial_query),
            movie_list: MovieListState::new(),
            movie_detail: MovieDetailState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock // Non-blinking: draw() resets the blink timer
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste);
    }
}

pub fn run(catalog: Arc<dyn MovieCatalog>, settings: SearchSettings) -> std::io::Result<()> {
    // Channel for actions from background tasks (debounce timers, lookups)
    let (tx, mut rx) = unbounded_channel();

    info!("Using catalog backend: {}", catalog.name());
    let mut app = App::new(catalog, tx, settings);
    let mut tui = TuiState::new(app.search.query());
    app.search.begin();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = app.search.is_searching()
            || app.search.is_refreshing()
            || app.detail.as_ref().is_some_and(|d| d.state().is_loading());

        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = route_event(&mut tui, app.screen(), &event) {
                if let Action::OpenDetail(_) = action {
                    tui.movie_detail = MovieDetailState::new();
                }
                if update(&mut app, action) == Effect::Quit {
                    should_quit = true;
                    break;
                }
            }
        }

        if should_quit {
            break;
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if update(&mut app, action) == Effect::Quit {
                should_quit = true;
            }
        }

        if should_quit {
            break;
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Translates a terminal event into an intent for the current screen.
fn route_event(tui: &mut TuiState, screen: Screen, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::Resize => return None,
        TuiEvent::ForceQuit => return Some(Action::Quit),
        _ => {}
    }

    match screen {
        Screen::Search => {
            match event {
                TuiEvent::Escape => return Some(Action::Quit),
                TuiEvent::Refresh => return Some(Action::Refresh),
                _ => {}
            }
            if let Some(SearchBarEvent::Changed(text)) = tui.search_bar.handle_event(event) {
                return Some(Action::QueryChanged(text));
            }
            match tui.movie_list.handle_event(event)? {
                MovieListEvent::Open(id) => Some(Action::OpenDetail(id)),
                MovieListEvent::Retry => Some(Action::Retry),
            }
        }
        Screen::Detail => match tui.movie_detail.handle_event(event)? {
            DetailEvent::Back => Some(Action::CloseDetail),
            DetailEvent::Retry => Some(Action::RetryDetail),
        },
    }
}
