//! # Application State
//!
//! Core business state for Cinebusca. Domain logic only, no TUI-specific
//! types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── catalog: Arc<dyn MovieCatalog>     // movie database backend
//! ├── sender: UnboundedSender<Action>    // background tasks report here
//! ├── search: SearchOrchestrator         // query, debounce, result list
//! ├── detail: Option<DetailLoader>       // open detail view, if any
//! └── status_message: String             // status bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::catalog::MovieCatalog;
use crate::core::action::Action;
use crate::core::detail::DetailLoader;
use crate::core::search::{SearchOrchestrator, SearchSettings};

/// Lifecycle of one remote lookup. Exactly one variant holds at a time.
///
/// Entering `Loading` drops any previous error; leaving it (to `Loaded` or
/// `Failed`) ends the loading phase.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for RequestState<T> {
    fn default() -> Self {
        RequestState::Idle
    }
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed(_))
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            RequestState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Which view currently owns the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Search,
    Detail,
}

pub struct App {
    pub catalog: Arc<dyn MovieCatalog>,
    pub sender: UnboundedSender<Action>,
    pub search: SearchOrchestrator,
    pub detail: Option<DetailLoader>,
    pub status_message: String,
}

impl App {
    pub fn new(
        catalog: Arc<dyn MovieCatalog>,
        sender: UnboundedSender<Action>,
        settings: SearchSettings,
    ) -> Self {
        let search = SearchOrchestrator::new(catalog.clone(), sender.clone(), settings);
        Self {
            catalog,
            sender,
            search,
            detail: None,
            status_message: String::from("Bem-vindo ao Cinebusca!"),
        }
    }

    pub fn screen(&self) -> Screen {
        if self.detail.is_some() {
            Screen::Detail
        } else {
            Screen::Search
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::test_app;

    #[test]
    fn test_request_state_accessors() {
        let failed: RequestState<u8> = RequestState::Failed("boom".to_string());
        assert!(failed.is_failed());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.loaded(), None);

        let loaded = RequestState::Loaded(7u8);
        assert_eq!(loaded.loaded(), Some(&7));
        assert!(!loaded.is_loading());

        assert_eq!(RequestState::<u8>::default(), RequestState::Idle);
    }

    #[test]
    fn test_app_new_defaults() {
        let (app, _rx) = test_app();
        assert_eq!(app.status_message, "Bem-vindo ao Cinebusca!");
        assert_eq!(app.screen(), Screen::Search);
        assert_eq!(app.search.query(), "marvel");
        assert_eq!(app.search.state(), &RequestState::Idle);
    }
}
