//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! - `TitleBar`: top status bar with screen title, status and refresh spinner
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `SearchBar`: query input, reports every edit
//! - `MovieList`: loading / error / empty / result views for the search screen
//! - `MovieDetailView`: scrollable record for one title
//!
//! Stateful components keep their persistent state (`*State`) in `TuiState`
//! and are wrapped by a transient struct each frame that borrows that state
//! plus its props from the core.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── search_bar.rs    (Query input)
//! ├── movie_list.rs    (Search results)
//! └── movie_detail.rs  (Detail view)
//! ```

pub mod movie_detail;
pub mod movie_list;
pub mod search_bar;
pub mod title_bar;

pub use movie_detail::{DetailEvent, MovieDetailState, MovieDetailView};
pub use movie_list::{MovieList, MovieListEvent, MovieListState};
pub use search_bar::{SearchBar, SearchBarEvent};
pub use title_bar::TitleBar;
