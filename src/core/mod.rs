//! # Core Application Logic
//!
//! This module contains Cinebusca's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Search / Detail      │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Catalog   │
//!     │  Adapter   │                          │   (OMDb)   │
//!     │ (ratatui)  │                          │            │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and `RequestState`
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`search`]: Debounced search over the catalog
//! - [`detail`]: Single-title detail lookup
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod detail;
pub mod search;
pub mod state;
