//! Search UI components for the SearchPad desktop application.
//!
//! Provides the egui-based search window: query input with keyboard
//! shortcuts, preset selector, loading/error states, and result cards.

pub mod actions;
pub mod app;
pub mod cards;

pub use app::SearchApp;
