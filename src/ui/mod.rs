//! Terminal UI components
//!
//! Built with ratatui for a neon aesthetic.
//! Keyboard-first navigation throughout.

pub mod detail;
pub mod screen;
pub mod theme;

pub use detail::DetailView;
pub use theme::Theme;
