//! showdetail - neon TUI for show details
//!
//! Renders a show's title, badges, summary and related shows as a grid of
//! list items, and follows related shows on selection.
//!
//! # Modules
//!
//! - `models` - Show records and the JSON catalog
//! - `images` - TMDB poster URL resolution
//! - `resources` - String/plural templates and badge icons
//! - `details` - Details list builder and UI item types
//! - `property` - Named field accessors for transitions
//! - `ui` - TUI components
//! - `app` - Application state and navigation

pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod details;
pub mod images;
pub mod logging;
pub mod models;
pub mod property;
pub mod resources;
pub mod ui;

// Re-export commonly used types
pub use app::App;
pub use details::{Callbacks, DetailsError, DetailsListBuilder, ItemId, UiItem};
pub use images::TmdbImageUrlProvider;
pub use models::{ShowCatalog, ShowRecord};
pub use resources::{FormattingError, Resources};
