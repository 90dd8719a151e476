//! Details screen list model
//!
//! - `item` - UI item descriptors and the click callback plumbing
//! - `controller` - the builder turning show state into items

pub mod controller;
pub mod item;

pub use controller::{rating_percentage, DetailsError, DetailsListBuilder};
pub use item::{
    BadgeItem, Callbacks, ClickListener, HeaderItem, ItemId, PosterItem, SummaryItem, TitleItem,
    UiItem,
};
