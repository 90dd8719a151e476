//! UI item descriptors produced by the details list builder

use serde::Serialize;
use std::fmt;
use std::rc::Rc;

use crate::images::TmdbImageUrlProvider;
use crate::models::ShowRecord;
use crate::resources::Icon;

/// Notifications raised by items in the details list
pub trait Callbacks {
    fn on_item_clicked(&self, show: &ShowRecord);
}

/// Stable item identifier used for list diffing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ItemId {
    Key(&'static str),
    Numeric(u64),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Key(key) => write!(f, "{}", key),
            ItemId::Numeric(id) => write!(f, "{}", id),
        }
    }
}

/// Click handler bound to one show
#[derive(Clone)]
pub struct ClickListener {
    callbacks: Rc<dyn Callbacks>,
    show: ShowRecord,
}

impl ClickListener {
    pub fn new(callbacks: Rc<dyn Callbacks>, show: ShowRecord) -> Self {
        Self { callbacks, show }
    }

    pub fn on_click(&self) {
        self.callbacks.on_item_clicked(&self.show);
    }
}

/// Two listeners are equal when they notify the same callbacks about the same show
impl PartialEq for ClickListener {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callbacks, &other.callbacks) && self.show == other.show
    }
}

impl fmt::Debug for ClickListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClickListener")
            .field("show", &self.show.trakt_id)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Items
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleItem {
    pub id: ItemId,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub genres: Option<Vec<String>>,
    pub full_span: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeItem {
    pub id: ItemId,
    pub label: String,
    pub icon: Icon,
    pub content_description: String,
    pub full_span: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryItem {
    pub id: ItemId,
    pub summary: Option<String>,
    pub full_span: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderItem {
    pub id: ItemId,
    pub title: String,
    pub full_span: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosterItem {
    pub id: ItemId,
    pub title: Option<String>,
    #[serde(skip)]
    pub image_provider: Option<TmdbImageUrlProvider>,
    pub poster_path: Option<String>,
    #[serde(skip)]
    pub click_listener: ClickListener,
    pub full_span: bool,
}

impl PosterItem {
    /// Invoke the click handler
    pub fn click(&self) {
        self.click_listener.on_click();
    }

    /// Resolved artwork URL, when both a provider and a path are present
    pub fn poster_url(&self, width: u32) -> Option<String> {
        let provider = self.image_provider.as_ref()?;
        let path = self.poster_path.as_deref()?;
        Some(provider.poster_url(path, width))
    }
}

/// One entry in the details list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiItem {
    Title(TitleItem),
    Badge(BadgeItem),
    Summary(SummaryItem),
    Header(HeaderItem),
    Poster(PosterItem),
}

impl UiItem {
    pub fn id(&self) -> &ItemId {
        match self {
            UiItem::Title(item) => &item.id,
            UiItem::Badge(item) => &item.id,
            UiItem::Summary(item) => &item.id,
            UiItem::Header(item) => &item.id,
            UiItem::Poster(item) => &item.id,
        }
    }

    /// Whether the item takes a whole row
    pub fn spans_full_row(&self) -> bool {
        match self {
            UiItem::Title(item) => item.full_span,
            UiItem::Badge(item) => item.full_span,
            UiItem::Summary(item) => item.full_span,
            UiItem::Header(item) => item.full_span,
            UiItem::Poster(item) => item.full_span,
        }
    }

    pub fn as_poster(&self) -> Option<&PosterItem> {
        match self {
            UiItem::Poster(item) => Some(item),
            _ => None,
        }
    }

    pub fn as_badge(&self) -> Option<&BadgeItem> {
        match self {
            UiItem::Badge(item) => Some(item),
            _ => None,
        }
    }
}
