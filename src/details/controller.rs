//! Details list builder
//!
//! Holds the show, image provider and related shows for the details
//! screen and turns them into an ordered list of [`UiItem`]s. Setters
//! compare against the stored value and only flag a rebuild on change;
//! the caller decides when to call [`DetailsListBuilder::build`].

use std::collections::HashSet;
use std::rc::Rc;
use thiserror::Error;

use super::item::{
    BadgeItem, Callbacks, ClickListener, HeaderItem, ItemId, PosterItem, SummaryItem, TitleItem,
    UiItem,
};
use crate::images::TmdbImageUrlProvider;
use crate::models::ShowRecord;
use crate::resources::{Arg, FormattingError, Icon, PluralKey, Resources, StringKey};

/// Errors raised while building the details list
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DetailsError {
    #[error("Related show #{index} ({title}) has no trakt id")]
    MissingIdentifier { index: usize, title: String },

    #[error("Related show id {0} appears more than once")]
    DuplicateIdentifier(u64),

    #[error(transparent)]
    Formatting(#[from] FormattingError),
}

/// Rating out of 10 as a whole percentage, rounding halves away from zero
pub fn rating_percentage(rating: f32) -> i64 {
    (rating * 10.0).round() as i64
}

/// Builds the details screen item list from its three inputs
pub struct DetailsListBuilder {
    resources: Resources,
    callbacks: Rc<dyn Callbacks>,

    show: Option<ShowRecord>,
    image_provider: Option<TmdbImageUrlProvider>,
    related_shows: Option<Vec<ShowRecord>>,

    dirty: bool,
    rebuild_requests: u64,
}

impl DetailsListBuilder {
    pub fn new(resources: Resources, callbacks: Rc<dyn Callbacks>) -> Self {
        Self {
            resources,
            callbacks,
            show: None,
            image_provider: None,
            related_shows: None,
            dirty: false,
            rebuild_requests: 0,
        }
    }

    pub fn show(&self) -> Option<&ShowRecord> {
        self.show.as_ref()
    }

    pub fn image_provider(&self) -> Option<&TmdbImageUrlProvider> {
        self.image_provider.as_ref()
    }

    pub fn related_shows(&self) -> Option<&[ShowRecord]> {
        self.related_shows.as_deref()
    }

    /// Replace the show. Returns true if it changed.
    pub fn set_show(&mut self, show: Option<ShowRecord>) -> bool {
        let changed = replace_if_changed(&mut self.show, show);
        self.note_change(changed)
    }

    /// Replace the image provider. Returns true if it changed.
    pub fn set_image_provider(&mut self, provider: Option<TmdbImageUrlProvider>) -> bool {
        let changed = replace_if_changed(&mut self.image_provider, provider);
        self.note_change(changed)
    }

    /// Replace the related shows. `None` hides the related section,
    /// `Some(vec![])` shows its header with no posters.
    pub fn set_related_shows(&mut self, related: Option<Vec<ShowRecord>>) -> bool {
        let changed = replace_if_changed(&mut self.related_shows, related);
        self.note_change(changed)
    }

    fn note_change(&mut self, changed: bool) -> bool {
        if changed {
            self.dirty = true;
            self.rebuild_requests += 1;
        }
        changed
    }

    /// Number of rebuilds requested by setters so far
    pub fn rebuild_requests(&self) -> u64 {
        self.rebuild_requests
    }

    pub fn needs_rebuild(&self) -> bool {
        self.dirty
    }

    /// Build once if a setter flagged a rebuild since the last call
    pub fn take_rebuild(&mut self) -> Option<Result<Vec<UiItem>, DetailsError>> {
        if !self.dirty {
            return None;
        }
        self.dirty = false;
        Some(self.build())
    }

    /// Build the item list from the current inputs
    pub fn build(&self) -> Result<Vec<UiItem>, DetailsError> {
        let show = self.show.as_ref();
        let mut items = Vec::new();

        items.push(UiItem::Title(TitleItem {
            id: ItemId::Key("title"),
            title: show.and_then(|s| s.title.clone()),
            subtitle: show.and_then(|s| s.original_title.clone()),
            genres: show.and_then(|s| s.genres.clone()),
            full_span: true,
        }));

        if let Some(show) = show {
            self.push_badges(show, &mut items)?;
        }

        items.push(UiItem::Summary(SummaryItem {
            id: ItemId::Key("summary"),
            summary: show.and_then(|s| s.summary.clone()),
            full_span: true,
        }));

        if let Some(related) = &self.related_shows {
            items.push(UiItem::Header(HeaderItem {
                id: ItemId::Key("related_header"),
                title: self.resources.string(StringKey::RelatedTitle, &[])?,
                full_span: true,
            }));

            let mut seen = HashSet::new();
            for (index, related_show) in related.iter().enumerate() {
                let trakt_id =
                    related_show
                        .trakt_id
                        .ok_or_else(|| DetailsError::MissingIdentifier {
                            index,
                            title: related_show.display_title().to_string(),
                        })?;
                if !seen.insert(trakt_id) {
                    return Err(DetailsError::DuplicateIdentifier(trakt_id));
                }

                items.push(UiItem::Poster(PosterItem {
                    id: ItemId::Numeric(trakt_id),
                    title: related_show.title.clone(),
                    image_provider: self.image_provider.clone(),
                    poster_path: related_show.tmdb_poster_path.clone(),
                    click_listener: ClickListener::new(
                        Rc::clone(&self.callbacks),
                        related_show.clone(),
                    ),
                    full_span: false,
                }));
            }
        }

        log::trace!("built {} detail items", items.len());
        Ok(items)
    }

    fn push_badges(&self, show: &ShowRecord, items: &mut Vec<UiItem>) -> Result<(), DetailsError> {
        let res = &self.resources;

        if let Some(rating) = show.rating {
            let percent = rating_percentage(rating);
            items.push(badge(
                "rating",
                res.string(StringKey::PercentageFormat, &[Arg::Int(percent)])?,
                Icon::Rating,
                res.string(StringKey::RatingContentDescriptionFormat, &[Arg::Int(percent)])?,
            ));
        }

        if let Some(network) = show.network.as_deref() {
            items.push(badge(
                "network",
                network.to_string(),
                Icon::Network,
                res.string(StringKey::NetworkContentDescriptionFormat, &[network.into()])?,
            ));
        }

        if let Some(cert) = show.certification.as_deref() {
            items.push(badge(
                "cert",
                cert.to_string(),
                Icon::Certificate,
                res.string(StringKey::CertificateContentDescriptionFormat, &[cert.into()])?,
            ));
        }

        if let Some(runtime) = show.runtime {
            let minutes = i64::from(runtime);
            items.push(badge(
                "runtime",
                res.string(StringKey::MinutesFormat, &[Arg::Int(minutes)])?,
                Icon::Runtime,
                res.quantity_string(
                    PluralKey::RuntimeContentDescriptionFormat,
                    minutes,
                    &[Arg::Int(minutes)],
                )?,
            ));
        }

        Ok(())
    }
}

fn badge(id: &'static str, label: String, icon: Icon, content_description: String) -> UiItem {
    UiItem::Badge(BadgeItem {
        id: ItemId::Key(id),
        label,
        icon,
        content_description,
        full_span: false,
    })
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
