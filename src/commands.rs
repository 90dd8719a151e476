//! CLI command implementations
//!
//! Each command loads what it needs, prints through [`Output`], and
//! returns a semantic exit code.

use std::rc::Rc;

use crate::cli::{ExitCode, ItemsCmd, Output, ShowSummary};
use crate::details::{Callbacks, DetailsListBuilder, UiItem};
use crate::images::TmdbImageUrlProvider;
use crate::models::{ShowCatalog, ShowRecord};
use crate::resources::Resources;
use crate::ui::detail::POSTER_WIDTH;

/// Callbacks for non-interactive builds; nothing can be clicked
struct Headless;

impl Callbacks for Headless {
    fn on_item_clicked(&self, _show: &ShowRecord) {}
}

/// List shows in the catalog
pub fn list_cmd(catalog: &ShowCatalog, output: &Output) -> ExitCode {
    let shows: Vec<ShowSummary> = catalog
        .shows
        .iter()
        .map(|s| ShowSummary {
            trakt_id: s.trakt_id,
            title: s.display_title().to_string(),
            rating: s.rating,
            has_related: s
                .trakt_id
                .is_some_and(|id| catalog.related.contains_key(&id)),
        })
        .collect();

    if output.json {
        if let Err(e) = output.print(&shows) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for show in &catalog.shows {
            output.line(show);
        }
        output.info(format!("{} shows", shows.len()));
    }
    ExitCode::Success
}

/// Build the details items for one show
pub fn build_items(
    cmd: &ItemsCmd,
    catalog: &ShowCatalog,
    resources: Resources,
    image_provider: TmdbImageUrlProvider,
) -> Result<Vec<UiItem>, (String, ExitCode)> {
    let show = catalog.show(cmd.trakt_id).cloned().ok_or_else(|| {
        (
            format!("Show {} not found", cmd.trakt_id),
            ExitCode::NotFound,
        )
    })?;

    let related = if cmd.no_related {
        None
    } else {
        catalog.related_to(cmd.trakt_id)
    };

    let mut builder = DetailsListBuilder::new(resources, Rc::new(Headless));
    builder.set_show(Some(show));
    builder.set_image_provider(Some(image_provider));
    builder.set_related_shows(related);

    builder
        .build()
        .map_err(|e| (format!("Could not build details: {}", e), ExitCode::BuildFailed))
}

/// Print the details items for one show
pub fn items_cmd(
    cmd: ItemsCmd,
    catalog: &ShowCatalog,
    resources: Resources,
    image_provider: TmdbImageUrlProvider,
    output: &Output,
) -> ExitCode {
    let items = match build_items(&cmd, catalog, resources, image_provider) {
        Ok(items) => items,
        Err((msg, code)) => return output.error(msg, code),
    };

    if output.json {
        if let Err(e) = output.print(&items) {
            return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
        }
    } else {
        for item in &items {
            output.line(describe(item));
        }
    }
    ExitCode::Success
}

/// One-line human description of an item
pub fn describe(item: &UiItem) -> String {
    let text = match item {
        UiItem::Title(t) => t.title.clone().unwrap_or_default(),
        UiItem::Badge(b) => format!("{} {} ({})", b.icon.glyph(), b.label, b.content_description),
        UiItem::Summary(s) => s.summary.clone().unwrap_or_default(),
        UiItem::Header(h) => h.title.clone(),
        UiItem::Poster(p) => {
            let title = p.title.clone().unwrap_or_default();
            match p.poster_url(POSTER_WIDTH) {
                Some(url) => format!("{} <{}>", title, url),
                None => title,
            }
        }
    };
    format!("{:>16}  {}", item.id().to_string(), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ShowCatalog {
        ShowCatalog::from_json(
            r#"{
                "shows": [
                    {"trakt_id": 1, "title": "Foo", "rating": 9.0, "network": "HBO", "runtime": 60, "summary": "S"},
                    {"trakt_id": 5, "title": "Bar", "tmdb_poster_path": "/bar.jpg"}
                ],
                "related": {"1": [5]}
            }"#,
        )
        .unwrap()
    }

    fn cmd(trakt_id: u64, no_related: bool) -> ItemsCmd {
        ItemsCmd {
            trakt_id,
            no_related,
        }
    }

    #[test]
    fn test_build_items() {
        let items = build_items(
            &cmd(1, false),
            &catalog(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
        )
        .unwrap();
        assert_eq!(items.len(), 7);
    }

    #[test]
    fn test_build_items_without_related() {
        let items = build_items(
            &cmd(1, true),
            &catalog(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
        )
        .unwrap();
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_build_items_unknown_show() {
        let err = build_items(
            &cmd(42, false),
            &catalog(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
        )
        .unwrap_err();
        assert_eq!(err.1, ExitCode::NotFound);
    }

    #[test]
    fn test_build_items_formatting_failure() {
        let err = build_items(
            &cmd(1, false),
            &catalog(),
            Resources::default(),
            TmdbImageUrlProvider::default(),
        )
        .unwrap_err();
        assert_eq!(err.1, ExitCode::BuildFailed);
    }

    #[test]
    fn test_describe_poster_includes_url() {
        let items = build_items(
            &cmd(1, false),
            &catalog(),
            Resources::english(),
            TmdbImageUrlProvider::default(),
        )
        .unwrap();
        let line = describe(items.last().unwrap());
        assert!(line.trim_start().starts_with("5  Bar"));
        assert!(line.contains("https://image.tmdb.org/t/p/w342/bar.jpg"));
    }
}
