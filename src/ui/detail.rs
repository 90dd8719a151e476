//! Details screen renderer
//!
//! Lays out the item list produced by the details builder: full-span items
//! take a row of their own, everything else shares rows of `columns` cells.
//! Poster cells are selectable with the arrow keys.

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::details::{BadgeItem, ItemId, PosterItem, UiItem};
use crate::property::ColorDrawable;
use crate::ui::Theme;

/// Poster width requested when resolving artwork URLs
pub const POSTER_WIDTH: u32 = 342;

/// One visual row of the details grid
#[derive(Debug, PartialEq)]
pub enum Row<'a> {
    Full(&'a UiItem),
    Cells(Vec<&'a UiItem>),
}

/// Group items into rows, honoring full-span items
pub fn layout_rows(items: &[UiItem], columns: usize) -> Vec<Row<'_>> {
    let columns = columns.max(1);
    let mut rows = Vec::new();
    let mut cells: Vec<&UiItem> = Vec::new();

    for item in items {
        if item.spans_full_row() {
            if !cells.is_empty() {
                rows.push(Row::Cells(std::mem::take(&mut cells)));
            }
            rows.push(Row::Full(item));
        } else {
            cells.push(item);
            if cells.len() == columns {
                rows.push(Row::Cells(std::mem::take(&mut cells)));
            }
        }
    }
    if !cells.is_empty() {
        rows.push(Row::Cells(cells));
    }
    rows
}

/// Details view state
#[derive(Debug)]
pub struct DetailView {
    /// Index among poster items
    pub selected_poster: usize,
    /// Vertical scroll offset
    pub scroll: u16,
    /// Cells per shared row
    pub columns: u16,
}

impl Default for DetailView {
    fn default() -> Self {
        Self::new(3)
    }
}

impl DetailView {
    pub fn new(columns: u16) -> Self {
        Self {
            selected_poster: 0,
            scroll: 0,
            columns: columns.max(1),
        }
    }

    /// Reset selection and scroll (new show opened)
    pub fn reset(&mut self) {
        self.selected_poster = 0;
        self.scroll = 0;
    }

    pub fn poster_count(items: &[UiItem]) -> usize {
        items.iter().filter(|i| i.as_poster().is_some()).count()
    }

    pub fn selected<'a>(&self, items: &'a [UiItem]) -> Option<&'a PosterItem> {
        items
            .iter()
            .filter_map(UiItem::as_poster)
            .nth(self.selected_poster)
    }

    /// Keep the selection inside the current poster range
    pub fn clamp(&mut self, items: &[UiItem]) {
        let count = Self::poster_count(items);
        self.selected_poster = self.selected_poster.min(count.saturating_sub(1));
    }

    fn shift(&mut self, items: &[UiItem], delta: isize) {
        let count = Self::poster_count(items);
        if count == 0 {
            return;
        }
        let target = self.selected_poster as isize + delta;
        if (0..count as isize).contains(&target) {
            self.selected_poster = target as usize;
        }
    }

    pub fn left(&mut self, items: &[UiItem]) {
        self.shift(items, -1);
    }

    pub fn right(&mut self, items: &[UiItem]) {
        self.shift(items, 1);
    }

    pub fn up(&mut self, items: &[UiItem]) {
        self.shift(items, -(self.columns as isize));
    }

    pub fn down(&mut self, items: &[UiItem]) {
        self.shift(items, self.columns as isize);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    /// Render the details screen
    pub fn render(&self, frame: &mut Frame, area: Rect, items: &[UiItem], backdrop: &ColorDrawable) {
        frame.render_widget(backdrop, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border())
            .title(Span::styled(" DETAILS ", Theme::title()));

        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        let lines = self.lines(items, inner.width);
        let paragraph = Paragraph::new(Text::from(lines))
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, inner);

        self.render_status(frame, chunks[1], items);
    }

    /// Build the text lines for all rows
    pub fn lines(&self, items: &[UiItem], width: u16) -> Vec<Line<'static>> {
        let cell_width = (width / self.columns).max(1) as usize;
        let mut lines = Vec::new();
        let mut poster_index = 0;

        for row in layout_rows(items, self.columns as usize) {
            match row {
                Row::Full(item) => full_row_lines(item, &mut lines),
                Row::Cells(cells) => {
                    let mut spans = Vec::new();
                    for item in cells {
                        let span = match item {
                            UiItem::Badge(badge) => badge_span(badge, cell_width),
                            UiItem::Poster(poster) => {
                                let selected = poster_index == self.selected_poster;
                                poster_index += 1;
                                poster_span(poster, cell_width, selected)
                            }
                            other => Span::styled(
                                pad(&other.id().to_string(), cell_width),
                                Theme::dimmed(),
                            ),
                        };
                        spans.push(span);
                    }
                    lines.push(Line::from(spans));
                }
            }
        }
        lines
    }

    fn render_status(&self, frame: &mut Frame, area: Rect, items: &[UiItem]) {
        let mut spans = vec![
            Span::styled(" ←↑↓→ ", Theme::keybind()),
            Span::styled("select ", Theme::keybind_desc()),
            Span::styled("⏎ ", Theme::keybind()),
            Span::styled("open ", Theme::keybind_desc()),
            Span::styled("esc ", Theme::keybind()),
            Span::styled("back ", Theme::keybind_desc()),
            Span::styled("q ", Theme::keybind()),
            Span::styled("quit", Theme::keybind_desc()),
        ];

        if let Some(url) = self.selected(items).and_then(|p| p.poster_url(POSTER_WIDTH)) {
            spans.push(Span::styled(" │ ", Theme::dimmed()));
            spans.push(Span::styled(url, Theme::dimmed()));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).style(Theme::status_bar()), area);
    }
}

fn full_row_lines(item: &UiItem, lines: &mut Vec<Line<'static>>) {
    match item {
        UiItem::Title(title) => {
            let (text, style) = match &title.title {
                Some(t) => (t.clone(), Theme::title()),
                None => ("Untitled".to_string(), Theme::dimmed()),
            };
            lines.push(Line::from(vec![
                Span::styled("▶ ", Theme::accent()),
                Span::styled(text, style),
            ]));
            if let Some(subtitle) = title.subtitle.as_ref().filter(|s| Some(*s) != title.title.as_ref()) {
                lines.push(Line::from(Span::styled(format!("  {}", subtitle), Theme::subtitle())));
            }
            if let Some(genres) = title.genres.as_ref().filter(|g| !g.is_empty()) {
                lines.push(Line::from(Span::styled(
                    format!("  {}", genres.join(" · ")),
                    Theme::genre(),
                )));
            }
            lines.push(Line::from(""));
        }
        UiItem::Summary(summary) => {
            if let Some(text) = &summary.summary {
                lines.push(Line::from(""));
                for line in text.lines() {
                    lines.push(Line::from(Span::styled(line.to_string(), Theme::text())));
                }
            }
        }
        UiItem::Header(header) => {
            lines.push(Line::from(""));
            lines.push(Line::from(vec![
                Span::styled("── ", Theme::dimmed()),
                Span::styled(header.title.to_uppercase(), Theme::accent()),
                Span::styled(" ──", Theme::dimmed()),
            ]));
        }
        UiItem::Badge(badge) => lines.push(Line::from(badge_span(badge, usize::MAX))),
        UiItem::Poster(poster) => lines.push(Line::from(poster_span(poster, usize::MAX, false))),
    }
}

fn badge_span(badge: &BadgeItem, width: usize) -> Span<'static> {
    let style = if badge.id == ItemId::Key("rating") {
        badge_rating_style(badge)
    } else {
        Theme::badge()
    };
    Span::styled(pad(&format!("{} {}", badge.icon.glyph(), badge.label), width), style)
}

/// Rating tier taken from the leading digits of the label
fn badge_rating_style(badge: &BadgeItem) -> Style {
    let digits: String = badge
        .label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    match digits.parse::<i64>() {
        Ok(percent) => Theme::rating(percent),
        Err(_) => Theme::badge(),
    }
}

fn poster_span(poster: &PosterItem, width: usize, selected: bool) -> Span<'static> {
    let marker = if selected { "▸ " } else { "  " };
    let title = poster.title.as_deref().unwrap_or("Untitled");
    let style = if selected {
        Theme::poster_selected()
    } else {
        Theme::poster()
    };
    Span::styled(pad(&format!("{}{}", marker, title), width), style)
}

/// Truncate or right-pad to `width` chars, leaving one column of gap
fn pad(text: &str, width: usize) -> String {
    if width == usize::MAX {
        return text.to_string();
    }
    let usable = width.saturating_sub(1);
    let mut out: String = text.chars().take(usable).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::{Callbacks, ClickListener, HeaderItem, SummaryItem, TitleItem};
    use crate::models::ShowRecord;
    use crate::resources::Icon;
    use std::rc::Rc;

    struct Noop;

    impl Callbacks for Noop {
        fn on_item_clicked(&self, _show: &ShowRecord) {}
    }

    fn title() -> UiItem {
        UiItem::Title(TitleItem {
            id: ItemId::Key("title"),
            title: Some("Foo".to_string()),
            subtitle: None,
            genres: Some(vec!["Drama".to_string()]),
            full_span: true,
        })
    }

    fn badge(id: &'static str, label: &str) -> UiItem {
        UiItem::Badge(BadgeItem {
            id: ItemId::Key(id),
            label: label.to_string(),
            icon: Icon::Network,
            content_description: String::new(),
            full_span: false,
        })
    }

    fn poster(id: u64) -> UiItem {
        let show = ShowRecord::new(id, format!("Show {}", id));
        UiItem::Poster(PosterItem {
            id: ItemId::Numeric(id),
            title: show.title.clone(),
            image_provider: None,
            poster_path: None,
            click_listener: ClickListener::new(Rc::new(Noop), show),
            full_span: false,
        })
    }

    fn sample_items(posters: u64) -> Vec<UiItem> {
        let mut items = vec![
            title(),
            badge("rating", "78%"),
            badge("network", "HBO"),
            UiItem::Summary(SummaryItem {
                id: ItemId::Key("summary"),
                summary: Some("S".to_string()),
                full_span: true,
            }),
            UiItem::Header(HeaderItem {
                id: ItemId::Key("related_header"),
                title: "Related".to_string(),
                full_span: true,
            }),
        ];
        items.extend((1..=posters).map(poster));
        items
    }

    #[test]
    fn test_layout_rows_groups_cells() {
        let items = sample_items(4);
        let rows = layout_rows(&items, 3);
        // title, [rating, network], summary, header, [p1 p2 p3], [p4]
        assert_eq!(rows.len(), 6);
        assert!(matches!(&rows[1], Row::Cells(c) if c.len() == 2));
        assert!(matches!(&rows[4], Row::Cells(c) if c.len() == 3));
        assert!(matches!(&rows[5], Row::Cells(c) if c.len() == 1));
    }

    #[test]
    fn test_layout_rows_zero_columns_treated_as_one() {
        let items = sample_items(2);
        let rows = layout_rows(&items, 0);
        let cell_rows = rows.iter().filter(|r| matches!(r, Row::Cells(_))).count();
        assert_eq!(cell_rows, 4);
    }

    #[test]
    fn test_selection_moves_within_bounds() {
        let items = sample_items(5);
        let mut view = DetailView::new(3);
        view.left(&items);
        assert_eq!(view.selected_poster, 0);
        view.right(&items);
        assert_eq!(view.selected_poster, 1);
        view.down(&items);
        assert_eq!(view.selected_poster, 4);
        view.down(&items);
        assert_eq!(view.selected_poster, 4);
        view.up(&items);
        assert_eq!(view.selected_poster, 1);
        assert_eq!(view.selected(&items).and_then(|p| p.title.clone()), Some("Show 2".to_string()));
    }

    #[test]
    fn test_selection_without_posters() {
        let items = sample_items(0);
        let mut view = DetailView::new(3);
        view.right(&items);
        assert_eq!(view.selected_poster, 0);
        assert!(view.selected(&items).is_none());
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut view = DetailView::new(2);
        view.selected_poster = 7;
        view.clamp(&sample_items(3));
        assert_eq!(view.selected_poster, 2);
        view.clamp(&sample_items(0));
        assert_eq!(view.selected_poster, 0);
    }

    #[test]
    fn test_lines_mark_selected_poster() {
        let items = sample_items(2);
        let mut view = DetailView::new(2);
        view.selected_poster = 1;
        let lines = view.lines(&items, 40);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        let poster_row = text.iter().find(|l| l.contains("Show 1")).unwrap();
        assert!(poster_row.contains("  Show 1"));
        assert!(poster_row.contains("▸ Show 2"));
        assert!(text.iter().any(|l| l.contains("RELATED")));
        assert!(text.iter().any(|l| l.contains("◉ HBO")));
    }

    #[test]
    fn test_pad() {
        assert_eq!(pad("abc", 6), "abc   ");
        assert_eq!(pad("abcdef", 4), "abc ");
        assert_eq!(pad("abc", usize::MAX), "abc");
    }

    #[test]
    fn test_scroll_saturates() {
        let mut view = DetailView::default();
        view.scroll_up(3);
        assert_eq!(view.scroll, 0);
        view.scroll_down(5);
        view.scroll_up(2);
        assert_eq!(view.scroll, 3);
    }
}
