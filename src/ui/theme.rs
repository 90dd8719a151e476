//! Neon theme for the details screen
//!
//! Color palette, style helpers and rating-tier backdrop tints.

use ratatui::style::{Color, Modifier, Style};

/// Neon color palette
pub struct Theme;

impl Theme {
    // ═══════════════════════════════════════════════════════════════════════
    // CORE PALETTE
    // ═══════════════════════════════════════════════════════════════════════

    /// Background: #0a0a0f (deep black-blue)
    pub const BACKGROUND: Color = Color::Rgb(0x0a, 0x0a, 0x0f);

    /// Primary: #00fff2 (cyan neon)
    pub const PRIMARY: Color = Color::Rgb(0x00, 0xff, 0xf2);

    /// Secondary: #ff00ff (magenta)
    pub const SECONDARY: Color = Color::Rgb(0xff, 0x00, 0xff);

    /// Accent: #ffff00 (yellow)
    pub const ACCENT: Color = Color::Rgb(0xff, 0xff, 0x00);

    /// Highlight: #ff0080 (hot pink)
    pub const HIGHLIGHT: Color = Color::Rgb(0xff, 0x00, 0x80);

    /// Text: #e0e0e0 (soft white)
    pub const TEXT: Color = Color::Rgb(0xe0, 0xe0, 0xe0);

    /// Dim: #808090 (muted)
    pub const DIM: Color = Color::Rgb(0x80, 0x80, 0x90);

    /// Success: #00ff00 (green)
    pub const SUCCESS: Color = Color::Rgb(0x00, 0xff, 0x00);

    /// Warning: #ffaa00 (orange)
    pub const WARNING: Color = Color::Rgb(0xff, 0xaa, 0x00);

    /// Error: #ff0040 (red)
    pub const ERROR: Color = Color::Rgb(0xff, 0x00, 0x40);

    /// Slightly lighter background for bars
    pub const BACKGROUND_LIGHT: Color = Color::Rgb(0x14, 0x14, 0x1e);

    /// Border color (dim cyan)
    pub const BORDER: Color = Color::Rgb(0x00, 0x80, 0x78);

    // ═══════════════════════════════════════════════════════════════════════
    // BACKDROP TINTS (packed 0xAARRGGBB)
    // ═══════════════════════════════════════════════════════════════════════

    pub const BACKDROP_NEUTRAL: u32 = 0xff0a0a0f;
    pub const BACKDROP_HIGH: u32 = 0xff06140f;
    pub const BACKDROP_MEDIUM: u32 = 0xff14100a;
    pub const BACKDROP_LOW: u32 = 0xff160a0e;

    /// Backdrop tint for a rating percentage
    pub fn backdrop_for(rating_percent: Option<i64>) -> u32 {
        match rating_percent {
            Some(p) if p >= 75 => Self::BACKDROP_HIGH,
            Some(p) if p >= 60 => Self::BACKDROP_MEDIUM,
            Some(_) => Self::BACKDROP_LOW,
            None => Self::BACKDROP_NEUTRAL,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // STYLE HELPERS
    // ═══════════════════════════════════════════════════════════════════════

    pub fn text() -> Style {
        Style::default().fg(Self::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(Self::ERROR)
            .add_modifier(Modifier::BOLD)
    }

    /// Title/header style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Original title under the main title
    pub fn subtitle() -> Style {
        Style::default()
            .fg(Self::SECONDARY)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(Self::ACCENT)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::BORDER)
    }

    /// Badge chip
    pub fn badge() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }

    /// Rating badge colored by tier
    pub fn rating(percent: i64) -> Style {
        let fg = if percent >= 75 {
            Self::SUCCESS
        } else if percent >= 60 {
            Self::WARNING
        } else {
            Self::ERROR
        };
        Style::default()
            .fg(fg)
            .bg(Self::BACKGROUND_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Poster tile (unselected)
    pub fn poster() -> Style {
        Style::default().fg(Self::TEXT)
    }

    /// Poster tile (selected)
    pub fn poster_selected() -> Style {
        Style::default()
            .fg(Self::BACKGROUND)
            .bg(Self::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn genre() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn keybind() -> Style {
        Style::default().fg(Self::ACCENT)
    }

    pub fn keybind_desc() -> Style {
        Style::default().fg(Self::DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Self::TEXT).bg(Self::BACKGROUND_LIGHT)
    }
}
