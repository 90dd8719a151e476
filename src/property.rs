//! Named accessors over widget fields, for transition drivers

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// A get/set pair over one field of `T`
pub trait Property<T, V> {
    fn name(&self) -> &'static str;
    fn get(&self, target: &T) -> V;
    fn set(&self, target: &mut T, value: V);
}

/// Solid fill in a packed `0xAARRGGBB` color
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColorDrawable {
    pub color: u32,
}

impl ColorDrawable {
    pub fn new(color: u32) -> Self {
        Self { color }
    }

    pub fn alpha(&self) -> u8 {
        (self.color >> 24) as u8
    }

    /// Terminal color, `None` when fully transparent
    pub fn to_color(&self) -> Option<Color> {
        if self.alpha() == 0 {
            return None;
        }
        let [_, r, g, b] = self.color.to_be_bytes();
        Some(Color::Rgb(r, g, b))
    }
}

impl Widget for &ColorDrawable {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(color) = self.to_color() {
            buf.set_style(area, ratatui::style::Style::default().bg(color));
        }
    }
}

/// `color` property of [`ColorDrawable`]
pub struct ColorDrawableProperty;

impl Property<ColorDrawable, u32> for ColorDrawableProperty {
    fn name(&self) -> &'static str {
        "color"
    }

    fn get(&self, target: &ColorDrawable) -> u32 {
        target.color
    }

    fn set(&self, target: &mut ColorDrawable, value: u32) {
        target.color = value;
    }
}
