//! Theme system for TUI colors and styles
//!
//! Colors line up with the headless `page` table output (commands/page.rs).

use iocraft::prelude::Color;

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Product fields
    pub id_color: Color,
    pub price: Color,
    pub brand: Color,
    pub brand_missing: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub search_match: Color,
    pub pending: Color,
}

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

impl Default for Theme {
    fn default() -> Self {
        Self {
            id_color: Color::Cyan,
            price: Color::Green,
            brand: Color::Magenta,
            brand_missing: GREY,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            search_match: Color::Yellow,
            pending: Color::Yellow,
        }
    }
}

impl Theme {
    /// Color for a pager arrow, dimmed when the move is unavailable
    pub fn pager_color(&self, enabled: bool) -> Color {
        if enabled {
            self.highlight
        } else {
            self.text_dimmed
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
