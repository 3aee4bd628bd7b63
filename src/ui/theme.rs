//! Greyscale theme for folio
//! A high-contrast monochrome palette with a single accent per category

use crate::catalog::Category;
use ratatui::style::{Color, Modifier, Style};

/// The greyscale color palette
pub struct Theme;

impl Theme {
    // ─────────────────────────────────────────────────────────────────────
    // Core greyscale palette - from brightest to darkest
    // ─────────────────────────────────────────────────────────────────────

    /// Pure white - maximum emphasis
    pub const WHITE: Color = Color::Rgb(255, 255, 255);

    /// Near white - headers, selected items
    pub const GREY_50: Color = Color::Rgb(250, 250, 250);

    /// Bright grey - primary text
    pub const GREY_100: Color = Color::Rgb(220, 220, 220);

    /// Light grey - secondary text
    pub const GREY_200: Color = Color::Rgb(180, 180, 180);

    /// Medium grey - muted text
    pub const GREY_300: Color = Color::Rgb(140, 140, 140);

    /// Dark grey - inactive tabs
    pub const GREY_400: Color = Color::Rgb(100, 100, 100);

    /// Darker grey - borders, separators
    pub const GREY_500: Color = Color::Rgb(70, 70, 70);

    /// Very dark grey - subtle borders
    pub const GREY_600: Color = Color::Rgb(45, 45, 45);

    /// Dark grey - overlay backgrounds
    pub const GREY_700: Color = Color::Rgb(35, 35, 35);

    /// Near black - panel background
    pub const GREY_800: Color = Color::Rgb(28, 28, 28);

    /// True black - deepest background
    pub const GREY_900: Color = Color::Rgb(18, 18, 18);

    pub const ACCENT: Color = Color::Rgb(59, 130, 246);

    pub const FOLIO_LOGO: &'static str = "F O L I O";

    // Notification backgrounds
    pub const GREEN: Color = Color::Rgb(16, 185, 129);
    pub const RED: Color = Color::Rgb(239, 68, 68);

    // ─────────────────────────────────────────────────────────────────────
    // Pre-built styles for common UI elements
    // ─────────────────────────────────────────────────────────────────────

    /// Main background style
    pub fn bg() -> Style {
        Style::default().bg(Self::GREY_900)
    }

    /// Panel background style
    pub fn panel_bg() -> Style {
        Style::default().bg(Self::GREY_800)
    }

    /// Primary text style
    pub fn text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    /// Secondary/muted text
    pub fn text_muted() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    /// Dimmed text for less important items
    pub fn text_dim() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    /// Selected/highlighted item
    pub fn selected() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .bg(Self::GREY_700)
            .add_modifier(Modifier::BOLD)
    }

    /// Border style for panels
    pub fn border() -> Style {
        Style::default().fg(Self::GREY_500)
    }

    /// Active border (focused panel)
    pub fn border_active() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    /// Title style
    pub fn title() -> Style {
        Style::default()
            .fg(Self::GREY_50)
            .add_modifier(Modifier::BOLD)
    }

    /// Keybinding highlight
    pub fn key() -> Style {
        Style::default().fg(Self::GREY_900).bg(Self::GREY_400)
    }

    /// Tag color for a folder category
    pub fn category_color(category: Category) -> Color {
        match category {
            Category::Industrial => Color::Rgb(96, 165, 250),
            Category::Canopy => Color::Rgb(251, 191, 36),
            Category::Schools => Color::Rgb(52, 211, 153),
            Category::Docs => Color::Rgb(196, 181, 253),
        }
    }

    /// Progress bar characters
    pub const BAR_FILLED: char = '█';
    pub const BAR_EMPTY: char = '░';

    pub const ARROW_RIGHT: char = '▸';
    pub const DOT_SEPARATOR: char = '·';
    pub const FOLDER_ICON: &'static str = "▣";
    pub const PDF_ICON: &'static str = "▤";
    pub const IMAGE_ICON: &'static str = "◩";
}

/// Horizontal gauge of `width` cells, filled in proportion to
/// `value` within `min..=max`.
pub fn range_gauge(value: u16, min: u16, max: u16, width: usize) -> String {
    let span = max.saturating_sub(min).max(1) as usize;
    let offset = value.clamp(min, max).saturating_sub(min) as usize;
    let filled = (offset * width + span / 2) / span;

    (0..width)
        .map(|i| {
            if i < filled {
                Theme::BAR_FILLED
            } else {
                Theme::BAR_EMPTY
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_gauge_bounds() {
        assert_eq!(range_gauge(50, 50, 300, 10), "░".repeat(10));
        assert_eq!(range_gauge(300, 50, 300, 10), "█".repeat(10));
        assert_eq!(range_gauge(999, 50, 300, 4).chars().count(), 4);
    }

    #[test]
    fn test_range_gauge_midpoint() {
        let gauge = range_gauge(175, 50, 300, 10);
        assert_eq!(gauge.chars().filter(|&c| c == Theme::BAR_FILLED).count(), 5);
    }
}
