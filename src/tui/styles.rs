//! Color palette and styles.
//!
//! Band colors follow the familiar traffic-light scheme; everything else is a
//! calm slate/indigo palette that stays readable on dark terminals.

use ratatui::style::{Color, Modifier, Style};

use crate::domain::Band;

/// Application color palette.
pub struct Theme;

impl Theme {
    // === Primary Colors ===

    /// Indigo - Primary color
    pub const PRIMARY: Color = Color::Rgb(99, 102, 241); // #6366F1

    /// Lighter indigo for highlights
    pub const PRIMARY_LIGHT: Color = Color::Rgb(165, 180, 252); // #A5B4FC

    /// Darker indigo for accents
    pub const PRIMARY_DARK: Color = Color::Rgb(67, 56, 202); // #4338CA

    // === Secondary Colors ===

    /// Light slate for borders
    pub const SECONDARY_LIGHT: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Slate for unfilled slider tracks
    pub const TRACK: Color = Color::Rgb(51, 65, 85); // #334155

    // === Semantic Colors ===

    /// Rose - Error
    pub const DANGER: Color = Color::Rgb(244, 63, 94); // #F43F5E

    // === Text Colors ===

    /// Primary text (white)
    pub const TEXT_PRIMARY: Color = Color::Rgb(248, 250, 252); // #F8FAFC

    /// Secondary text (gray)
    pub const TEXT_SECONDARY: Color = Color::Rgb(148, 163, 184); // #94A3B8

    /// Muted text
    pub const TEXT_MUTED: Color = Color::Rgb(100, 116, 139); // #64748B

    // === Preset Styles ===

    /// Style for titles
    #[must_use]
    pub fn title() -> Style {
        Style::default()
            .fg(Self::TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for normal text
    #[must_use]
    pub fn text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style for secondary text
    #[must_use]
    pub fn text_secondary() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Style for muted text
    #[must_use]
    pub fn text_muted() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    /// Style for danger/error messages
    #[must_use]
    pub fn danger() -> Style {
        Style::default().fg(Self::DANGER)
    }

    /// Style for focused elements
    #[must_use]
    pub fn focused() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for borders
    #[must_use]
    pub fn border() -> Style {
        Style::default().fg(Self::SECONDARY_LIGHT)
    }

    /// Style for focused borders
    #[must_use]
    pub fn border_focused() -> Style {
        Style::default().fg(Self::PRIMARY)
    }

    /// Filled part of a slider
    #[must_use]
    pub fn slider(focused: bool) -> Style {
        let fill = if focused {
            Self::PRIMARY_LIGHT
        } else {
            Self::PRIMARY_DARK
        };
        Style::default().fg(fill).bg(Self::TRACK)
    }

    /// Style for key hints
    #[must_use]
    pub fn key_hint() -> Style {
        Style::default()
            .fg(Self::PRIMARY_LIGHT)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for key descriptions
    #[must_use]
    pub fn key_desc() -> Style {
        Style::default().fg(Self::TEXT_SECONDARY)
    }

    /// Foreground color for a band
    #[must_use]
    pub fn band_color(band: Band) -> Color {
        let (r, g, b) = band.color();
        Color::Rgb(r, g, b)
    }

    /// Get band style
    #[must_use]
    pub fn band(band: Band) -> Style {
        Style::default().fg(Self::band_color(band))
    }

    /// Gauge style for a band: filled in the band color over the track
    #[must_use]
    pub fn band_gauge(band: Band) -> Style {
        Style::default().fg(Self::band_color(band)).bg(Self::TRACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_colors_match_palette() {
        assert_eq!(Theme::band_color(Band::VeryHigh), Color::Rgb(40, 167, 69));
        assert_eq!(Theme::band_color(Band::High), Color::Rgb(255, 193, 7));
        assert_eq!(Theme::band_color(Band::Medium), Color::Rgb(253, 126, 20));
        assert_eq!(Theme::band_color(Band::Low), Color::Rgb(220, 53, 69));
    }
}
