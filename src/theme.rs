//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles. Toggling the
//! theme swaps the active `StyleMap`, which restyles the whole surface
//! on the next frame.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// The other variant: Dark ↔ Light.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for the title bar and status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette — semantic roles to Style
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header --
    pub header_title: Style,
    pub header_meta: Style,

    // -- Search input --
    pub input_text: Style,
    pub input_placeholder: Style,

    // -- Category filter row --
    pub filter_label: Style,
    pub filter_option: Style,
    pub filter_selected: Style,

    // -- Status region --
    pub status_loading: Style,
    pub status_error: Style,
    pub status_empty: Style,

    // -- Result cards --
    pub card_title: Style,
    pub card_title_selected: Style,
    pub card_label: Style,
    pub card_value: Style,
    pub card_link: Style,
    pub card_placeholder: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub panel_border: Style,
    pub panel_border_focused: Style,
}

impl ColorPalette {
    /// Dark palette — the default for dark terminal backgrounds.
    fn dark() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_meta: Style::default().fg(Color::DarkGray),

            input_text: Style::default(),
            input_placeholder: Style::default().fg(Color::DarkGray),

            filter_label: Style::default().fg(Color::DarkGray),
            filter_option: Style::default(),
            filter_selected: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            status_loading: Style::default().fg(Color::Yellow),
            status_error: Style::default().fg(Color::Red),
            status_empty: Style::default().fg(Color::DarkGray),

            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_title_selected: Style::default()
                .bg(Color::DarkGray)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(Color::DarkGray),
            card_value: Style::default(),
            card_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            card_placeholder: Style::default().fg(Color::DarkGray),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            panel_border: Style::default(),
            panel_border_focused: Style::default().fg(Color::Cyan),
        }
    }

    /// Light palette — adapted for light terminal backgrounds.
    fn light() -> Self {
        Self {
            header_title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_meta: Style::default().fg(Color::DarkGray),

            input_text: Style::default().fg(Color::Black),
            input_placeholder: Style::default().fg(Color::Gray),

            filter_label: Style::default().fg(Color::DarkGray),
            filter_option: Style::default().fg(Color::Black),
            filter_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            status_loading: Style::default().fg(Color::Magenta),
            status_error: Style::default().fg(Color::Red),
            status_empty: Style::default().fg(Color::DarkGray),

            card_title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            card_title_selected: Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_label: Style::default().fg(Color::DarkGray),
            card_value: Style::default().fg(Color::Black),
            card_link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            card_placeholder: Style::default().fg(Color::Gray),

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            panel_border: Style::default().fg(Color::DarkGray),
            panel_border_focused: Style::default().fg(Color::Blue),
        }
    }
}

// ============================================================================
// Style Map — string-keyed lookup
// ============================================================================

/// String-keyed style lookup built from a `ColorPalette`.
///
/// Render code resolves role names (e.g. `"card_link"`) to their concrete
/// `Style` at runtime, so a theme switch only has to replace the map.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

/// All semantic role names, in declaration order.
const ROLE_NAMES: [&str; 19] = [
    "header_title",
    "header_meta",
    "input_text",
    "input_placeholder",
    "filter_label",
    "filter_option",
    "filter_selected",
    "status_loading",
    "status_error",
    "status_empty",
    "card_title",
    "card_title_selected",
    "card_label",
    "card_value",
    "card_link",
    "card_placeholder",
    "status_bar",
    "panel_border",
    "panel_border_focused",
];

impl StyleMap {
    /// Build a `StyleMap` from a `ColorPalette`.
    pub fn from_palette(p: &ColorPalette) -> Self {
        let styles: [Style; 19] = [
            p.header_title,
            p.header_meta,
            p.input_text,
            p.input_placeholder,
            p.filter_label,
            p.filter_option,
            p.filter_selected,
            p.status_loading,
            p.status_error,
            p.status_empty,
            p.card_title,
            p.card_title_selected,
            p.card_label,
            p.card_value,
            p.card_link,
            p.card_placeholder,
            p.status_bar,
            p.panel_border,
            p.panel_border_focused,
        ];

        let mut map = HashMap::with_capacity(ROLE_NAMES.len());
        for (name, style) in ROLE_NAMES.iter().zip(styles.iter()) {
            map.insert(*name, *style);
        }

        Self { map }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }
}

// ============================================================================
// Tests
// ============================================================================
