//! Marquee palette for the catalog browser: warm gold on a dark screen.
//!
//! Views take every color and style from here.

use ratatui::style::{Color, Modifier, Style};

// ── Palette ─────────────────────────────────────────────────────────────────

/// Marquee gold: focus, selected facets, the active page.
pub const PRIMARY: Color = Color::Rgb(0xF2, 0xB7, 0x05);
/// Pale gold: card titles and the current-page badge.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0xF7, 0xD0, 0x6A);
/// Curtain red: headings and the brand badge.
pub const ACCENT: Color = Color::Rgb(0xC6, 0x28, 0x28);

/// Screen black behind badges.
pub const BG_BASE: Color = Color::Rgb(0x12, 0x10, 0x0E);

pub const TEXT: Color = Color::Rgb(0xEE, 0xE8, 0xDC);
/// Labels, borders of unfocused panes.
pub const TEXT_MUTED: Color = Color::Rgb(0x9A, 0x92, 0x86);
/// Disabled pagination links, hints.
pub const TEXT_DIM: Color = Color::Rgb(0x5C, 0x56, 0x50);

// Notification levels
pub const INFO: Color = Color::Rgb(0x64, 0xB5, 0xF6);
pub const WARNING: Color = Color::Rgb(0xFF, 0xB7, 0x4D);
pub const ERROR: Color = Color::Rgb(0xE5, 0x73, 0x73);

// ── Styles ──────────────────────────────────────────────────────────────────

/// Pane titles and the help modal title.
pub fn title() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn heading() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Row under the cursor in the focused facet.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hints in the status bar, e.g. `[?]help`.
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
}

pub fn brand_badge() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// The current page number and the active sort mode.
pub fn active_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Facet checkbox marker.
pub fn checkbox(checked: bool) -> &'static str {
    if checked {
        "[x]"
    } else {
        "[ ]"
    }
}
