//! Light theme for Employee Desk
//!
//! Greys for surfaces and text, green for primary actions, red for
//! destructive ones.

use gpui::Hsla;

/// Palette
pub mod colors {
    use gpui::rgb;

    // Surfaces
    pub fn gray_50() -> gpui::Hsla { rgb(0xf9fafb).into() }
    pub fn white() -> gpui::Hsla { rgb(0xffffff).into() }
    pub fn gray_100() -> gpui::Hsla { rgb(0xf3f4f6).into() }
    pub fn gray_200() -> gpui::Hsla { rgb(0xe5e7eb).into() }
    pub fn gray_300() -> gpui::Hsla { rgb(0xd1d5db).into() }

    // Text
    pub fn gray_900() -> gpui::Hsla { rgb(0x111827).into() }
    pub fn gray_700() -> gpui::Hsla { rgb(0x374151).into() }
    pub fn gray_500() -> gpui::Hsla { rgb(0x6b7280).into() }

    // Accents
    pub fn green_600() -> gpui::Hsla { rgb(0x16a34a).into() }
    pub fn green_700() -> gpui::Hsla { rgb(0x15803d).into() }
    pub fn indigo_600() -> gpui::Hsla { rgb(0x4f46e5).into() }
    pub fn red_600() -> gpui::Hsla { rgb(0xdc2626).into() }
    pub fn red_50() -> gpui::Hsla { rgb(0xfef2f2).into() }
    pub fn green_50() -> gpui::Hsla { rgb(0xf0fdf4).into() }
}

/// Theme configuration
#[derive(Clone)]
pub struct DeskTheme {
    // Backgrounds
    pub background: Hsla,
    pub surface: Hsla,
    pub surface_header: Hsla,
    pub row_hover: Hsla,
    pub overlay: Hsla,

    // Foregrounds
    pub foreground: Hsla,
    pub foreground_dim: Hsla,
    pub foreground_muted: Hsla,

    // Actions
    pub primary: Hsla,
    pub primary_hover: Hsla,
    pub edit: Hsla,
    pub danger: Hsla,

    // Toasts
    pub success_bg: Hsla,
    pub error_bg: Hsla,

    pub border: Hsla,
    pub input_border: Hsla,
    /// Opacity applied to disabled controls
    pub disabled_opacity: f32,
}

impl Default for DeskTheme {
    fn default() -> Self {
        Self {
            background: colors::gray_50(),
            surface: colors::white(),
            surface_header: colors::gray_100(),
            row_hover: colors::gray_50(),
            overlay: colors::gray_900().opacity(0.5),

            foreground: colors::gray_900(),
            foreground_dim: colors::gray_700(),
            foreground_muted: colors::gray_500(),

            primary: colors::green_600(),
            primary_hover: colors::green_700(),
            edit: colors::indigo_600(),
            danger: colors::red_600(),

            success_bg: colors::green_50(),
            error_bg: colors::red_50(),

            border: colors::gray_200(),
            input_border: colors::gray_300(),
            disabled_opacity: 0.5,
        }
    }
}

impl DeskTheme {
    pub fn new() -> Self {
        Self::default()
    }
}
