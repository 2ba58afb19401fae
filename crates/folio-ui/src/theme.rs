//! Theme system for consistent page styling.

use folio_types::backend::Color;
use folio_types::color::{darken, lighten, with_alpha};

/// Complete visual theme for the widget toolkit.
pub struct Theme {
    /// Main page background color.
    pub background: Color,
    /// Card/panel background color.
    pub surface: Color,
    /// Variant surface color for alternating sections.
    pub surface_variant: Color,
    /// Dropdown/overlay backdrop color.
    pub overlay: Color,

    /// Primary text color.
    pub text_primary: Color,
    /// Secondary/muted text color.
    pub text_secondary: Color,
    /// Text on accent-colored backgrounds.
    pub text_on_accent: Color,

    /// Primary accent color.
    pub accent: Color,
    /// Accent color on hover.
    pub accent_hover: Color,
    /// Subtle/transparent accent for badge backgrounds.
    pub accent_subtle: Color,

    /// Default border color.
    pub border: Color,
    /// Subtle/faint border color.
    pub border_subtle: Color,

    /// Small font size.
    pub font_size_sm: u16,
    /// Medium/default font size.
    pub font_size_md: u16,
    /// Large font size.
    pub font_size_lg: u16,
    /// Extra-large font size for section headings.
    pub font_size_xl: u16,
    /// Double extra-large font size for the hero name.
    pub font_size_xxl: u16,

    /// Small spacing.
    pub spacing_sm: u16,
    /// Medium spacing.
    pub spacing_md: u16,
    /// Large spacing.
    pub spacing_lg: u16,
    /// Extra-large spacing between sections.
    pub spacing_xl: u16,

    /// Small border radius.
    pub border_radius_sm: u16,
    /// Medium border radius.
    pub border_radius_md: u16,
    /// Large border radius for cards.
    pub border_radius_lg: u16,
}

impl Theme {
    /// Light theme: the default indigo-on-slate portfolio look.
    pub fn light() -> Self {
        let accent = Color::rgb(79, 70, 229);
        let border = Color::rgb(203, 213, 225);
        Self {
            background: Color::rgb(248, 250, 252),
            surface: Color::rgb(255, 255, 255),
            surface_variant: Color::rgb(241, 245, 249),
            overlay: Color::rgba(15, 23, 42, 120),

            text_primary: Color::rgb(15, 23, 42),
            text_secondary: Color::rgb(100, 116, 139),
            text_on_accent: Color::rgb(255, 255, 255),

            accent,
            accent_hover: lighten(accent, 0.2),
            accent_subtle: with_alpha(accent, 24),

            border,
            border_subtle: lighten(border, 0.45),

            font_size_sm: 8,
            font_size_md: 8,
            font_size_lg: 16,
            font_size_xl: 16,
            font_size_xxl: 24,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 16,
            spacing_xl: 32,

            border_radius_sm: 2,
            border_radius_md: 4,
            border_radius_lg: 8,
        }
    }

    /// Dark theme with the same indigo accent.
    pub fn dark() -> Self {
        let accent = Color::rgb(129, 140, 248);
        let border = Color::rgb(71, 85, 105);
        Self {
            background: Color::rgb(15, 23, 42),
            surface: Color::rgb(30, 41, 59),
            surface_variant: Color::rgb(51, 65, 85),
            overlay: Color::rgba(0, 0, 0, 160),

            text_primary: Color::rgb(241, 245, 249),
            text_secondary: Color::rgb(148, 163, 184),
            text_on_accent: Color::rgb(255, 255, 255),

            accent,
            accent_hover: lighten(accent, 0.25),
            accent_subtle: with_alpha(accent, 36),

            border,
            border_subtle: darken(border, 0.3),

            font_size_sm: 8,
            font_size_md: 8,
            font_size_lg: 16,
            font_size_xl: 16,
            font_size_xxl: 24,

            spacing_sm: 4,
            spacing_md: 8,
            spacing_lg: 16,
            spacing_xl: 32,

            border_radius_sm: 2,
            border_radius_md: 4,
            border_radius_lg: 8,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
