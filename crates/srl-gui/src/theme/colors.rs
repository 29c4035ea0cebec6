//! Registrar color extension trait for app-specific colors.
//!
//! Adds the colors Iced's `ExtendedPalette` does not cover, most importantly
//! one color per [`CategoryStatus`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use srl_gui::theme::RegistrarColors;
//!
//! .style(|theme: &Theme| {
//!     let registrar = theme.registrar();
//!     container::Style {
//!         background: Some(registrar.status_light(CategoryStatus::Empty).into()),
//!         ..Default::default()
//!     }
//! })
//! ```

use iced::{Color, Theme};
use srl_model::CategoryStatus;

// =============================================================================
// COLOR SET
// =============================================================================

/// App-specific colors not covered by Iced's ExtendedPalette.
#[derive(Debug, Clone, Copy)]
pub struct RegistrarColorSet {
    // === Category Status ===
    pub status_loading: Color,
    pub status_success: Color,
    /// Empty array (orange)
    pub status_empty: Color,
    /// Record absent (neutral gray)
    pub status_not_found: Color,
    pub status_error: Color,

    // === Borders ===
    pub border_default: Color,
    pub border_subtle: Color,
    /// Focused element border (accent color)
    pub border_focused: Color,
    pub border_error: Color,

    // === Backgrounds ===
    /// Cards, surfaces
    pub background_secondary: Color,
    /// Elevated surface - white in light mode
    pub background_elevated: Color,
    /// Recessed areas (code blocks)
    pub background_inset: Color,

    // === Text ===
    pub text_secondary: Color,
    /// Descriptions, hints
    pub text_muted: Color,
    pub text_disabled: Color,
    pub text_on_accent: Color,

    // === Interactive ===
    pub accent_hover: Color,
    pub accent_pressed: Color,
    pub accent_disabled: Color,
    /// Selection tint
    pub accent_light: Color,

    pub shadow: Color,

    is_dark: bool,
}

impl RegistrarColorSet {
    /// Foreground color for a category status.
    #[must_use]
    pub fn status(&self, status: CategoryStatus) -> Color {
        match status {
            CategoryStatus::Loading => self.status_loading,
            CategoryStatus::Success => self.status_success,
            CategoryStatus::Empty => self.status_empty,
            CategoryStatus::NotFound => self.status_not_found,
            CategoryStatus::Error => self.status_error,
        }
    }

    /// Tinted background for a category status.
    #[must_use]
    pub fn status_light(&self, status: CategoryStatus) -> Color {
        let base = self.status(status);
        if self.is_dark {
            Color { a: 0.18, ..base }
        } else {
            blend_color(base, Color::WHITE, 0.85)
        }
    }
}

// =============================================================================
// EXTENSION TRAIT
// =============================================================================

/// Extension trait for app-specific colors.
///
/// Use it inside style closures that receive a `&Theme`.
pub trait RegistrarColors {
    fn registrar(&self) -> RegistrarColorSet;
}

impl RegistrarColors for Theme {
    fn registrar(&self) -> RegistrarColorSet {
        let palette = self.extended_palette();
        let is_dark = palette.is_dark;
        let pick = |dark: Color, light: Color| if is_dark { dark } else { light };

        RegistrarColorSet {
            status_loading: palette.primary.base.color,
            status_success: palette.success.base.color,
            status_empty: palette.warning.base.color,
            status_not_found: pick(
                Color::from_rgb(0.50, 0.50, 0.55),
                Color::from_rgb(0.55, 0.55, 0.60),
            ),
            status_error: palette.danger.base.color,

            border_default: palette.background.strong.color,
            border_subtle: pick(
                Color::from_rgb(0.20, 0.20, 0.22),
                Color::from_rgb(0.90, 0.90, 0.93),
            ),
            border_focused: palette.primary.base.color,
            border_error: palette.danger.base.color,

            background_secondary: palette.background.weak.color,
            background_elevated: pick(Color::from_rgb(0.16, 0.16, 0.18), Color::WHITE),
            background_inset: pick(
                Color::from_rgb(0.06, 0.06, 0.08),
                Color::from_rgb(0.95, 0.95, 0.97),
            ),

            text_secondary: pick(
                Color::from_rgb(0.80, 0.80, 0.85),
                Color::from_rgb(0.30, 0.30, 0.35),
            ),
            text_muted: pick(
                Color::from_rgb(0.60, 0.60, 0.65),
                Color::from_rgb(0.50, 0.50, 0.55),
            ),
            text_disabled: pick(
                Color::from_rgb(0.40, 0.40, 0.45),
                Color::from_rgb(0.65, 0.65, 0.70),
            ),
            text_on_accent: Color::WHITE,

            accent_hover: if is_dark {
                blend_color(palette.primary.base.color, Color::WHITE, 0.15)
            } else {
                blend_color(palette.primary.base.color, Color::BLACK, 0.12)
            },
            accent_pressed: blend_color(palette.primary.base.color, Color::BLACK, 0.25),
            accent_disabled: pick(
                Color::from_rgb(0.30, 0.30, 0.33),
                Color::from_rgb(0.82, 0.82, 0.86),
            ),
            accent_light: if is_dark {
                Color {
                    a: 0.15,
                    ..palette.primary.base.color
                }
            } else {
                blend_color(palette.primary.base.color, Color::WHITE, 0.88)
            },

            shadow: pick(
                Color::from_rgba(0.0, 0.0, 0.0, 0.40),
                Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            ),

            is_dark,
        }
    }
}

fn blend_color(base: Color, blend: Color, factor: f32) -> Color {
    Color::from_rgb(
        base.r + (blend.r - base.r) * factor,
        base.g + (blend.g - base.g) * factor,
        base.b + (blend.b - base.b) * factor,
    )
}
