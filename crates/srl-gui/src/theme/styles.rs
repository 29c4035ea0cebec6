//! Widget style functions.
//!
//! Style functions receive `&Theme` and use it to access colors:
//!
//! ```rust,ignore
//! button(text("Search")).style(button_primary)
//! ```

use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};
use srl_model::CategoryStatus;

use super::colors::RegistrarColors;
use super::spacing;

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let registrar = theme.registrar();

    let (background, text_color) = match status {
        button::Status::Active => (palette.primary.base.color, registrar.text_on_accent),
        button::Status::Hovered => (registrar.accent_hover, registrar.text_on_accent),
        button::Status::Pressed => (registrar.accent_pressed, registrar.text_on_accent),
        button::Status::Disabled => (registrar.accent_disabled, registrar.text_muted),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: match status {
            button::Status::Active | button::Status::Hovered => Shadow {
                color: registrar.shadow,
                offset: Vector::new(0.0, 1.0),
                blur_radius: 2.0,
            },
            _ => Shadow::default(),
        },
        ..Default::default()
    }
}

/// Secondary button style - alternative actions.
pub fn button_secondary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();
    let registrar = theme.registrar();

    let (background, text_color, border_color) = match status {
        button::Status::Active => (
            registrar.background_elevated,
            registrar.text_secondary,
            registrar.border_default,
        ),
        button::Status::Hovered => (
            registrar.accent_light,
            palette.primary.base.color,
            registrar.border_focused,
        ),
        button::Status::Pressed => (
            registrar.background_secondary,
            palette.primary.base.color,
            registrar.border_focused,
        ),
        button::Status::Disabled => (
            registrar.background_secondary,
            registrar.text_disabled,
            registrar.border_subtle,
        ),
    };

    button::Style {
        background: Some(background.into()),
        text_color,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: border_color,
        },
        ..Default::default()
    }
}

/// Ghost button style - icon buttons without chrome.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let registrar = theme.registrar();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(registrar.background_secondary.into())
        }
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: registrar.text_secondary,
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Category button style, colored by the category's status.
///
/// The selected category gets a thicker border in the status color.
pub fn button_category(
    category_status: CategoryStatus,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let registrar = theme.registrar();
        let accent = registrar.status(category_status);

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Color {
                a: 0.30,
                ..accent
            },
            _ if selected => Color { a: 0.22, ..accent },
            _ => registrar.status_light(category_status),
        };

        button::Style {
            background: Some(background.into()),
            text_color: theme.extended_palette().background.base.text,
            border: Border {
                radius: spacing::BORDER_RADIUS_SM.into(),
                width: if selected {
                    spacing::BORDER_WIDTH_MEDIUM
                } else {
                    spacing::BORDER_WIDTH_THIN
                },
                color: if selected {
                    accent
                } else {
                    registrar.border_subtle
                },
            },
            ..Default::default()
        }
    }
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Card container style - elevated surface.
pub fn container_card(theme: &Theme) -> container::Style {
    let registrar = theme.registrar();

    container::Style {
        background: Some(registrar.background_elevated.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_MD.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: registrar.border_subtle,
        },
        shadow: Shadow {
            color: registrar.shadow,
            offset: Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..Default::default()
    }
}

/// Surface container style - subtle background.
pub fn container_surface(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.registrar().background_secondary.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Pretty-printed JSON block.
pub fn container_code(theme: &Theme) -> container::Style {
    let registrar = theme.registrar();

    container::Style {
        background: Some(registrar.background_inset.into()),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: spacing::BORDER_WIDTH_THIN,
            color: registrar.border_subtle,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();
    let registrar = theme.registrar();

    let (border_width, border_color) = match status {
        text_input::Status::Active => (spacing::BORDER_WIDTH_THIN, registrar.border_default),
        text_input::Status::Hovered => (spacing::BORDER_WIDTH_THIN, registrar.text_disabled),
        text_input::Status::Focused { .. } => {
            (spacing::BORDER_WIDTH_MEDIUM, registrar.border_focused)
        }
        text_input::Status::Disabled => (spacing::BORDER_WIDTH_THIN, registrar.border_subtle),
    };

    text_input::Style {
        background: registrar.background_elevated.into(),
        border: Border {
            radius: spacing::BORDER_RADIUS_SM.into(),
            width: border_width,
            color: border_color,
        },
        icon: registrar.text_muted,
        placeholder: registrar.text_disabled,
        value: palette.background.base.text,
        selection: registrar.accent_light,
    }
}
