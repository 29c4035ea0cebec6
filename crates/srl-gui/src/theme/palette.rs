//! Light and dark palettes.

use iced::theme::Palette;
use iced::{Color, Theme};

/// Creates the application theme, following the system light/dark mode.
pub fn registrar_theme(system_is_dark: bool) -> Theme {
    if system_is_dark {
        Theme::custom("Registrar Dark".to_string(), dark())
    } else {
        Theme::custom("Registrar Light".to_string(), light())
    }
}

fn light() -> Palette {
    Palette {
        background: Color::from_rgb(0.98, 0.98, 0.99),
        text: Color::from_rgb(0.10, 0.10, 0.12),
        primary: Color::from_rgb(0.15, 0.39, 0.92), // Indigo blue
        success: Color::from_rgb(0.20, 0.70, 0.40), // Green
        warning: Color::from_rgb(0.96, 0.55, 0.10), // Orange
        danger: Color::from_rgb(0.85, 0.25, 0.25),  // Red
    }
}

fn dark() -> Palette {
    Palette {
        background: Color::from_rgb(0.08, 0.08, 0.10),
        text: Color::from_rgb(0.95, 0.95, 0.97),
        primary: Color::from_rgb(0.38, 0.58, 0.98),
        success: Color::from_rgb(0.30, 0.80, 0.50),
        warning: Color::from_rgb(0.98, 0.65, 0.25),
        danger: Color::from_rgb(0.95, 0.40, 0.40),
    }
}
