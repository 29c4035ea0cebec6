//! Theme module for Student Record Lookup.
//!
//! - Color palettes for light and dark mode (`palette`)
//! - App-specific colors on top of Iced's extended palette (`colors`)
//! - Widget style functions (`styles`)
//! - Spacing constants (`spacing`)
//!
//! # Usage
//!
//! ```rust,ignore
//! use srl_gui::theme::{button_primary, RegistrarColors, SPACING_MD};
//!
//! button(text("Search")).style(button_primary).padding(SPACING_MD);
//!
//! container(content).style(|theme: &Theme| container::Style {
//!     background: Some(theme.registrar().background_elevated.into()),
//!     ..Default::default()
//! });
//! ```

pub mod colors;
pub mod palette;
pub mod spacing;
pub mod styles;

pub use colors::{RegistrarColorSet, RegistrarColors};
pub use palette::registrar_theme;
pub use spacing::{
    BORDER_RADIUS_FULL, BORDER_RADIUS_MD, BORDER_RADIUS_SM, BORDER_WIDTH_MEDIUM,
    BORDER_WIDTH_THIN, DETAIL_MAX_WIDTH, SEARCH_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM,
    SPACING_XL, SPACING_XS,
};
pub use styles::{
    button_category, button_ghost, button_primary, button_secondary, container_card,
    container_code, container_surface, text_input_default,
};
