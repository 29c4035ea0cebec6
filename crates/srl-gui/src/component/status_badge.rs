//! Status badge component.
//!
//! Visual indicators for a category's status. Each status has both an icon
//! and a color so the two never carry the meaning alone.

use iced::widget::{container, row, text};
use iced::{Alignment, Border, Element, Theme};
use iced_fonts::lucide;
use srl_model::CategoryStatus;

use crate::theme::{BORDER_RADIUS_FULL, RegistrarColors, SPACING_XS};

/// Creates the icon for a status, colored by the status.
pub fn status_icon<'a, M: 'a>(status: CategoryStatus, size: f32) -> Element<'a, M> {
    let icon = match status {
        CategoryStatus::Loading => lucide::loader(),
        CategoryStatus::Success => lucide::circle_check(),
        CategoryStatus::Empty => lucide::circle(),
        CategoryStatus::NotFound => lucide::circle_minus(),
        CategoryStatus::Error => lucide::circle_x(),
    };

    container(icon.size(size))
        .style(move |theme: &Theme| container::Style {
            text_color: Some(theme.registrar().status(status)),
            ..Default::default()
        })
        .into()
}

/// Creates a pill-shaped badge with the status icon and a label.
///
/// # Example
///
/// ```rust,ignore
/// let badge = status_badge("3 errors", CategoryStatus::Error);
/// ```
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, status: CategoryStatus) -> Element<'a, M> {
    let label_text = text(label.into())
        .size(12)
        .style(move |theme: &Theme| text::Style {
            color: Some(theme.registrar().status(status)),
        });

    container(
        row![status_icon(status, 12.0), label_text]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
    .padding([4.0, 10.0])
    .style(move |theme: &Theme| container::Style {
        background: Some(theme.registrar().status_light(status).into()),
        border: Border {
            radius: BORDER_RADIUS_FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    })
    .into()
}
