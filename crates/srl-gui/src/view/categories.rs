//! Category status grid and legend.

use iced::widget::{button, row, text, tooltip};
use iced::{Alignment, Element, Theme};
use srl_model::{AggregateResult, Category, CategoryResult, CategoryStatus};

use crate::component::status_icon;
use crate::message::{Message, SearchMessage};
use crate::theme::{
    RegistrarColors, SPACING_MD, SPACING_SM, SPACING_XS, button_category, container_surface,
};

/// Legend entries in display order.
pub const LEGEND: [(CategoryStatus, &str); 5] = [
    (CategoryStatus::Loading, "Loading"),
    (CategoryStatus::Success, "Has data"),
    (CategoryStatus::Empty, "Empty"),
    (CategoryStatus::NotFound, "Not found"),
    (CategoryStatus::Error, "Error"),
];

/// Text on a category button: the label and, while it is not plain
/// data, the status in words.
pub fn button_caption(category: Category, result: &CategoryResult) -> String {
    match result.status() {
        CategoryStatus::Success => category.label().to_string(),
        status => format!("{} ({status})", category.label()),
    }
}

/// Hover text of a category button.
pub fn button_tooltip(result: &CategoryResult) -> String {
    format!("Status: {}", result.status())
}

/// One button per tracked category, wrapping onto as many lines as needed.
pub fn view_categories(
    results: &AggregateResult,
    selected: Option<Category>,
) -> Element<'_, Message> {
    let buttons = results.iter().map(|(category, result)| {
        let status = result.status();
        let is_selected = selected == Some(category);

        let category_button = button(
            row![
                status_icon(status, 14.0),
                text(button_caption(category, result)).size(13)
            ]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
        )
        .on_press(Message::Search(SearchMessage::CategorySelected(category)))
        .padding([6.0, 12.0])
        .style(button_category(status, is_selected));

        tooltip(
            category_button,
            text(button_tooltip(result)).size(12),
            tooltip::Position::Bottom,
        )
        .gap(SPACING_XS)
        .padding(SPACING_XS)
        .style(container_surface)
        .into()
    });

    row(buttons).spacing(SPACING_SM).wrap().into()
}

pub fn view_legend<'a>() -> Element<'a, Message> {
    let entries = LEGEND.into_iter().map(|(status, label)| {
        row![
            status_icon(status, 12.0),
            text(label).size(12).style(|theme: &Theme| text::Style {
                color: Some(theme.registrar().text_muted),
            }),
        ]
        .spacing(SPACING_XS)
        .align_y(Alignment::Center)
        .into()
    });

    row(entries).spacing(SPACING_MD).into()
}

/// Short summary of an aggregate, e.g. `"10 of 12 loaded, 1 failed"`.
pub fn summary_line(results: &AggregateResult) -> String {
    let counts = results.counts();
    let mut line = format!("{} of {} loaded", counts.settled(), counts.total());
    if counts.error > 0 {
        line.push_str(&format!(", {} failed", counts.error));
    }
    line
}

/// Label and status for the overall badge.
pub fn overall_badge(results: &AggregateResult) -> (&'static str, CategoryStatus) {
    if results.overall_loading() {
        ("Loading", CategoryStatus::Loading)
    } else if results.overall_error() {
        ("Some records failed", CategoryStatus::Error)
    } else {
        ("All records loaded", CategoryStatus::Success)
    }
}
