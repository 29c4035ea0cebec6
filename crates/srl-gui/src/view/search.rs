//! Search page: header, student ID form and the active lookup.

use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length, Theme};
use iced_fonts::lucide;

use crate::component::{EmptyState, search_box, status_badge};
use crate::message::{Message, SearchMessage};
use crate::state::{AppState, LookupState, ViewState};
use crate::theme::{
    RegistrarColors, SEARCH_WIDTH, SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XL, button_primary,
    button_secondary, container_card, container_surface,
};

use super::categories::{overall_badge, summary_line, view_categories, view_legend};
use super::detail::view_detail;

/// Render the whole search page.
pub fn view_search<A>(state: &AppState<A>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match &state.view {
        ViewState::Idle => EmptyState::new(
            container(lucide::search().size(48)).style(|theme: &Theme| container::Style {
                text_color: Some(theme.registrar().text_disabled),
                ..Default::default()
            }),
            "Look up a student",
        )
        .description("Enter a student ID above to load their records")
        .view(),
        ViewState::Active(lookup) => view_lookup(lookup),
    };

    let content = column![
        view_header(),
        view_form(state),
        Space::new().height(SPACING_SM),
        body,
    ]
    .spacing(SPACING_MD)
    .padding(SPACING_XL)
    .width(Length::Fill);

    scrollable(content).height(Length::Fill).into()
}

fn view_header<'a>() -> Element<'a, Message> {
    column![
        text("Student Record Lookup").size(24),
        text("Payment, fee and enrolment records by student ID")
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.registrar().text_muted),
            }),
    ]
    .spacing(SPACING_SM / 2.0)
    .into()
}

fn view_form<A>(state: &AppState<A>) -> Element<'_, Message> {
    let input = search_box(
        &state.input,
        "Student ID",
        state.validation_error.is_some(),
        |value| Message::Search(SearchMessage::InputChanged(value)),
        Message::Search(SearchMessage::Submitted),
        Message::Search(SearchMessage::Clear),
    );

    let submit = button(text("Search").size(14))
        .on_press(Message::Search(SearchMessage::Submitted))
        .padding([8.0, 20.0])
        .style(button_primary);

    let mut form = column![
        row![container(input).width(Length::Fixed(SEARCH_WIDTH)), submit]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
    ]
    .spacing(SPACING_SM / 2.0);

    if let Some(err) = &state.validation_error {
        form = form.push(text(err.user_message()).size(12).style(|theme: &Theme| {
            text::Style {
                color: Some(theme.registrar().status_error),
            }
        }));
    }

    form.into()
}

fn view_lookup(lookup: &LookupState) -> Element<'_, Message> {
    let results = &lookup.results;
    let (badge_label, badge_status) = overall_badge(results);

    let header = row![
        text(format!("Student {}", lookup.student())).size(18),
        status_badge(badge_label, badge_status),
        text(summary_line(results))
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.registrar().text_muted),
            }),
        Space::new().width(Length::Fill),
        button(
            row![lucide::refresh_cw().size(14), text("Refresh").size(13)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center),
        )
        .on_press(Message::Search(SearchMessage::Refresh))
        .padding([6.0, 14.0])
        .style(button_secondary),
    ]
    .spacing(SPACING_MD)
    .align_y(Alignment::Center);

    let detail: Element<'_, Message> = match lookup.selection() {
        Some((category, result)) => view_detail(category, result),
        None => EmptyState::new(
            container(lucide::mouse_pointer_click().size(32)).style(|theme: &Theme| {
                container::Style {
                    text_color: Some(theme.registrar().text_disabled),
                    ..Default::default()
                }
            }),
            "Select a category to see its records",
        )
        .view(),
    };

    column![
        header,
        view_categories(results, lookup.selected),
        container(view_legend())
            .padding([6.0, 12.0])
            .style(container_surface),
        container(detail)
            .width(Length::Fill)
            .padding(SPACING_LG)
            .style(container_card),
    ]
    .spacing(SPACING_MD)
    .into()
}
