//! Detail panel for the selected category.

use iced::widget::{Space, column, container, row, text};
use iced::{Element, Font, Length, Theme};
use serde_json::Value;
use srl_model::{Category, CategoryResult};

use crate::component::{EmptyState, ErrorState, LoadingState};
use crate::message::{Message, SearchMessage};
use crate::theme::{
    DETAIL_MAX_WIDTH, RegistrarColors, SPACING_MD, SPACING_SM, SPACING_XS, container_code,
};

/// What the detail panel shows for a category, independent of rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailContent {
    Loading {
        title: String,
    },
    /// A non-empty array, one pretty-printed block per element.
    Records {
        header: String,
        records: Vec<String>,
    },
    /// An empty array.
    Empty {
        header: String,
        message: String,
    },
    /// An object or scalar as one pretty-printed block.
    Document {
        body: String,
    },
    NotFound {
        title: String,
        message: String,
    },
    Failed {
        title: String,
        error: String,
        detail: String,
    },
}

/// Describe the detail panel for `category` in state `result`.
pub fn detail_content(category: Category, result: &CategoryResult) -> DetailContent {
    let label = category.label();
    match result {
        CategoryResult::Loading => DetailContent::Loading {
            title: format!("Loading {label}…"),
        },
        CategoryResult::Success(Value::Array(items)) if items.is_empty() => DetailContent::Empty {
            header: "0 records".to_string(),
            message: "No records found (empty)".to_string(),
        },
        CategoryResult::Success(Value::Array(items)) => DetailContent::Records {
            header: format!("Found {} record(s)", items.len()),
            records: items.iter().map(pretty).collect(),
        },
        CategoryResult::Success(value) => DetailContent::Document {
            body: pretty(value),
        },
        CategoryResult::NotFound => DetailContent::NotFound {
            title: "No record on file".to_string(),
            message: format!("The records service has no {label} for this student."),
        },
        CategoryResult::Failed { error, attempts } => DetailContent::Failed {
            title: format!("Could not load {label}"),
            error: error.to_string(),
            detail: format!(
                "{} Gave up after {attempts} attempt(s).",
                error.user_message()
            ),
        },
    }
}

/// Two-space indented JSON.
fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Render the detail panel.
pub fn view_detail(category: Category, result: &CategoryResult) -> Element<'_, Message> {
    let title = text(category.label())
        .size(18)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.extended_palette().background.base.text),
        });

    let body: Element<'_, Message> = match detail_content(category, result) {
        DetailContent::Loading { title } => LoadingState::new(title).view(),

        DetailContent::Records { header, records } => {
            let mut list = column![muted(header)].spacing(SPACING_SM);
            for (index, record) in records.into_iter().enumerate() {
                list = list.push(
                    row![
                        container(muted(format!("{}.", index + 1))).width(Length::Fixed(32.0)),
                        code_block(record),
                    ]
                    .spacing(SPACING_XS),
                );
            }
            list.into()
        }

        DetailContent::Empty { header, message } => column![
            muted(header),
            EmptyState::new(
                container(iced_fonts::lucide::circle().size(32)).style(|theme: &Theme| {
                    container::Style {
                        text_color: Some(theme.registrar().status_empty),
                        ..Default::default()
                    }
                }),
                message,
            )
            .view(),
        ]
        .spacing(SPACING_SM)
        .into(),

        DetailContent::Document { body } => code_block(body),

        DetailContent::NotFound { title, message } => EmptyState::new(
            container(iced_fonts::lucide::circle_minus().size(32)).style(|theme: &Theme| {
                container::Style {
                    text_color: Some(theme.registrar().status_not_found),
                    ..Default::default()
                }
            }),
            title,
        )
        .description(message)
        .view(),

        DetailContent::Failed {
            title,
            error,
            detail,
        } => ErrorState::new(title)
            .message(error)
            .detail(detail)
            .retry(Message::Search(SearchMessage::RetryCategory(category)))
            .view(),
    };

    column![title, Space::new().height(SPACING_MD), body]
        .max_width(DETAIL_MAX_WIDTH)
        .into()
}

fn muted<'a>(content: String) -> Element<'a, Message> {
    text(content)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.registrar().text_muted),
        })
        .into()
}

fn code_block<'a>(body: String) -> Element<'a, Message> {
    container(text(body).size(13).font(Font::MONOSPACE))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(container_code)
        .into()
}
