//! Placeholder panels: nothing to show, still loading, or failed.
//!
//! All three share one layout: a tinted icon, a title line and optional
//! small print, centered horizontally.
//!
//! ```rust,ignore
//! EmptyState::new(lucide::search().size(48), "Look up a student")
//!     .description("Enter a student ID above")
//!     .view()
//!
//! ErrorState::new("Could not load Payment")
//!     .message(error.to_string())
//!     .retry(Message::Search(SearchMessage::RetryCategory(Category::Payment)))
//!     .view()
//! ```

use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, RegistrarColors, SPACING_LG, SPACING_MD, SPACING_SM, button_primary,
};

/// Icon, title and the optional lines below them.
fn placeholder<'a, M: 'a>(
    icon: Element<'a, M>,
    title: String,
    title_color: fn(&Theme) -> Color,
) -> Column<'a, M> {
    column![
        icon,
        Space::new().height(SPACING_MD),
        text(title).size(16).style(move |theme: &Theme| text::Style {
            color: Some(title_color(theme)),
        }),
    ]
    .align_x(Alignment::Center)
}

fn small_print<'a, M: 'a>(content: String) -> Element<'a, M> {
    text(content)
        .size(13)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.registrar().text_muted),
        })
        .into()
}

fn centered<'a, M: 'a>(content: Column<'a, M>) -> Element<'a, M> {
    container(content)
        .width(Length::Fill)
        .padding(SPACING_LG)
        .center_x(Length::Shrink)
        .into()
}

fn tinted<'a, M: 'a>(
    icon: impl Into<Element<'a, M>>,
    color: fn(&Theme) -> Color,
) -> Element<'a, M> {
    container(icon.into())
        .style(move |theme: &Theme| container::Style {
            text_color: Some(color(theme)),
            ..Default::default()
        })
        .into()
}

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Nothing to show yet.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    /// `icon` is shown as given; tint it with a container style if needed.
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let mut content = placeholder(self.icon, self.title, |theme| {
            theme.registrar().text_secondary
        });
        if let Some(desc) = self.description {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(small_print(desc));
        }
        centered(content)
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// A request is in flight.
pub struct LoadingState {
    title: String,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let icon = tinted(lucide::loader().size(32), |theme| {
            theme.registrar().status_loading
        });
        centered(placeholder(icon, self.title, |theme| {
            theme.extended_palette().background.base.text
        }))
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// A request failed; optionally offers a retry.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    detail: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            detail: None,
            retry: None,
        }
    }

    /// Error text, shown boxed.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Message sent by the Retry button. No button without it.
    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let icon = tinted(lucide::circle_x().size(40), |theme| {
            theme.registrar().status_error
        });
        let mut content = placeholder(icon, self.title, |theme| {
            theme.extended_palette().background.base.text
        })
        .max_width(480.0);

        if let Some(msg) = self.message {
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(text(msg).size(12).font(iced::Font::MONOSPACE))
                    .padding(SPACING_MD)
                    .style(|theme: &Theme| container::Style {
                        background: Some(theme.registrar().background_secondary.into()),
                        text_color: Some(theme.registrar().text_secondary),
                        border: Border {
                            radius: BORDER_RADIUS_SM.into(),
                            ..Default::default()
                        },
                        ..Default::default()
                    }),
            );
        }

        if let Some(detail) = self.detail {
            content = content
                .push(Space::new().height(SPACING_SM))
                .push(small_print(detail));
        }

        if let Some(on_retry) = self.retry {
            let label = row![lucide::refresh_cw().size(14), text("Retry").size(14)]
                .spacing(SPACING_SM)
                .align_y(Alignment::Center);
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(label)
                    .on_press(on_retry)
                    .padding([10.0, 24.0])
                    .style(button_primary),
            );
        }

        centered(content)
    }
}
