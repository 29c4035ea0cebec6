//! Search box component.
//!
//! A text input with search icon, clear button and submit on Enter.

use iced::widget::{button, container, row, text_input};
use iced::{Alignment, Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{BORDER_RADIUS_SM, RegistrarColors, button_ghost, text_input_default};

/// Creates a search input that submits on Enter.
///
/// Shows a clear button when text is entered. The border turns red while
/// `invalid` is set.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    invalid: bool,
    on_change: impl Fn(String) -> M + 'a,
    on_submit: M,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.registrar().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .on_submit(on_submit)
        .padding(Padding::new(8.0))
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(32.0))
            .center_x(Length::Shrink),
        input,
    ]
    .align_y(Alignment::Center);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(16)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.registrar().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        );
    }

    container(content)
        .width(Length::Fill)
        .style(move |theme: &Theme| {
            let registrar = theme.registrar();
            container::Style {
                background: Some(registrar.background_elevated.into()),
                border: Border {
                    color: if invalid {
                        registrar.border_error
                    } else {
                        registrar.border_default
                    },
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}
