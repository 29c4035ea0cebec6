//! Main application module for Student Record Lookup.
//!
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! - **All state changes happen in `update()`** - views are pure functions
//! - **No channels/polling** - every request is a `Task::perform`
//! - **Late results are dropped** - each result carries its fetch cycle

mod keyboard;

use iced::widget::container;
use iced::{Element, Length, Size, Subscription, Task, Theme, window};
use srl_fetch::{AggregatingFetcher, ApiConfig, HttpStudentApi, StudentApi};

use crate::component::LUCIDE_FONT_BYTES;
use crate::error::StartupError;
use crate::handler::{MessageHandler, SearchHandler};
use crate::message::Message;
use crate::state::{AppState, Fetcher};
use crate::theme::registrar_theme;
use crate::view::view_search;

// =============================================================================
// APPLICATION
// =============================================================================

/// Main application struct.
///
/// Runs against [`HttpStudentApi`]; any other [`StudentApi`] works too.
pub struct App<A = HttpStudentApi> {
    /// All application state.
    pub state: AppState<A>,
}

impl<A: StudentApi> App<A> {
    /// Create the application around `fetcher`. No startup tasks.
    pub fn new(fetcher: Fetcher<A>) -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::new(fetcher),
            },
            Task::none(),
        )
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(search_msg) => SearchHandler.handle(&mut self.state, search_msg),

            Message::CategoryResolved {
                cycle,
                category,
                result,
            } => {
                let applied = self
                    .state
                    .lookup_mut()
                    .is_some_and(|lookup| lookup.results.apply(cycle, category, result));
                if !applied {
                    tracing::debug!(%cycle, category = category.key(), "discarding stale result");
                }
                Task::none()
            }

            Message::KeyPressed(key, modifiers) => self.handle_key_press(key, modifiers),

            Message::SystemThemeChanged(mode) => {
                self.state.system_is_dark = matches!(mode, iced::theme::Mode::Dark);
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_search(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title, naming the active student.
    pub fn title(&self) -> String {
        match self.state.active_student() {
            Some(student) => format!("Student {student} - Student Record Lookup"),
            None => "Student Record Lookup".to_string(),
        }
    }

    pub fn theme(&self) -> Theme {
        registrar_theme(self.state.system_is_dark)
    }

    /// Subscribe to runtime events.
    pub fn subscription(&self) -> Subscription<Message> {
        use iced::{keyboard, system};

        let keyboard_sub = keyboard::listen().map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Message::KeyPressed(key, modifiers)
            }
            _ => Message::Noop,
        });

        let system_theme_sub = system::theme_changes().map(Message::SystemThemeChanged);

        Subscription::batch([keyboard_sub, system_theme_sub])
    }
}

/// Build the HTTP fetcher from `config` and run the application.
pub fn run(config: &ApiConfig) -> Result<(), StartupError> {
    let api = HttpStudentApi::new(config)?;
    let fetcher = AggregatingFetcher::new(api, config);

    tracing::info!(
        base_url = %config.base_url,
        categories = fetcher.registry().len(),
        "API configured"
    );

    type Lookup = App<HttpStudentApi>;

    iced::application(move || Lookup::new(fetcher.clone()), Lookup::update, Lookup::view)
        .title(Lookup::title)
        .theme(Lookup::theme)
        .subscription(Lookup::subscription)
        .font(LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(1100.0, 760.0),
            min_size: Some(Size::new(720.0, 520.0)),
            ..Default::default()
        })
        .run()?;

    Ok(())
}
