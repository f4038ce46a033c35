mod view;

use std::sync::Arc;

use chrono::Utc;
use iced::{Element, Subscription, Task, Theme, time};
use log::{debug, warn};
use worldclock_core::{
    clock::{ClockRegistry, TICK_INTERVAL},
    session::Session,
    style::worldclock_theme,
    theme::ThemeState
};

#[derive(Debug, Clone)]
pub enum Message {
    Tick,
    ThemeToggled(bool)
}

/// Window state: the session plus the two concerns it feeds.
///
/// The session is shared with the caller so it can be torn down once the
/// window loop returns.
#[derive(Debug)]
pub struct App {
    session: Arc<Session>,
    clocks:  ClockRegistry,
    theme:   ThemeState
}

impl App {
    pub fn new(session: Arc<Session>) -> (Self, Task<Message>) {
        let theme = ThemeState::initialize(&session);
        let clocks = ClockRegistry::with_reference_zones(Utc::now());
        debug!("Rendering {} clocks", clocks.len());

        (
            Self {
                session,
                clocks,
                theme
            },
            Task::none()
        )
    }

    pub fn title(&self) -> String {
        String::from("World Clock")
    }

    pub fn theme(&self) -> Theme {
        worldclock_theme(&self.session.config().appearance, self.theme.mode())
    }

    pub fn scale_factor(&self) -> f64 {
        self.session.config().appearance.scale_factor
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn clocks(&self) -> &ClockRegistry {
        &self.clocks
    }

    pub fn theme_state(&self) -> &ThemeState {
        &self.theme
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => {
                self.clocks.tick(Utc::now());
            }
            Message::ThemeToggled(checked) => {
                if let Err(err) = self.theme.on_toggle_changed(&self.session, checked) {
                    warn!("Failed to persist theme preference: {err}");
                }
            }
        }

        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        time::every(TICK_INTERVAL).map(|_| Message::Tick)
    }
}
