/// Theme toggle view layer
use iced::{Element, widget::toggler};
use worldclock_core::theme::ThemeState;

use crate::app::Message;

pub fn render_theme_toggle(state: &ThemeState) -> Element<'static, Message> {
    toggler(state.toggle_checked())
        .label("Dark mode")
        .on_toggle(Message::ThemeToggled)
        .into()
}
