use iced::{
    Alignment, Element, Length,
    widget::{Column, Row, column, container, horizontal_space, row, scrollable, text},
};

use super::{App, Message};
use crate::views::{clock::render_clock, theme_toggle::render_theme_toggle};

const SPACING: f32 = 16.0;

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let config = app.session().config();
    let mode = app.theme_state().mode();
    let columns = usize::try_from(config.layout.columns).unwrap_or(1).max(1);

    let header = row![
        text("World Clock").size(28),
        horizontal_space(),
        render_theme_toggle(app.theme_state()),
    ]
    .align_y(Alignment::Center)
    .spacing(12);

    let rows = app.clocks().displays().chunks(columns).map(|chunk| -> Element<'_, Message> {
        Row::with_children(
            chunk
                .iter()
                .map(|display| render_clock(display, &config.appearance, mode)),
        )
        .spacing(SPACING)
        .into()
    });

    let grid = Column::with_children(rows).spacing(SPACING);

    container(column![header, scrollable(grid)].spacing(24))
        .padding(24)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
