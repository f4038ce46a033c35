/// Clock card view layer - pure rendering, no business logic
use iced::{
    Alignment, Background, Border, Color, Element, Font, Length, Theme,
    widget::{column, container, row, text},
};
use worldclock_core::{
    clock::{ClockDisplay, DayPhase, FieldRole, PLACEHOLDER},
    style::card_colors,
};
use worldclock_proto::{config::Appearance, theme::ThemeMode};

use crate::app::Message;

const CARD_WIDTH: f32 = 220.0;
const TIME_SIZE: u16 = 30;

fn field(display: &ClockDisplay, role: FieldRole, size: u16) -> Element<'_, Message> {
    text(display.field(role)).size(size).font(Font::MONOSPACE).into()
}

fn weekday_label(display: &ClockDisplay) -> String {
    format!("{},", display.field(FieldRole::Weekday))
}

fn phase_label(phase: Option<DayPhase>) -> &'static str {
    match phase {
        Some(DayPhase::Day) => "☀ Day",
        Some(DayPhase::Night) => "☾ Night",
        None => PLACEHOLDER,
    }
}

/// Renders one clock card; colors follow the display's day/night flag.
pub fn render_clock<'a>(
    display: &'a ClockDisplay,
    appearance: &Appearance,
    mode: ThemeMode,
) -> Element<'a, Message> {
    let colors = card_colors(appearance, mode, display.phase());
    let entry = display.entry();

    let header = column![text(entry.city).size(20), text(entry.country).size(14)].spacing(2);

    let time = row![
        field(display, FieldRole::Hour, TIME_SIZE),
        text(":").size(TIME_SIZE),
        field(display, FieldRole::Minute, TIME_SIZE),
        text(":").size(TIME_SIZE),
        field(display, FieldRole::Second, TIME_SIZE),
        field(display, FieldRole::AmPm, 16),
    ]
    .spacing(2)
    .align_y(Alignment::End);

    let date = row![
        text(weekday_label(display)).size(14).font(Font::MONOSPACE),
        field(display, FieldRole::Day, 14),
        field(display, FieldRole::Month, 14),
        field(display, FieldRole::Year, 14),
    ]
    .spacing(4);

    let content = column![
        header,
        time,
        date,
        text(phase_label(display.phase())).size(12)
    ]
    .spacing(8);

    container(content)
        .padding(16)
        .width(Length::Fixed(CARD_WIDTH))
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(colors.background)),
            text_color: Some(colors.text),
            border: Border {
                width:  0.0,
                radius: 12.0.into(),
                color:  Color::TRANSPARENT,
            },
            ..container::Style::default()
        })
        .into()
}
