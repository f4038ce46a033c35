use iced::{Color, Theme, theme::Palette};
use worldclock_proto::{config::Appearance, theme::ThemeMode};

use crate::clock::DayPhase;

/// Builds the window theme for `mode` from the configured palettes.
///
/// The card colors double as the success/danger slots so that stock widgets
/// pick up the same accents as the clock cards.
#[must_use]
pub fn worldclock_theme(appearance: &Appearance, mode: ThemeMode) -> Theme {
    let palette = appearance.palette(mode);

    Theme::custom(
        format!("worldclock-{mode}"),
        Palette {
            background: palette.background.get_base(),
            text:       palette.text.get_base(),
            primary:    palette.primary.get_base(),
            success:    palette.card_day.get_base(),
            danger:     palette.card_night.get_base()
        }
    )
}

/// Background and foreground of one clock card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardColors {
    pub background: Color,
    pub text:       Color
}

/// Card colors for a display in the given phase; displays without a phase
/// blend into the window background.
#[must_use]
pub fn card_colors(appearance: &Appearance, mode: ThemeMode, phase: Option<DayPhase>) -> CardColors {
    let palette = appearance.palette(mode);
    let color = match phase {
        Some(DayPhase::Day) => &palette.card_day,
        Some(DayPhase::Night) => &palette.card_night,
        None => &palette.background
    };

    CardColors {
        background: color.get_base(),
        text:       color.get_text().unwrap_or_else(|| palette.text.get_base())
    }
}

#[cfg(test)]
mod tests {
    use hex_color::HexColor;
    use worldclock_proto::config::AppearanceColor;

    use super::*;

    #[test]
    fn theme_uses_palette_of_active_mode() {
        let appearance = Appearance::default();
        let theme = worldclock_theme(&appearance, ThemeMode::Dark);

        assert_eq!(theme.palette().background, appearance.dark.background.get_base());
        assert_eq!(theme.palette().text, appearance.dark.text.get_base());
    }

    #[test]
    fn card_colors_follow_day_phase() {
        let appearance = Appearance::default();

        let day = card_colors(&appearance, ThemeMode::Light, Some(DayPhase::Day));
        let night = card_colors(&appearance, ThemeMode::Light, Some(DayPhase::Night));

        assert_eq!(day.background, appearance.light.card_day.get_base());
        assert_eq!(night.background, appearance.light.card_night.get_base());
        assert_ne!(day.background, night.background);
    }

    #[test]
    fn card_text_falls_back_to_palette_text() {
        let mut appearance = Appearance::default();
        appearance.dark.card_night = AppearanceColor::Simple(HexColor::rgb(1, 2, 3));

        let colors = card_colors(&appearance, ThemeMode::Dark, Some(DayPhase::Night));
        assert_eq!(colors.text, appearance.dark.text.get_base());

        let unset = card_colors(&appearance, ThemeMode::Dark, None);
        assert_eq!(unset.background, appearance.dark.background.get_base());
    }
}
