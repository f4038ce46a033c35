use hex_color::HexColor;
use iced::Color;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::theme::ThemeMode;

/// A configured color, optionally paired with the text color drawn on top.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(untagged)]
pub enum AppearanceColor {
    /// Simple color variant with a single hex value.
    Simple(HexColor),
    /// Base color with an explicit foreground.
    Complete {
        base: HexColor,
        text: Option<HexColor>
    }
}

impl AppearanceColor {
    /// Returns the base [`Color`].
    #[must_use]
    pub fn get_base(&self) -> Color {
        match self {
            AppearanceColor::Simple(color) => Color::from_rgb8(color.r, color.g, color.b),
            AppearanceColor::Complete {
                base, ..
            } => Color::from_rgb8(base.r, base.g, base.b)
        }
    }

    /// Returns the text [`Color`] if configured.
    #[must_use]
    pub fn get_text(&self) -> Option<Color> {
        match self {
            AppearanceColor::Simple(_) => None,
            AppearanceColor::Complete {
                text, ..
            } => text.map(|color| Color::from_rgb8(color.r, color.g, color.b))
        }
    }
}

/// Colors used while one [`ThemeMode`] is active.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ThemePalette {
    pub background: AppearanceColor,
    pub text:       AppearanceColor,
    pub primary:    AppearanceColor,
    /// Card background for clocks classified as day.
    pub card_day:   AppearanceColor,
    /// Card background for clocks classified as night.
    pub card_night: AppearanceColor
}

impl ThemePalette {
    pub fn light() -> Self {
        Self {
            background: AppearanceColor::Simple(HexColor::rgb(244, 245, 247)),
            text:       AppearanceColor::Simple(HexColor::rgb(30, 30, 46)),
            primary:    AppearanceColor::Simple(HexColor::rgb(30, 102, 245)),
            card_day:   AppearanceColor::Complete {
                base: HexColor::rgb(254, 243, 199),
                text: Some(HexColor::rgb(30, 30, 46))
            },
            card_night: AppearanceColor::Complete {
                base: HexColor::rgb(30, 41, 59),
                text: Some(HexColor::rgb(226, 232, 240))
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            background: AppearanceColor::Simple(HexColor::rgb(17, 17, 27)),
            text:       AppearanceColor::Simple(HexColor::rgb(205, 214, 244)),
            primary:    AppearanceColor::Simple(HexColor::rgb(137, 180, 250)),
            card_day:   AppearanceColor::Complete {
                base: HexColor::rgb(49, 50, 68),
                text: Some(HexColor::rgb(249, 226, 175))
            },
            card_night: AppearanceColor::Complete {
                base: HexColor::rgb(24, 24, 37),
                text: Some(HexColor::rgb(180, 190, 254))
            }
        }
    }
}

/// Top-level appearance configuration.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Appearance {
    #[serde(
        deserialize_with = "scale_factor_deserializer",
        default = "default_scale_factor"
    )]
    pub scale_factor: f64,
    #[serde(default = "ThemePalette::light")]
    pub light:        ThemePalette,
    #[serde(default = "ThemePalette::dark")]
    pub dark:         ThemePalette
}

impl Appearance {
    /// Palette for the given mode.
    #[must_use]
    pub fn palette(&self, mode: ThemeMode) -> &ThemePalette {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark
        }
    }
}

fn scale_factor_deserializer<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>
{
    let value = f64::deserialize(deserializer)?;

    if value <= 0.0 {
        return Err(D::Error::custom("Scale factor must be greater than 0.0"));
    }

    if value > 2.0 {
        return Err(D::Error::custom("Scale factor cannot be greater than 2.0"));
    }

    Ok(value)
}

fn default_scale_factor() -> f64 {
    1.0
}

impl Default for Appearance {
    fn default() -> Self {
        Self {
            scale_factor: default_scale_factor(),
            light:        ThemePalette::light(),
            dark:         ThemePalette::dark()
        }
    }
}
