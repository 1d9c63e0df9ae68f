//! Day/night themes and their color tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An RGB triple.
pub type Rgb = (u8, u8, u8);

const INK: Rgb = (10, 10, 20);
const PAPER: Rgb = (255, 255, 255);

/// The two named themes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Day,
    Night,
}

impl ThemeName {
    pub const ALL: [ThemeName; 2] = [ThemeName::Day, ThemeName::Night];

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Day => "day",
            ThemeName::Night => "night",
        }
    }

    /// Interpret a submitted settings value: only `"night"` selects night.
    pub fn from_submitted(value: &str) -> Self {
        if value == "night" {
            ThemeName::Night
        } else {
            ThemeName::Day
        }
    }

    /// The color tokens this theme sets.
    pub fn tokens(self) -> ColorTokens {
        match self {
            ThemeName::Day => ColorTokens {
                dark: INK,
                light: PAPER,
            },
            ThemeName::Night => ColorTokens {
                dark: PAPER,
                light: INK,
            },
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(ThemeName::Day),
            "night" => Ok(ThemeName::Night),
            _ => Err("unknown theme"),
        }
    }
}

/// The `dark` and `light` reference colors. Night swaps the day values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTokens {
    pub dark: Rgb,
    pub light: Rgb,
}

impl ColorTokens {
    /// Tokens formatted as `"r, g, b"`.
    pub fn css_values(&self) -> (String, String) {
        let fmt = |(r, g, b): Rgb| format!("{r}, {g}, {b}");
        (fmt(self.dark), fmt(self.light))
    }
}

impl Default for ColorTokens {
    fn default() -> Self {
        ThemeName::Day.tokens()
    }
}

/// Startup theme choice from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the environment's dark-mode hint.
    #[default]
    System,
    Day,
    Night,
}

impl ThemePreference {
    /// Resolve to a concrete theme, reading the environment once for `System`.
    pub fn resolve(self) -> ThemeName {
        match self {
            ThemePreference::Day => ThemeName::Day,
            ThemePreference::Night => ThemeName::Night,
            ThemePreference::System => {
                if system_prefers_dark() {
                    ThemeName::Night
                } else {
                    ThemeName::Day
                }
            }
        }
    }
}

/// Whether the environment asks for a dark color scheme.
///
/// Checks `FOLIO_THEME` (`night`/`dark` vs `day`/`light`) first, then the
/// background index in `COLORFGBG`.
pub fn system_prefers_dark() -> bool {
    prefers_dark_from(
        std::env::var("FOLIO_THEME").ok().as_deref(),
        std::env::var("COLORFGBG").ok().as_deref(),
    )
}

fn prefers_dark_from(folio_theme: Option<&str>, colorfgbg: Option<&str>) -> bool {
    if let Some(value) = folio_theme {
        match value.trim().to_ascii_lowercase().as_str() {
            "night" | "dark" => return true,
            "day" | "light" => return false,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg" or "fg;default;bg"; the last field is the background.
    colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok())
        .map(|bg| bg <= 6 || bg == 8)
        .unwrap_or(false)
}
