//! Palette derived from the active theme's color tokens.

use folio_core::theme::{ColorTokens, Rgb};
use ratatui::style::Color;

/// Primary - Amber/Orange (warm, easy on eyes)
pub const PRIMARY: Color = Color::Rgb(255, 179, 71); // #FFB347 - Amber

/// Accent - Cyan (for highlights)
pub const ACCENT: Color = Color::Rgb(38, 166, 170); // #26A6AA - Teal, readable on both themes

/// Colors used by the renderer.
///
/// Text uses the `dark` token and surfaces use the `light` token; the
/// in-between shades are blends of the two, so the night theme inverts
/// everything at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub surface: Color,
    pub elevated: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub border: Color,
}

impl Palette {
    pub fn from_tokens(tokens: ColorTokens) -> Self {
        let mix = |amount: f32| rgb(blend(tokens.light, tokens.dark, amount));
        Self {
            bg: rgb(tokens.light),
            surface: mix(0.05),
            elevated: mix(0.12),
            text: rgb(tokens.dark),
            text_secondary: mix(0.65),
            text_muted: mix(0.45),
            border: mix(0.25),
        }
    }
}

fn rgb((r, g, b): Rgb) -> Color {
    Color::Rgb(r, g, b)
}

/// Linear blend from `from` toward `to`; `amount` 0.0 is `from`, 1.0 is `to`.
fn blend(from: Rgb, to: Rgb, amount: f32) -> Rgb {
    let channel = |a: u8, b: u8| {
        let value = a as f32 + (b as f32 - a as f32) * amount;
        value.round().clamp(0.0, 255.0) as u8
    };
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::ThemeName;

    #[test]
    fn palette_follows_tokens() {
        let day = Palette::from_tokens(ThemeName::Day.tokens());
        assert_eq!(day.text, Color::Rgb(10, 10, 20));
        assert_eq!(day.bg, Color::Rgb(255, 255, 255));

        let night = Palette::from_tokens(ThemeName::Night.tokens());
        assert_eq!(night.text, Color::Rgb(255, 255, 255));
        assert_eq!(night.bg, Color::Rgb(10, 10, 20));
    }

    #[test]
    fn blend_endpoints() {
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.0), (0, 0, 0));
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 1.0), (200, 100, 50));
        assert_eq!(blend((0, 0, 0), (200, 100, 50), 0.5), (100, 50, 25));
    }
}
