//! Appearance tables for keypad buttons.

use numkey_core::{Color, InterfaceIdiom};
use serde::{Deserialize, Serialize};

pub const DIGIT_FONT_SIZE: f32 = 28.0;
pub const DONE_FONT_SIZE: f32 = 17.0;
pub const PAD_CORNER_RADIUS: f32 = 4.0;
pub const PAD_SHADOW_OFFSET: f32 = 1.0;

/// Visual style of a keypad button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonStyle {
    /// Plain keys such as the digits.
    #[default]
    White,
    /// Muted utility keys such as backspace.
    Gray,
    /// Emphasized key that completes editing.
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub fill: Color,
    pub control: Color,
}

impl ButtonStyle {
    pub fn fill_color(self, idiom: InterfaceIdiom) -> Color {
        match self {
            ButtonStyle::White => Color::WHITE,
            ButtonStyle::Gray => match idiom {
                InterfaceIdiom::Pad => Color::from_rgb_f32(0.674, 0.7, 0.744, 1.0),
                InterfaceIdiom::Phone => Color::from_rgb_f32(0.81, 0.837, 0.86, 1.0),
            },
            ButtonStyle::Done => Color::from_rgb_f32(0.0, 0.479, 1.0, 1.0),
        }
    }

    pub fn highlighted_fill_color(self) -> Color {
        match self {
            ButtonStyle::White => Color::from_rgb_f32(0.82, 0.837, 0.863, 1.0),
            ButtonStyle::Gray | ButtonStyle::Done => Color::WHITE,
        }
    }

    pub fn control_color(self) -> Color {
        match self {
            ButtonStyle::Done => Color::WHITE,
            _ => Color::BLACK,
        }
    }

    pub fn highlighted_control_color(self) -> Color {
        Color::BLACK
    }

    pub fn appearance(self, highlighted: bool, idiom: InterfaceIdiom) -> Appearance {
        if highlighted {
            Appearance {
                fill: self.highlighted_fill_color(),
                control: self.highlighted_control_color(),
            }
        } else {
            Appearance {
                fill: self.fill_color(idiom),
                control: self.control_color(),
            }
        }
    }
}

/// Drop shadow under pad keys.
pub fn pad_shadow_color() -> Color {
    Color::from_rgb_f32(0.533, 0.541, 0.556, 1.0)
}

/// Hairline separators between phone keys.
pub fn separator_color() -> Color {
    Color(0, 0, 0, 26)
}
