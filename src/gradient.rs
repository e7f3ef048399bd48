use std::fmt;
use std::str::FromStr;

use palette::Oklch;
use serde_derive::Serialize;

use crate::colors::{color_of, SoundColor};
use crate::error::Error;
use crate::math::{lerp, lerp_hue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    ToRight,
    ToLeft,
    ToTop,
    ToBottom,
}

impl Direction {
    pub fn as_css(&self) -> &'static str {
        match self {
            Direction::ToRight => "to right",
            Direction::ToLeft => "to left",
            Direction::ToTop => "to top",
            Direction::ToBottom => "to bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        let side = normalized.strip_prefix("to ").unwrap_or(normalized.as_str()).trim();

        match side {
            "right" => Ok(Direction::ToRight),
            "left" => Ok(Direction::ToLeft),
            "top" => Ok(Direction::ToTop),
            "bottom" => Ok(Direction::ToBottom),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl serde::Serialize for Direction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_css())
    }
}

/// Two-stop linear gradient between the colors of two phonemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Gradient {
    pub from: SoundColor,
    pub to: SoundColor,
    pub direction: Direction,
}

impl Gradient {
    pub fn new(from: SoundColor, to: SoundColor, direction: Direction) -> Gradient {
        Gradient { from, to, direction }
    }

    /// CSS `linear-gradient(...)` value.
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Color at position `t` along the gradient, interpolated in Oklch.
    /// `t` is clamped to [0, 1] and the end points return the stops exactly.
    pub fn sample(&self, t: f32) -> SoundColor {
        let t = t.clamp(0.0, 1.0);

        if t == 0.0 {
            return self.from;
        }
        if t == 1.0 {
            return self.to;
        }

        let from = self.from.to_oklch();
        let to = self.to.to_oklch();

        // Achromatic stops have no meaningful hue, borrow the other one
        let from_hue = if from.chroma > f32::EPSILON { from.hue } else { to.hue };
        let to_hue = if to.chroma > f32::EPSILON { to.hue } else { from_hue };

        let color = Oklch::new(
            lerp(from.l, to.l, t),
            lerp(from.chroma, to.chroma, t),
            lerp_hue(from_hue.into_raw_degrees(), to_hue.into_raw_degrees(), t),
        );

        SoundColor::from_oklch(color)
    }
}

impl fmt::Display for Gradient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "linear-gradient({}, {}, {})", self.direction, self.from, self.to)
    }
}

/// Left-to-right gradient from the color of `first` to the color of `second`.
pub fn gradient_of(first: &str, second: &str) -> Gradient {
    gradient_with(first, second, Direction::default())
}

pub fn gradient_with(first: &str, second: &str, direction: Direction) -> Gradient {
    Gradient::new(color_of(first), color_of(second), direction)
}
