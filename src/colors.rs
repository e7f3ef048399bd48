use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use palette::{Clamp, FromColor, Oklab, Oklch, Srgb};
use tracing::{debug, trace};

use crate::error::Error;
use crate::phonemes::{lookup_profile, profiles, AcousticProfile};
use crate::spectrum::{frequency_to_wavelength, wavelength_to_rgb};

/// How far `highlight` moves each channel towards white.
pub const HIGHLIGHT_AMOUNT: f64 = 0.3;

/// Color derived for a phoneme. Displays as lowercase `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SoundColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Returned for symbols outside the table.
pub const FALLBACK: SoundColor = SoundColor::new(0, 0, 0);

impl SoundColor {
    pub const fn new(red: u8, green: u8, blue: u8) -> SoundColor {
        SoundColor { red, green, blue }
    }

    pub fn to_srgb(self) -> Srgb<u8> {
        Srgb::new(self.red, self.green, self.blue)
    }

    pub fn to_oklch(self) -> Oklch {
        Oklch::from_color(self.to_srgb().into_format::<f32>())
    }

    /// Converts back to 8-bit sRGB, clamping anything outside the gamut.
    pub fn from_oklch(color: Oklch) -> SoundColor {
        let rgb: Srgb = Srgb::from_color(color);
        rgb.clamp().into_format::<u8>().into()
    }

    /// Lighter companion swatch: every channel moved 30% of the way to white.
    pub fn highlight(self) -> SoundColor {
        let lift = |channel: u8| {
            let channel = channel as f64;
            (channel + (255.0 - channel) * HIGHLIGHT_AMOUNT).round().min(255.0) as u8
        };

        SoundColor::new(lift(self.red), lift(self.green), lift(self.blue))
    }

    fn to_oklab(self) -> Oklab {
        Oklab::from_color(self.to_srgb().into_format::<f32>())
    }
}

impl From<Srgb<u8>> for SoundColor {
    fn from(color: Srgb<u8>) -> Self {
        let (red, green, blue) = color.into_components();
        SoundColor::new(red, green, blue)
    }
}

impl fmt::Display for SoundColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

impl FromStr for SoundColor {
    type Err = Error;

    /// Accepts `#rrggbb` and `#rgb`, with or without the `#`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidColor(s.to_string());

        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());

        match hex.len() {
            6 => Ok(SoundColor::new(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
            3 => Ok(SoundColor::new(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            _ => Err(invalid()),
        }
    }
}

impl serde::Serialize for SoundColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// Color of a profile: spectral color of its frequency, darkened by
/// `brightness` and then pulled towards its gray level by `saturation`.
pub fn adjust(profile: &AcousticProfile) -> SoundColor {
    let wavelength = frequency_to_wavelength(profile.frequency);
    let (red, green, blue) = wavelength_to_rgb(wavelength).into_components();

    let mut channels = [red as f64, green as f64, blue as f64];

    if let Some(brightness) = profile.brightness {
        for channel in channels.iter_mut() {
            *channel *= brightness;
        }
    }

    // Gray level is taken after brightness so the two compose in order
    if let Some(saturation) = profile.saturation {
        let mean = channels.iter().sum::<f64>() / 3.0;
        for channel in channels.iter_mut() {
            *channel = mean + (*channel - mean) * saturation;
        }
    }

    let [red, green, blue] = channels.map(|channel| channel.round().clamp(0.0, 255.0) as u8);
    let color = SoundColor::new(red, green, blue);

    trace!(symbol = profile.symbol, wavelength, %color, "derived color");

    color
}

/// Color for `symbol`. Unknown symbols get black rather than an error.
pub fn color_of(symbol: &str) -> SoundColor {
    match lookup_profile(symbol) {
        Some(profile) => adjust(profile),
        None => {
            debug!(symbol, "unknown phoneme, using fallback color");
            FALLBACK
        }
    }
}

/// The table phoneme whose color is perceptually closest to `color`.
/// Phonemes sharing a color resolve to the one presented first.
pub fn nearest_phoneme(color: SoundColor) -> Option<&'static AcousticProfile> {
    let target = color.to_oklab();

    let distance = |profile: &AcousticProfile| {
        let candidate = adjust(profile).to_oklab();
        (candidate.l - target.l).powi(2) + (candidate.a - target.a).powi(2) + (candidate.b - target.b).powi(2)
    };

    profiles()
        .map(|profile| (profile, distance(profile)))
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .map(|(profile, _)| profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phonemes::Articulation;

    #[test]
    fn test_vowel_golden_colors() {
        assert_eq!(color_of("i").to_string(), "#cd5d15");
        assert_eq!(color_of("e").to_string(), "#bf7e1d");
        assert_eq!(color_of("a").to_string(), "#6bc20a");
        assert_eq!(color_of("o").to_string(), "#2bae0b");
        assert_eq!(color_of("u").to_string(), "#4a11a0");
    }

    #[test]
    fn test_consonants_use_unadjusted_spectral_color() {
        assert_eq!(color_of("p").to_string(), "#00b2ff");
        assert_eq!(color_of("t").to_string(), "#ff0000");
        assert_eq!(color_of("k").to_string(), "#fff800");
        assert_eq!(color_of("s").to_string(), "#c10000");
        assert_eq!(color_of("f").to_string(), "#610000");
        assert_eq!(color_of("h").to_string(), "#ff0000");
        assert_eq!(color_of("m").to_string(), "#8300be");
        assert_eq!(color_of("n").to_string(), "#610061");
        assert_eq!(color_of("ŋ").to_string(), "#610061");
        assert_eq!(color_of("r").to_string(), "#c2ff00");
    }

    #[test]
    fn test_unknown_symbol_is_black() {
        assert_eq!(color_of("x"), FALLBACK);
        assert_eq!(color_of("").to_string(), "#000000");
    }

    fn red(brightness: Option<f64>, saturation: Option<f64>) -> AcousticProfile {
        // 4000 Hz sits in the red band at full intensity: base #ff0000
        AcousticProfile {
            brightness,
            saturation,
            ..AcousticProfile::base("t", Articulation::Stop, 4000.0)
        }
    }

    #[test]
    fn test_oversaturation_is_clamped() {
        // Red swings to 425 and green/blue to -85 before clamping
        assert_eq!(adjust(&red(None, Some(2.0))).to_string(), "#ff0000");
        assert_eq!(adjust(&red(Some(1.0), Some(3.0))).to_string(), "#ff0000");
    }

    #[test]
    fn test_brightness_alone_darkens() {
        assert_eq!(adjust(&red(Some(0.5), None)).to_string(), "#800000");
    }

    #[test]
    fn test_saturation_alone_pulls_towards_gray() {
        // Gray level of #ff0000 is 85
        assert_eq!(adjust(&red(None, Some(0.5))).to_string(), "#aa2b2b");
        assert_eq!(adjust(&red(None, Some(0.0))).to_string(), "#555555");
    }

    #[test]
    fn test_zero_brightness_differs_from_absent() {
        assert_eq!(adjust(&red(Some(0.0), None)).to_string(), "#000000");
        assert_eq!(adjust(&red(None, None)).to_string(), "#ff0000");
    }

    #[test]
    fn test_display_pads_channels() {
        assert_eq!(SoundColor::new(0, 10, 255).to_string(), "#000aff");
    }

    #[test]
    fn test_highlight_lifts_towards_white() {
        // The first two pairs are base/highlight swatches of the vowel palette
        let pairs = [
            ("#00bfff", "#4dd2ff"),
            ("#fbff00", "#fcff4d"),
            ("#000000", "#4d4d4d"),
        ];

        for (base, highlight) in pairs {
            let base: SoundColor = base.parse().unwrap();
            assert_eq!(base.highlight().to_string(), highlight, "highlight of {base}");
        }

        assert_eq!(SoundColor::new(255, 255, 255).highlight(), SoundColor::new(255, 255, 255));
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("#cd5d15".parse::<SoundColor>().unwrap(), SoundColor::new(205, 93, 21));
        assert_eq!("#fff".parse::<SoundColor>().unwrap(), SoundColor::new(255, 255, 255));
        assert!(matches!("#12345".parse::<SoundColor>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#gggggg".parse::<SoundColor>(), Err(Error::InvalidColor(_))));
        assert!(matches!("#+fffff".parse::<SoundColor>(), Err(Error::InvalidColor(_))));
    }

    #[test]
    fn test_oklch_round_trip_stays_close() {
        for profile in profiles() {
            let color = adjust(profile);
            let back = SoundColor::from_oklch(color.to_oklch());
            for (a, b) in [(color.red, back.red), (color.green, back.green), (color.blue, back.blue)] {
                assert!(a.abs_diff(b) <= 1, "{} drifted to {} for {}", color, back, profile.symbol);
            }
        }
    }

    #[test]
    fn test_nearest_phoneme_finds_own_color() {
        let nearest = |color| nearest_phoneme(color).map(|profile| profile.symbol);

        assert_eq!(nearest(color_of("u")), Some("u"));
        assert_eq!(nearest(color_of("i")), Some("i"));
        // p and b share a color, p is presented first
        assert_eq!(nearest(color_of("b")), Some("p"));
        assert_eq!(nearest(SoundColor::new(250, 0, 0)), Some("t"));
    }

    #[test]
    fn test_serializes_as_hex_string() {
        let json = serde_json::to_string(&color_of("i")).unwrap();
        assert_eq!(json, "\"#cd5d15\"");
    }
}
