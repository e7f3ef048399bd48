use std::collections::HashMap;
use std::sync::LazyLock;

use serde_derive::Serialize;

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Articulation {
    Vowel,
    Stop,
    Fricative,
    Nasal,
    Liquid,
}

/// Descriptive only, nothing in the color math reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Duration {
    Short,
    Medium,
    Long,
}

/// Acoustic properties of one phoneme.
///
/// `frequency` is always present. Every modifier is optional and an absent
/// modifier means "leave the color alone", not zero. Profiles only come
/// from the table in this module.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[non_exhaustive]
pub struct AcousticProfile {
    pub symbol: &'static str,
    pub class: Articulation,
    /// Characteristic frequency in Hz.
    pub frequency: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formants: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brightness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saturation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharpness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turbulence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resonance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fluidity: Option<f64>,
}

impl AcousticProfile {
    pub(crate) const fn base(symbol: &'static str, class: Articulation, frequency: f64) -> AcousticProfile {
        AcousticProfile {
            symbol,
            class,
            frequency,
            formants: None,
            duration: None,
            brightness: None,
            saturation: None,
            intensity: None,
            sharpness: None,
            turbulence: None,
            resonance: None,
            flow: None,
            fluidity: None,
        }
    }

    const fn vowel(
        symbol: &'static str,
        frequency: f64,
        formants: [f64; 2],
        brightness: f64,
        saturation: f64,
    ) -> AcousticProfile {
        AcousticProfile {
            formants: Some(formants),
            brightness: Some(brightness),
            saturation: Some(saturation),
            ..AcousticProfile::base(symbol, Articulation::Vowel, frequency)
        }
    }

    const fn stop(symbol: &'static str, frequency: f64, intensity: f64, sharpness: f64) -> AcousticProfile {
        AcousticProfile {
            duration: Some(Duration::Short),
            intensity: Some(intensity),
            sharpness: Some(sharpness),
            ..AcousticProfile::base(symbol, Articulation::Stop, frequency)
        }
    }

    const fn fricative(symbol: &'static str, frequency: f64, intensity: f64, turbulence: f64) -> AcousticProfile {
        AcousticProfile {
            duration: Some(Duration::Long),
            intensity: Some(intensity),
            turbulence: Some(turbulence),
            ..AcousticProfile::base(symbol, Articulation::Fricative, frequency)
        }
    }

    const fn nasal(symbol: &'static str, frequency: f64, resonance: f64, flow: f64) -> AcousticProfile {
        AcousticProfile {
            duration: Some(Duration::Medium),
            resonance: Some(resonance),
            flow: Some(flow),
            ..AcousticProfile::base(symbol, Articulation::Nasal, frequency)
        }
    }

    const fn liquid(symbol: &'static str, frequency: f64, fluidity: f64, resonance: f64) -> AcousticProfile {
        AcousticProfile {
            duration: Some(Duration::Medium),
            fluidity: Some(fluidity),
            resonance: Some(resonance),
            ..AcousticProfile::base(symbol, Articulation::Liquid, frequency)
        }
    }

    pub fn is_vowel(&self) -> bool {
        self.class == Articulation::Vowel
    }
}

pub const CONSONANTS: [&str; 16] = [
    "p", "b", "t", "d", "k", "g", "f", "v", "s", "z", "h", "m", "n", "ŋ", "l", "r",
];

pub const VOWELS: [&str; 5] = ["i", "e", "a", "o", "u"];

static PROFILES: [AcousticProfile; 21] = [
    AcousticProfile::vowel("i", 2300.0, [270.0, 2290.0], 0.9, 0.8),
    AcousticProfile::vowel("e", 2000.0, [390.0, 2300.0], 0.85, 0.75),
    AcousticProfile::vowel("a", 1000.0, [850.0, 1610.0], 0.8, 0.9),
    AcousticProfile::vowel("o", 800.0, [450.0, 800.0], 0.75, 0.85),
    AcousticProfile::vowel("u", 300.0, [310.0, 870.0], 0.7, 0.8),
    AcousticProfile::stop("p", 500.0, 0.9, 0.9),
    AcousticProfile::stop("b", 500.0, 0.8, 0.8),
    AcousticProfile::stop("t", 4000.0, 0.9, 0.95),
    AcousticProfile::stop("d", 4000.0, 0.8, 0.85),
    AcousticProfile::stop("k", 1500.0, 0.9, 0.8),
    AcousticProfile::stop("g", 1500.0, 0.8, 0.7),
    AcousticProfile::fricative("s", 6000.0, 0.7, 0.9),
    AcousticProfile::fricative("z", 6000.0, 0.6, 0.8),
    AcousticProfile::fricative("f", 8000.0, 0.6, 0.7),
    AcousticProfile::fricative("v", 8000.0, 0.5, 0.6),
    AcousticProfile::fricative("h", 3000.0, 0.4, 0.5),
    AcousticProfile::nasal("m", 250.0, 0.8, 0.7),
    AcousticProfile::nasal("n", 200.0, 0.7, 0.7),
    AcousticProfile::nasal("ŋ", 200.0, 0.6, 0.6),
    AcousticProfile::liquid("l", 250.0, 0.8, 0.7),
    AcousticProfile::liquid("r", 1200.0, 0.9, 0.8),
];

static INDEX: LazyLock<HashMap<&'static str, &'static AcousticProfile>> =
    LazyLock::new(|| PROFILES.iter().map(|profile| (profile.symbol, profile)).collect());

/// Returns the profile for `symbol`, or `None` if the symbol is not in the table.
pub fn lookup_profile(symbol: &str) -> Option<&'static AcousticProfile> {
    INDEX.get(symbol).copied()
}

pub fn require_profile(symbol: &str) -> Result<&'static AcousticProfile> {
    lookup_profile(symbol).ok_or_else(|| Error::UnknownPhoneme(symbol.to_string()))
}

/// All symbols, consonants first, in the order they are presented.
pub fn symbols() -> impl Iterator<Item = &'static str> {
    CONSONANTS.iter().chain(VOWELS.iter()).copied()
}

pub fn profiles() -> impl Iterator<Item = &'static AcousticProfile> {
    symbols().filter_map(lookup_profile)
}
