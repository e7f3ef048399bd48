use palette::Srgb;

pub const MIN_FREQUENCY: f64 = 200.0;
pub const MAX_FREQUENCY: f64 = 8000.0;

pub const MIN_WAVELENGTH: f64 = 380.0;
pub const MAX_WAVELENGTH: f64 = 750.0;

pub const GAMMA: f64 = 0.8;

/// Maps a frequency in Hz onto the visible band in nanometers.
///
/// The mapping is logarithmic: 200 Hz lands on 380 nm and 8000 Hz on 750 nm.
/// Frequencies outside that range extrapolate past the visible band instead
/// of failing. Non-positive frequencies have no meaningful wavelength.
pub fn frequency_to_wavelength(frequency: f64) -> f64 {
    let log_frequency = frequency.ln();
    let log_min = MIN_FREQUENCY.ln();
    let log_max = MAX_FREQUENCY.ln();

    MIN_WAVELENGTH + (MAX_WAVELENGTH - MIN_WAVELENGTH) * (log_frequency - log_min) / (log_max - log_min)
}

/// Sub-range of the visible spectrum with its own linear channel formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Violet,
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
}

impl Band {
    /// Band containing `wavelength`, or `None` outside 380-750 nm.
    pub fn of(wavelength: f64) -> Option<Band> {
        match wavelength {
            w if (380.0..440.0).contains(&w) => Some(Band::Violet),
            w if (440.0..490.0).contains(&w) => Some(Band::Blue),
            w if (490.0..510.0).contains(&w) => Some(Band::Cyan),
            w if (510.0..580.0).contains(&w) => Some(Band::Green),
            w if (580.0..645.0).contains(&w) => Some(Band::Yellow),
            w if (645.0..=750.0).contains(&w) => Some(Band::Red),
            _ => None,
        }
    }

    /// Linear (red, green, blue) in [0, 1] before intensity and gamma.
    pub fn channels(&self, wavelength: f64) -> (f64, f64, f64) {
        match self {
            Band::Violet => (-(wavelength - 440.0) / (440.0 - 380.0), 0.0, 1.0),
            Band::Blue => (0.0, (wavelength - 440.0) / (490.0 - 440.0), 1.0),
            Band::Cyan => (0.0, 1.0, -(wavelength - 510.0) / (510.0 - 490.0)),
            Band::Green => ((wavelength - 510.0) / (580.0 - 510.0), 1.0, 0.0),
            Band::Yellow => (1.0, -(wavelength - 645.0) / (645.0 - 580.0), 0.0),
            Band::Red => (1.0, 0.0, 0.0),
        }
    }
}

/// Fades the violet and deep red ends of the spectrum down to 30%.
pub fn intensity_factor(wavelength: f64) -> f64 {
    if (380.0..420.0).contains(&wavelength) {
        0.3 + 0.7 * (wavelength - 380.0) / (420.0 - 380.0)
    } else if (420.0..=700.0).contains(&wavelength) {
        1.0
    } else if wavelength > 700.0 && wavelength <= 750.0 {
        0.3 + 0.7 * (750.0 - wavelength) / (750.0 - 700.0)
    } else {
        0.0
    }
}

/// Approximate sRGB color of light at `wavelength` nm. Black outside the
/// visible band.
pub fn wavelength_to_rgb(wavelength: f64) -> Srgb<u8> {
    let Some(band) = Band::of(wavelength) else {
        return Srgb::new(0, 0, 0);
    };

    let (red, green, blue) = band.channels(wavelength);
    let factor = intensity_factor(wavelength);

    let convert = |value: f64| (255.0 * (value * factor).powf(GAMMA)).round() as u8;

    Srgb::new(convert(red), convert(green), convert(blue))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(wavelength: f64) -> (u8, u8, u8) {
        wavelength_to_rgb(wavelength).into_components()
    }

    #[test]
    fn test_band_edges_map_to_band_ends() {
        assert_eq!(frequency_to_wavelength(MIN_FREQUENCY), MIN_WAVELENGTH);
        assert_eq!(frequency_to_wavelength(MAX_FREQUENCY), MAX_WAVELENGTH);
    }

    #[test]
    fn test_wavelength_is_logarithmic() {
        // 200 * sqrt(40) is the geometric midpoint of the acoustic band
        let midpoint = frequency_to_wavelength((MIN_FREQUENCY * MAX_FREQUENCY).sqrt());
        assert!((midpoint - 565.0).abs() < 1e-9, "midpoint was {midpoint}");

        let wavelength = frequency_to_wavelength(2300.0);
        assert!((wavelength - 624.971).abs() < 0.001, "got {wavelength}");
    }

    #[test]
    fn test_wavelength_strictly_increasing() {
        let mut previous = frequency_to_wavelength(199.0);
        for frequency in (200..=8000).step_by(50) {
            let wavelength = frequency_to_wavelength(frequency as f64);
            assert!(wavelength > previous, "not increasing at {frequency} Hz");
            previous = wavelength;
        }
    }

    #[test]
    fn test_out_of_band_frequency_extrapolates() {
        assert!(frequency_to_wavelength(100.0) < MIN_WAVELENGTH);
        assert!(frequency_to_wavelength(16000.0) > MAX_WAVELENGTH);
    }

    #[test]
    fn test_band_lookup() {
        assert_eq!(Band::of(379.9), None);
        assert_eq!(Band::of(380.0), Some(Band::Violet));
        assert_eq!(Band::of(440.0), Some(Band::Blue));
        assert_eq!(Band::of(490.0), Some(Band::Cyan));
        assert_eq!(Band::of(500.0), Some(Band::Cyan));
        assert_eq!(Band::of(510.0), Some(Band::Green));
        assert_eq!(Band::of(580.0), Some(Band::Yellow));
        assert_eq!(Band::of(645.0), Some(Band::Red));
        assert_eq!(Band::of(750.0), Some(Band::Red));
        assert_eq!(Band::of(750.1), None);
    }

    #[test]
    fn test_intensity_factor_branches() {
        assert!((intensity_factor(380.0) - 0.3).abs() < 1e-12);
        assert!((intensity_factor(400.0) - 0.65).abs() < 1e-12);
        assert_eq!(intensity_factor(420.0), 1.0);
        assert_eq!(intensity_factor(700.0), 1.0);
        assert!((intensity_factor(725.0) - 0.65).abs() < 1e-12);
        assert!((intensity_factor(750.0) - 0.3).abs() < 1e-12);
        assert_eq!(intensity_factor(379.0), 0.0);
        assert_eq!(intensity_factor(751.0), 0.0);
    }

    #[test]
    fn test_known_wavelengths() {
        assert_eq!(rgb(400.0), (131, 0, 181));
        assert_eq!(rgb(490.0), (0, 255, 255));
        assert_eq!(rgb(500.0), (0, 255, 146));
        assert_eq!(rgb(510.0), (0, 255, 0));
        assert_eq!(rgb(600.0), (255, 190, 0));
        assert_eq!(rgb(725.0), (181, 0, 0));
        assert_eq!(rgb(380.0), (97, 0, 97));
        assert_eq!(rgb(750.0), (97, 0, 0));
    }

    #[test]
    fn test_outside_visible_band_is_black() {
        assert_eq!(rgb(379.0), (0, 0, 0));
        assert_eq!(rgb(751.0), (0, 0, 0));
        assert_eq!(rgb(f64::NAN), (0, 0, 0));
    }

    #[test]
    fn test_blue_channel_falls_through_cyan_band() {
        let mut previous = rgb(490.0).2;
        for step in 1..=20 {
            let blue = rgb(490.0 + step as f64).2;
            assert!(blue <= previous, "blue rose at {} nm", 490 + step);
            previous = blue;
        }
        assert_eq!(previous, 0);
    }
}
