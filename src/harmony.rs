use crate::phonemes::lookup_profile;

/// Ratio of the lower to the higher characteristic frequency of two
/// phonemes. 1.0 for identical pitches, approaching 0 as they spread apart,
/// and exactly 0 when either symbol is unknown.
///
/// Only the raw frequencies participate. This is a rough consonance proxy,
/// not a model of perceived harmony.
pub fn harmony_of(first: &str, second: &str) -> f64 {
    let (Some(first), Some(second)) = (lookup_profile(first), lookup_profile(second)) else {
        return 0.0;
    };

    first.frequency.min(second.frequency) / first.frequency.max(second.frequency)
}
