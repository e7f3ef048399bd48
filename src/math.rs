pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Lerp across the shorter arc between two hues in degrees.
pub fn lerp_hue(from: f32, to: f32, t: f32) -> f32 {
    let mut delta = (to - from) % 360.0;

    if delta > 180.0 {
        delta -= 360.0;
    } else if delta < -180.0 {
        delta += 360.0;
    }

    (from + delta * t).rem_euclid(360.0)
}
