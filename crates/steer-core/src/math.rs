//! Small vector helpers shared by the behaviours.

use glam::Vec3;

/// Lengths at or below this are treated as zero when normalising.
pub const NORMALIZE_EPSILON: f32 = 1e-6;

/// Clamp `v` to at most `max_length`.
pub fn truncate(v: Vec3, max_length: f32) -> Vec3 {
    let max_length = max_length.max(0.0);
    let len = v.length();
    if len > max_length && len > NORMALIZE_EPSILON {
        v * (max_length / len)
    } else {
        v
    }
}

/// Unit vector along `v`, or `fallback` when `v` is zero-length or not finite.
pub fn direction_or(v: Vec3, fallback: Vec3) -> Vec3 {
    if !v.is_finite() {
        return fallback;
    }
    let len = v.length();
    if len <= NORMALIZE_EPSILON {
        fallback
    } else {
        v / len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_only_shortens() {
        let long = truncate(Vec3::new(10.0, 0.0, 0.0), 5.0);
        assert!((long.length() - 5.0).abs() < 1e-5);

        let short = truncate(Vec3::new(2.0, 0.0, 0.0), 5.0);
        assert_eq!(short, Vec3::new(2.0, 0.0, 0.0));
    }

    #[test]
    fn direction_or_falls_back_on_degenerate_input() {
        assert_eq!(direction_or(Vec3::ZERO, Vec3::Y), Vec3::Y);
        assert_eq!(direction_or(Vec3::new(f32::NAN, 0.0, 0.0), Vec3::X), Vec3::X);

        let d = direction_or(Vec3::new(0.0, 3.0, 4.0), Vec3::X);
        assert!((d - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }
}
