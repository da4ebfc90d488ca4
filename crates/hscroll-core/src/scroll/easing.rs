//! Easing curve for programmatic scrolls

use std::f64::consts::PI;

/// Sine ease-in-out: f(x) = 0.5 × (1 − cos(πx))
///
/// `x` is the absolute progress, clamped to [0, 1]. Symmetric, with zero
/// velocity at both ends.
#[inline]
pub fn ease_in_out_sine(x: f64) -> f64 {
    let x = x.clamp(0.0, 1.0);
    0.5 * (1.0 - (PI * x).cos())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_and_midpoint() {
        assert!(ease_in_out_sine(0.0).abs() < 1e-12);
        assert!((ease_in_out_sine(1.0) - 1.0).abs() < 1e-12);
        assert!((ease_in_out_sine(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetric() {
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            let a = ease_in_out_sine(x);
            let b = 1.0 - ease_in_out_sine(1.0 - x);
            assert!((a - b).abs() < 1e-12, "asymmetric at {x}");
        }
    }

    #[test]
    fn test_monotonic_and_clamped() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_in_out_sine(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
        assert_eq!(ease_in_out_sine(-1.0), ease_in_out_sine(0.0));
        assert_eq!(ease_in_out_sine(2.0), ease_in_out_sine(1.0));
    }
}
