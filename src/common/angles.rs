//! Angle normalization utilities
//!
//! Two distinct wrappers are provided on purpose. `wrap_signed` takes the
//! remainder against `2*PI*sign(x)` before centering, so the branch near the
//! +-PI boundary is resolved by the sign of the original input. The
//! Reeds-Shepp primitive solvers rely on exactly this behavior; a plain
//! centered modulus judges a different primitive branch valid near the
//! boundary. `wrap_pi` is the plain centered form and is only used when
//! reporting final yaw values.

use std::f64::consts::PI;

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

/// Reduce an angle into the +-PI band, resolving the branch with the sign of
/// the original input.
pub fn wrap_signed(x: f64) -> f64 {
    let mut v = x % (2.0 * PI * sign(x));
    if v < -PI {
        v += 2.0 * PI;
    } else if v > PI {
        v -= 2.0 * PI;
    }
    v
}

/// Reduce an angle into [-PI, PI] with a plain centered modulus.
pub fn wrap_pi(x: f64) -> f64 {
    let mut result = x;
    while result > PI {
        result -= 2.0 * PI;
    }
    while result < -PI {
        result += 2.0 * PI;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_wrap_signed_identity_in_band() {
        assert!((wrap_signed(0.5) - 0.5).abs() < 1e-12);
        assert!((wrap_signed(-0.5) + 0.5).abs() < 1e-12);
        assert_eq!(wrap_signed(0.0), 0.0);
    }

    #[test]
    fn test_wrap_signed_full_turns() {
        assert!(wrap_signed(2.0 * PI).abs() < 1e-12);
        assert!(wrap_signed(-2.0 * PI).abs() < 1e-12);
        assert!((wrap_signed(2.0 * PI + 0.3) - 0.3).abs() < 1e-12);
        assert!((wrap_signed(-2.0 * PI - 0.3) + 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_pi_full_turns() {
        assert!((wrap_pi(3.0 * PI) - PI).abs() < 1e-12);
        assert!((wrap_pi(-3.0 * PI) + PI).abs() < 1e-12);
        assert!((wrap_pi(PI / 2.0 + 4.0 * PI) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_wrap_random_sweep_stays_in_band() {
        let mut rng = rand::thread_rng();
        for _ in 0..10_000 {
            let x: f64 = rng.gen_range(-100.0..100.0);
            let s = wrap_signed(x);
            let p = wrap_pi(x);
            assert!(s >= -PI && s <= PI, "wrap_signed({}) = {}", x, s);
            assert!(p >= -PI && p <= PI, "wrap_pi({}) = {}", x, p);
            // Both wrappers must agree with the input modulo a full turn
            assert!(((x - s) / (2.0 * PI)).rem_euclid(1.0) < 1e-6
                || ((x - s) / (2.0 * PI)).rem_euclid(1.0) > 1.0 - 1e-6);
            assert!(((x - p) / (2.0 * PI)).rem_euclid(1.0) < 1e-6
                || ((x - p) / (2.0 * PI)).rem_euclid(1.0) > 1.0 - 1e-6);
        }
    }
}
