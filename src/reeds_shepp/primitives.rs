// Closed-form solvers for the elementary Reeds-Shepp curve families.
//
// Each solver works in the local frame of the start pose, scaled so the
// turning radius is 1, and returns the signed segment parameters (t, u, v):
// arc lengths for straight segments, turning angles for arcs. A solver
// returns None whenever its closed-form preconditions fail; the generator
// obtains every other type sequence from these four families by reflection
// and time reversal.

use std::f64::consts::PI;

use crate::common::angles::wrap_signed;

/// Motion mode of one path segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Straight,
    Left,
    Right,
}

impl SegmentType {
    /// Left/right swapped type, produced by mirroring the path in y.
    pub(crate) fn mirrored(self) -> SegmentType {
        match self {
            SegmentType::Left => SegmentType::Right,
            SegmentType::Right => SegmentType::Left,
            SegmentType::Straight => SegmentType::Straight,
        }
    }
}

pub(crate) fn polar(x: f64, y: f64) -> (f64, f64) {
    (x.hypot(y), y.atan2(x))
}

pub(crate) fn straight_left_straight(x: f64, y: f64, phi: f64) -> Option<(f64, f64, f64)> {
    let phi = wrap_signed(phi);
    if PI * 0.01 < phi && phi < PI * 0.99 && y != 0.0 {
        let xd = -y / phi.tan() + x;
        let t = xd - (phi / 2.0).tan();
        let u = phi;
        let v = y.signum() * (x - xd).hypot(y) - (phi / 2.0).tan();
        return Some((t, u, v));
    }
    None
}

pub(crate) fn left_straight_left(x: f64, y: f64, phi: f64) -> Option<(f64, f64, f64)> {
    let (u, t) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if t >= 0.0 {
        let v = wrap_signed(phi - t);
        if v >= 0.0 {
            return Some((t, u, v));
        }
    }
    None
}

pub(crate) fn left_straight_right(x: f64, y: f64, phi: f64) -> Option<(f64, f64, f64)> {
    let (u1, t1) = polar(x + phi.sin(), y - 1.0 - phi.cos());
    let u1_sq = u1 * u1;
    if u1_sq >= 4.0 {
        let u = (u1_sq - 4.0).sqrt();
        let theta = 2.0_f64.atan2(u);
        let t = wrap_signed(t1 + theta);
        let v = wrap_signed(t - phi);
        if t >= 0.0 && v >= 0.0 {
            return Some((t, u, v));
        }
    }
    None
}

// The middle arc curves the other way; by convention its angle u is <= 0.
pub(crate) fn left_right_left(x: f64, y: f64, phi: f64) -> Option<(f64, f64, f64)> {
    let (u1, theta) = polar(x - phi.sin(), y - 1.0 + phi.cos());
    if u1 <= 4.0 {
        let u = -2.0 * (0.25 * u1).asin();
        let t = wrap_signed(theta + 0.5 * u + PI);
        let v = wrap_signed(phi - t + u);
        if t >= 0.0 && u <= 0.0 {
            return Some((t, u, v));
        }
    }
    None
}
