//! Projection of Frenet-frame candidates onto Cartesian coordinates.
//!
//! The reference line itself is built outside this crate; the planner only
//! reads it through the `ReferenceSpline` trait.

use std::f64::consts::FRAC_PI_2;

use super::sampler::Trajectory;

/// Arc-length-parametrized reference line consumed by the lattice planner.
pub trait ReferenceSpline {
    /// Cartesian position at arc length `s`
    fn position(&self, s: f64) -> (f64, f64);

    /// Tangent heading at arc length `s`
    fn heading(&self, s: f64) -> f64;

    /// Total arc length of the reference line
    fn max_arc_length(&self) -> f64;
}

impl Trajectory {
    /// Map the (s, l) profile onto Cartesian coordinates. Samples past the
    /// end of the reference line are truncated, not extrapolated.
    pub(crate) fn project_onto<S: ReferenceSpline + ?Sized>(&mut self, spline: &S) {
        self.x.clear();
        self.y.clear();

        for i in 0..self.s.len() {
            if self.s[i] > spline.max_arc_length() {
                break;
            }

            let (x_ref, y_ref) = spline.position(self.s[i]);
            let yaw = spline.heading(self.s[i]);
            self.x.push(x_ref + self.l[i] * (yaw + FRAC_PI_2).cos());
            self.y.push(y_ref + self.l[i] * (yaw + FRAC_PI_2).sin());
        }
    }

    /// Derive yaw, sample spacing, and curvature by finite differencing the
    /// Cartesian samples. A trajectory with fewer than two samples gets no
    /// yaw data and is treated as non-viable by the samplers.
    pub(crate) fn derive_yaw_curvature(&mut self) {
        self.yaw.clear();
        self.ds.clear();
        self.curvature.clear();

        for i in 0..self.x.len().saturating_sub(1) {
            let dx = self.x[i + 1] - self.x[i];
            let dy = self.y[i + 1] - self.y[i];
            self.yaw.push(dy.atan2(dx));
            self.ds.push(dx.hypot(dy));
        }

        if self.yaw.is_empty() {
            return;
        }
        self.yaw.push(*self.yaw.last().unwrap());
        self.ds.push(*self.ds.last().unwrap());

        for i in 0..self.yaw.len() - 1 {
            let dyaw = self.yaw[i + 1] - self.yaw[i];
            if self.ds[i] > 0.0 {
                self.curvature.push(dyaw / self.ds[i]);
            } else {
                self.curvature.push(0.0);
            }
        }
    }
}
