//! Common value types used throughout local_planner

use nalgebra::{Vector2, Vector3};

/// 2D point representation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn distance(&self, other: &Point2D) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    pub fn to_vector(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
}

impl From<(f64, f64)> for Point2D {
    fn from(tuple: (f64, f64)) -> Self {
        Self { x: tuple.0, y: tuple.1 }
    }
}

/// 2D pose (position + orientation)
///
/// The yaw is stored as given and is not normalized; planners apply their own
/// wrapping where the algorithm requires it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose2D {
    pub x: f64,
    pub y: f64,
    pub yaw: f64,
}

impl Pose2D {
    pub fn new(x: f64, y: f64, yaw: f64) -> Self {
        Self { x, y, yaw }
    }

    pub fn origin() -> Self {
        Self { x: 0.0, y: 0.0, yaw: 0.0 }
    }

    pub fn position(&self) -> Point2D {
        Point2D::new(self.x, self.y)
    }

    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.yaw)
    }
}

impl From<Vector3<f64>> for Pose2D {
    fn from(v: Vector3<f64>) -> Self {
        Self { x: v[0], y: v[1], yaw: v[2] }
    }
}

/// Planning-cycle state in the Frenet frame of the reference line
///
/// `l` is the lateral offset from the reference line, `s` the arc-length
/// position along it. The driving loop owns this state and advances it to the
/// first executed sample of the selected trajectory each cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrenetState {
    pub l: f64,
    pub l_v: f64,
    pub l_a: f64,
    pub s: f64,
    pub s_v: f64,
    pub s_a: f64,
}

impl FrenetState {
    pub fn new(l: f64, l_v: f64, l_a: f64, s: f64, s_v: f64, s_a: f64) -> Self {
        Self { l, l_v, l_a, s, s_v, s_a }
    }

    /// State at the start of the reference line, moving at `s_v`.
    pub fn at_speed(s_v: f64) -> Self {
        Self { l: 0.0, l_v: 0.0, l_a: 0.0, s: 0.0, s_v, s_a: 0.0 }
    }
}

/// Vehicle footprint used by the collision test
///
/// `rf` and `rb` are the distances from the rear axle to the front and rear
/// bumper, `w` the overall width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleFootprint {
    pub rf: f64,
    pub rb: f64,
    pub w: f64,
}

impl VehicleFootprint {
    pub fn new(rf: f64, rb: f64, w: f64) -> Self {
        Self { rf, rb, w }
    }
}

impl Default for VehicleFootprint {
    fn default() -> Self {
        Self { rf: 4.5, rb: 1.0, w: 3.0 }
    }
}

/// Obstacle representation
#[derive(Debug, Clone)]
pub struct Obstacles {
    pub points: Vec<Point2D>,
}

impl Obstacles {
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point2D>) -> Self {
        Self { points }
    }

    pub fn from_xy(x: &[f64], y: &[f64]) -> Self {
        assert_eq!(x.len(), y.len());
        let points = x.iter().zip(y.iter())
            .map(|(&x, &y)| Point2D::new(x, y))
            .collect();
        Self { points }
    }

    pub fn push(&mut self, point: Point2D) {
        self.points.push(point);
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for Obstacles {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2d_distance() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(3.0, 4.0);
        assert!((p1.distance(&p2) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_pose2d_keeps_raw_yaw() {
        let pose = Pose2D::new(0.0, 0.0, 7.0);
        assert_eq!(pose.yaw, 7.0);
    }

    #[test]
    fn test_obstacles_from_xy() {
        let obs = Obstacles::from_xy(&[1.0, 2.0], &[3.0, 4.0]);
        assert_eq!(obs.points.len(), 2);
        assert_eq!(obs.points[1], Point2D::new(2.0, 4.0));
    }

    #[test]
    fn test_frenet_state_at_speed() {
        let state = FrenetState::at_speed(8.0);
        assert_eq!(state.s_v, 8.0);
        assert_eq!(state.l, 0.0);
        assert_eq!(state.s, 0.0);
    }
}
