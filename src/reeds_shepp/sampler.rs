// Discretization of Reeds-Shepp segment descriptions into sampled poses,
// and the top-level shortest-path selection.

use crate::common::angles::wrap_pi;
use crate::common::types::Pose2D;

use super::generator::{generate_candidates, ReedsSheppPath};
use super::primitives::SegmentType;

/// Sample offsets along one segment: every multiple of the step from zero,
/// with the step following the segment's sign, plus the exact segment length
/// as the final sample regardless of step alignment.
fn segment_offsets(length: f64, step_size: f64) -> Vec<f64> {
    let sign = if length < 0.0 { -1.0 } else { 1.0 };
    let mut offsets = Vec::new();
    let mut d = 0.0;
    while d < length.abs() {
        offsets.push(sign * d);
        d += step_size;
    }
    offsets.push(length);
    offsets
}

/// Pose at a signed arc offset along one segment, in the running local frame.
fn interpolate(
    dist: f64,
    length: f64,
    mode: SegmentType,
    max_curvature: f64,
    origin: Pose2D,
) -> (Pose2D, i32) {
    let direction = if length > 0.0 { 1 } else { -1 };

    if mode == SegmentType::Straight {
        let x = origin.x + dist / max_curvature * origin.yaw.cos();
        let y = origin.y + dist / max_curvature * origin.yaw.sin();
        return (Pose2D::new(x, y, origin.yaw), direction);
    }

    // Unit-curvature arc offset, rotated into the running frame
    let ldx = dist.sin() / max_curvature;
    let (ldy, yaw) = match mode {
        SegmentType::Left => ((1.0 - dist.cos()) / max_curvature, origin.yaw + dist),
        _ => ((1.0 - dist.cos()) / -max_curvature, origin.yaw - dist),
    };
    let gdx = (-origin.yaw).cos() * ldx + (-origin.yaw).sin() * ldy;
    let gdy = -(-origin.yaw).sin() * ldx + (-origin.yaw).cos() * ldy;

    (Pose2D::new(origin.x + gdx, origin.y + gdy, yaw), direction)
}

/// Discretize a whole segment sequence in the start-local frame.
///
/// The running origin pose is threaded through as a fold accumulator: the
/// end pose of each segment becomes the start pose of the next, so the
/// sampled course is exactly continuous across segment boundaries.
fn generate_local_course(
    lengths: &[f64; 3],
    modes: &[SegmentType; 3],
    max_curvature: f64,
    step_size: f64,
) -> (Vec<f64>, Vec<f64>, Vec<f64>, Vec<i32>) {
    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut yaws = Vec::new();
    let mut directions = Vec::new();

    let mut origin = Pose2D::origin();
    for (&length, &mode) in lengths.iter().zip(modes.iter()) {
        for dist in segment_offsets(length, step_size * max_curvature) {
            let (pose, direction) = interpolate(dist, length, mode, max_curvature, origin);
            xs.push(pose.x);
            ys.push(pose.y);
            yaws.push(pose.yaw);
            directions.push(direction);
        }
        origin = Pose2D::new(
            xs[xs.len() - 1],
            ys[ys.len() - 1],
            yaws[yaws.len() - 1],
        );
    }

    (xs, ys, yaws, directions)
}

/// Generate all candidates and attach their discretized world-frame courses.
pub(crate) fn calc_paths(
    start: Pose2D,
    goal: Pose2D,
    max_curvature: f64,
    step_size: f64,
) -> Vec<ReedsSheppPath> {
    let mut paths = generate_candidates(start, goal, max_curvature, step_size);

    for path in &mut paths {
        let (xs, ys, yaws, directions) =
            generate_local_course(&path.lengths, &path.ctypes, max_curvature, step_size);

        // Rotate/translate the local course back into world coordinates
        path.x = xs
            .iter()
            .zip(ys.iter())
            .map(|(&ix, &iy)| (-start.yaw).cos() * ix + (-start.yaw).sin() * iy + start.x)
            .collect();
        path.y = xs
            .iter()
            .zip(ys.iter())
            .map(|(&ix, &iy)| -(-start.yaw).sin() * ix + (-start.yaw).cos() * iy + start.y)
            .collect();
        path.yaw = yaws.iter().map(|&yaw| wrap_pi(yaw + start.yaw)).collect();
        path.directions = directions;

        // Rescale curvature-scaled lengths to true distance
        for length in &mut path.lengths {
            *length /= max_curvature;
        }
        path.l /= max_curvature;
    }

    paths
}

/// Shortest Reeds-Shepp path from `start` to `goal` under the curvature
/// bound, discretized at `step_size`. Returns None when no primitive family
/// admits the goal; ties on total length keep the first generated candidate.
pub fn plan_reeds_shepp(
    start: Pose2D,
    goal: Pose2D,
    max_curvature: f64,
    step_size: f64,
) -> Option<ReedsSheppPath> {
    let mut paths = calc_paths(start, goal, max_curvature, step_size);

    let mut best: Option<usize> = None;
    for (idx, path) in paths.iter().enumerate() {
        match best {
            Some(b) if paths[b].l <= path.l => {}
            _ => best = Some(idx),
        }
    }

    best.map(|idx| paths.swap_remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_segment_offsets_end_exactly_on_length() {
        let offsets = segment_offsets(1.0, 0.3);
        assert_eq!(offsets.len(), 5);
        assert_eq!(*offsets.last().unwrap(), 1.0);

        // Step-aligned length is not duplicated
        let offsets = segment_offsets(0.75, 0.25);
        assert_eq!(offsets, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn test_segment_offsets_follow_negative_sign() {
        let offsets = segment_offsets(-1.0, 0.3);
        assert_eq!(offsets[0], 0.0);
        assert!(offsets.iter().skip(1).all(|&d| d < 0.0));
        assert_eq!(*offsets.last().unwrap(), -1.0);
    }

    #[test]
    fn test_local_course_is_continuous_across_segments() {
        use SegmentType::{Left, Straight};
        let lengths = [1.0, 2.0, -1.0];
        let modes = [Left, Straight, Left];
        let (xs, ys, yaws, _) = generate_local_course(&lengths, &modes, 1.0, 0.1);

        // First sample is the local origin
        assert!(xs[0].abs() < 1e-12 && ys[0].abs() < 1e-12 && yaws[0].abs() < 1e-12);
        // Consecutive samples never jump further than one step allows
        for i in 1..xs.len() {
            let ds = (xs[i] - xs[i - 1]).hypot(ys[i] - ys[i - 1]);
            assert!(ds <= 0.1 + 1e-9, "gap of {} at sample {}", ds, i);
        }
    }

    #[test]
    fn test_plan_straight_goal() {
        let start = Pose2D::origin();
        let goal = Pose2D::new(10.0, 0.0, 0.0);
        let path = plan_reeds_shepp(start, goal, 0.1, 0.05).unwrap();
        assert!((path.l - 10.0).abs() < 1e-6);
        let last = path.x.len() - 1;
        assert!((path.x[last] - 10.0).abs() < 1e-6);
        assert!(path.y[last].abs() < 1e-6);
    }

    #[test]
    fn test_plan_endpoints_and_optimality() {
        // Start/goal layout of the reference scenario
        let start = Pose2D::new(-10.0, -10.0, PI / 4.0);
        let goal = Pose2D::new(0.0, 0.0, -PI / 2.0);
        let max_curvature = 0.1;
        let step_size = 0.05;

        let path = plan_reeds_shepp(start, goal, max_curvature, step_size).unwrap();
        assert!(!path.x.is_empty());

        // First sample reproduces the start pose
        assert!((path.x[0] - start.x).abs() < 1e-9);
        assert!((path.y[0] - start.y).abs() < 1e-9);
        assert!((path.yaw[0] - start.yaw).abs() < 1e-9);

        // Last sample lands on the goal within the discretization step
        let last = path.x.len() - 1;
        assert!((path.x[last] - goal.x).abs() < 2.0 * step_size);
        assert!((path.y[last] - goal.y).abs() < 2.0 * step_size);
        let yaw_err = wrap_pi(path.yaw[last] - goal.yaw).abs();
        assert!(yaw_err < 2.0 * step_size * max_curvature + 1e-6, "yaw error {}", yaw_err);

        // Selected path is the shortest of all generated candidates
        let candidates = calc_paths(start, goal, max_curvature, step_size);
        for candidate in &candidates {
            assert!(path.l <= candidate.l + 1e-12);
        }
    }

    #[test]
    fn test_direction_flags_match_segment_signs() {
        let start = Pose2D::origin();
        let goal = Pose2D::new(-3.0, 0.0, 0.0);
        let path = plan_reeds_shepp(start, goal, 0.5, 0.05).unwrap();
        // Driving straight backwards: every sample is flagged as reverse
        if path.ctypes == [SegmentType::Left, SegmentType::Straight, SegmentType::Left]
            && path.lengths.iter().all(|&l| l <= 0.0)
        {
            assert!(path.directions.iter().all(|&d| d == -1));
        }
        assert!(!path.directions.is_empty());
    }
}
