// Reeds-Shepp candidate generation.
//
// Every admissible 3-segment type sequence is obtained by running the four
// primitive solvers through a fixed table of symmetry transforms:
// time reversal (mirror in x, negate heading, negate the solved parameters)
// and reflection (mirror in y, negate heading, swap left and right arcs).
// The arc-arc-arc family additionally gets backward variants where the goal
// offset is re-expressed from the far end and the parameters reversed.

use crate::common::types::Pose2D;

use super::primitives::{
    left_right_left, left_straight_left, left_straight_right, straight_left_straight,
    SegmentType,
};

/// A Reeds-Shepp path: three signed segments plus the discretized course.
///
/// Segment lengths and the total `l` are in curvature-scaled units until
/// `calc_paths` rescales them to true distance. The sample vectors stay empty
/// until the path is discretized.
#[derive(Debug, Clone)]
pub struct ReedsSheppPath {
    pub lengths: [f64; 3],
    pub ctypes: [SegmentType; 3],
    pub l: f64,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yaw: Vec<f64>,
    pub directions: Vec<i32>,
}

impl ReedsSheppPath {
    fn from_segments(lengths: [f64; 3], ctypes: [SegmentType; 3]) -> Self {
        let l = lengths.iter().map(|l| l.abs()).sum();
        ReedsSheppPath {
            lengths,
            ctypes,
            l,
            x: Vec::new(),
            y: Vec::new(),
            yaw: Vec::new(),
            directions: Vec::new(),
        }
    }
}

/// Insert a candidate unless it is degenerate or a near-duplicate.
///
/// A candidate is rejected when its total length is below the discretization
/// step, or when an already collected candidate has the same type sequence
/// and a total length within one step of it.
fn insert_candidate(
    paths: &mut Vec<ReedsSheppPath>,
    lengths: [f64; 3],
    ctypes: [SegmentType; 3],
    step_size: f64,
) {
    let path = ReedsSheppPath::from_segments(lengths, ctypes);

    if path.l <= step_size {
        return;
    }
    for existing in paths.iter() {
        if existing.ctypes == path.ctypes && (existing.l - path.l).abs() <= step_size {
            return;
        }
    }
    paths.push(path);
}

// (timeflip, reflect) combinations; heading negates when exactly one applies.
const ALL_TRANSFORMS: [(bool, bool); 4] = [(false, false), (true, false), (false, true), (true, true)];
const REFLECT_ONLY: [(bool, bool); 2] = [(false, false), (false, true)];

fn apply_family<F>(
    solver: F,
    base: [SegmentType; 3],
    x: f64,
    y: f64,
    phi: f64,
    transforms: &[(bool, bool)],
    reversed: bool,
    paths: &mut Vec<ReedsSheppPath>,
    step_size: f64,
) where
    F: Fn(f64, f64, f64) -> Option<(f64, f64, f64)>,
{
    for &(timeflip, reflect) in transforms {
        let xi = if timeflip { -x } else { x };
        let yi = if reflect { -y } else { y };
        let phii = if timeflip != reflect { -phi } else { phi };

        if let Some((t, u, v)) = solver(xi, yi, phii) {
            let (t, u, v) = if timeflip { (-t, -u, -v) } else { (t, u, v) };
            let lengths = if reversed { [v, u, t] } else { [t, u, v] };
            let ctypes = if reflect {
                [base[0].mirrored(), base[1].mirrored(), base[2].mirrored()]
            } else {
                base
            };
            insert_candidate(paths, lengths, ctypes, step_size);
        }
    }
}

/// Build the full candidate set for a goal pose given in world coordinates.
///
/// The goal is transformed into the start pose's local frame and scaled by
/// the curvature bound; all lengths in the returned candidates are in those
/// scaled units.
pub(crate) fn generate_candidates(
    start: Pose2D,
    goal: Pose2D,
    max_curvature: f64,
    step_size: f64,
) -> Vec<ReedsSheppPath> {
    use SegmentType::{Left, Right, Straight};

    let dx = goal.x - start.x;
    let dy = goal.y - start.y;
    let dth = goal.yaw - start.yaw;
    let c = start.yaw.cos();
    let s = start.yaw.sin();
    let x = (c * dx + s * dy) * max_curvature;
    let y = (-s * dx + c * dy) * max_curvature;
    let step = step_size * max_curvature;

    let mut paths = Vec::new();

    // straight-arc-straight
    apply_family(straight_left_straight, [Straight, Left, Straight], x, y, dth,
                 &REFLECT_ONLY, false, &mut paths, step);

    // arc-straight-arc
    apply_family(left_straight_left, [Left, Straight, Left], x, y, dth,
                 &ALL_TRANSFORMS, false, &mut paths, step);
    apply_family(left_straight_right, [Left, Straight, Right], x, y, dth,
                 &ALL_TRANSFORMS, false, &mut paths, step);

    // arc-arc-arc, forward and backward
    apply_family(left_right_left, [Left, Right, Left], x, y, dth,
                 &ALL_TRANSFORMS, false, &mut paths, step);

    let xb = x * dth.cos() + y * dth.sin();
    let yb = x * dth.sin() - y * dth.cos();
    apply_family(left_right_left, [Left, Right, Left], xb, yb, dth,
                 &ALL_TRANSFORMS, true, &mut paths, step);

    paths
}
