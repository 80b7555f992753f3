//! Candidate ordering and selection, and the per-cycle planner entry points.

use ordered_float::OrderedFloat;

use crate::common::types::{FrenetState, Obstacles, VehicleFootprint};

use super::cost::within_dynamic_bounds;
use super::frenet::ReferenceSpline;
use super::sampler::{sample_cruise_candidates, sample_stop_candidates, LatticeConfig, Trajectory};

/// Stable-sort candidates by cost and return the cheapest feasible one.
///
/// Cost ties keep generation order. Returns None both when the candidate set
/// is empty and when every candidate fails the feasibility gate; callers
/// treat either as "replan next cycle".
fn extract_optimal(mut candidates: Vec<Trajectory>, config: &LatticeConfig) -> Option<Trajectory> {
    candidates.sort_by_key(|traj| OrderedFloat(traj.cost));
    candidates
        .into_iter()
        .find(|traj| within_dynamic_bounds(traj, config))
}

/// Plan one cruising cycle: sample the lattice around the reference line,
/// score against the target speed and obstacles, and pick the cheapest
/// feasible candidate.
pub fn plan_cruise<S: ReferenceSpline + ?Sized>(
    state: &FrenetState,
    spline: &S,
    footprint: &VehicleFootprint,
    obstacles: &Obstacles,
    config: &LatticeConfig,
) -> Option<Trajectory> {
    let candidates = sample_cruise_candidates(state, spline, footprint, obstacles, config);
    extract_optimal(candidates, config)
}

/// Plan one stopping cycle toward the configured stop position.
pub fn plan_stop<S: ReferenceSpline + ?Sized>(
    state: &FrenetState,
    spline: &S,
    config: &LatticeConfig,
) -> Option<Trajectory> {
    let candidates = sample_stop_candidates(state, spline, config);
    extract_optimal(candidates, config)
}
