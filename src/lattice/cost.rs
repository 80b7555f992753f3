//! Candidate scoring and feasibility filtering.
//!
//! Cost ranks candidates; the feasibility filter is a hard gate applied
//! independently of cost. A colliding candidate is penalized, not rejected,
//! so it can still be chosen when nothing collision-free exists.

use crate::common::types::{Obstacles, VehicleFootprint};

use super::sampler::{LatticeConfig, Trajectory};

/// Body-frame box/radius collision test against point obstacles.
///
/// Every third Cartesian sample is tested. The footprint is inflated by the
/// safety margin into a bounding half-length radius; an obstacle collides
/// when its body-frame longitudinal distance is within that radius and its
/// lateral distance within half the width plus the margin.
pub(crate) fn is_colliding(
    traj: &Trajectory,
    footprint: &VehicleFootprint,
    obstacles: &Obstacles,
    margin: f64,
) -> bool {
    // Footprint center offset from the rear axle, and inflated radius
    let dl = (footprint.rf - footprint.rb) / 2.0;
    let r = ((footprint.rf + footprint.rb) / 2.0).hypot(footprint.w / 2.0) + margin;

    for i in (0..traj.x.len()).step_by(3) {
        let yaw = traj.yaw[i];
        let cx = traj.x[i] + dl * yaw.cos();
        let cy = traj.y[i] + dl * yaw.sin();

        for ob in &obstacles.points {
            let xo = ob.x - cx;
            let yo = ob.y - cy;
            let dx = xo * yaw.cos() + yo * yaw.sin();
            let dy = -xo * yaw.sin() + yo * yaw.cos();

            if dx.abs() < r && dy.abs() < footprint.w / 2.0 + margin {
                return true;
            }
        }
    }

    false
}

/// Hard kinematic/dynamic gate: speed, acceleration, and curvature bounds.
pub(crate) fn within_dynamic_bounds(traj: &Trajectory, config: &LatticeConfig) -> bool {
    if traj.s_v.iter().any(|&v| v > config.max_speed) {
        return false;
    }
    if traj.s_a.iter().any(|&a| a.abs() > config.max_accel) {
        return false;
    }
    if traj.curvature.iter().any(|&c| c.abs() > config.max_curvature) {
        return false;
    }
    true
}

fn jerk_sum(traj: &Trajectory) -> f64 {
    let l: f64 = traj.l_jerk.iter().map(|j| j.abs()).sum();
    let s: f64 = traj.s_jerk.iter().map(|j| j.abs()).sum();
    l + s
}

/// Cruise score: jerk, terminal-speed tracking, horizon duration, terminal
/// lateral offset, and a fixed penalty when the collision test fires.
pub(crate) fn cruise_cost(
    traj: &Trajectory,
    horizon: f64,
    footprint: &VehicleFootprint,
    obstacles: &Obstacles,
    config: &LatticeConfig,
) -> f64 {
    let v_diff = (config.target_speed - traj.s_v.last().copied().unwrap_or(0.0)).abs();
    let offset = traj.l.last().copied().unwrap_or(0.0).abs();
    let collision = if is_colliding(traj, footprint, obstacles, config.safety_margin) {
        1.0
    } else {
        0.0
    };

    config.k_jerk * jerk_sum(traj)
        + config.k_v_diff * v_diff
        + config.k_time * horizon * 2.0
        + config.k_offset * offset
        + config.k_collision * collision
}

/// Stop score: squared terminal speed instead of speed tracking, plus a
/// penalty on total speed over the horizon to favor braking early.
pub(crate) fn stop_cost(traj: &Trajectory, horizon: f64, config: &LatticeConfig) -> f64 {
    let v_diff = traj.s_v.last().copied().unwrap_or(0.0).powi(2);
    let offset = traj.l.last().copied().unwrap_or(0.0).abs();
    let speed_sum: f64 = traj.s_v.iter().map(|v| v.abs()).sum();

    config.k_jerk * jerk_sum(traj)
        + config.k_v_diff * v_diff
        + config.k_time * horizon * 2.0
        + config.k_offset * offset
        + config.k_stop_speed * speed_sum
}
