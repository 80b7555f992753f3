//! Candidate trajectory sampling over the lattice grid.
//!
//! Cruise mode samples terminal speed x horizon duration x terminal lateral
//! offset; stop mode samples terminal speed x horizon duration with the
//! longitudinal profile pinned to a fixed stopping position and the lateral
//! profile pinned to the reference line.

use itertools::iproduct;

use crate::common::types::{FrenetState, Obstacles, VehicleFootprint};

use super::cost::{cruise_cost, stop_cost};
use super::frenet::ReferenceSpline;
use super::polynomials::{QuarticPolynomial, QuinticPolynomial};

/// Lattice planner tuning: sampling grid, cost weights, and dynamic bounds.
#[derive(Debug, Clone)]
pub struct LatticeConfig {
    /// Lateral sampling half-width around the reference line [m]
    pub road_width: f64,
    /// Lateral offset sample step [m]
    pub road_sample_step: f64,
    /// Cruise target speed [m/s]
    pub target_speed: f64,
    /// Terminal-speed band, as multiples of the target speed
    pub speed_band_min: f64,
    pub speed_band_max: f64,
    pub speed_band_step: f64,
    /// Cruise horizon sweep [s]
    pub min_horizon: f64,
    pub max_horizon: f64,
    pub horizon_step: f64,
    /// Trajectory time step [s]
    pub t_step: f64,
    /// Stopping point arc-length position [m]
    pub stop_position: f64,
    /// Terminal speeds sampled around standstill in stop mode [m/s]
    pub stop_speeds: Vec<f64>,
    /// Stop horizon sweep [s]
    pub stop_min_horizon: f64,
    pub stop_max_horizon: f64,
    pub stop_horizon_step: f64,
    // Cost weights
    pub k_jerk: f64,
    pub k_time: f64,
    pub k_v_diff: f64,
    pub k_offset: f64,
    pub k_collision: f64,
    pub k_stop_speed: f64,
    // Feasibility bounds
    pub max_speed: f64,
    pub max_accel: f64,
    pub max_curvature: f64,
    /// Footprint inflation used by the collision test [m]
    pub safety_margin: f64,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            road_width: 8.0,
            road_sample_step: 1.0,
            target_speed: 30.0 / 3.6,
            speed_band_min: 0.6,
            speed_band_max: 1.4,
            speed_band_step: 0.2,
            min_horizon: 4.5,
            max_horizon: 5.5,
            horizon_step: 0.2,
            t_step: 0.15,
            stop_position: 55.0,
            stop_speeds: vec![-2.0, -1.0, 0.0, 1.0, 2.0],
            stop_min_horizon: 1.0,
            stop_max_horizon: 16.0,
            stop_horizon_step: 1.0,
            k_jerk: 0.1,
            k_time: 1.0,
            k_v_diff: 1.0,
            k_offset: 1.5,
            k_collision: 500.0,
            k_stop_speed: 5.0,
            max_speed: 50.0 / 3.6,
            max_accel: 8.0,
            max_curvature: 6.0,
            safety_margin: 1.8,
        }
    }
}

/// One time-parametrized candidate trajectory.
///
/// Longitudinal (`s`) and lateral (`l`) profiles come from the boundary-value
/// polynomials; the Cartesian fields are filled by projection onto the
/// reference line. A candidate lives for one planning cycle.
#[derive(Debug, Clone, Default)]
pub struct Trajectory {
    pub t: Vec<f64>,

    pub s: Vec<f64>,
    pub s_v: Vec<f64>,
    pub s_a: Vec<f64>,
    pub s_jerk: Vec<f64>,

    pub l: Vec<f64>,
    pub l_v: Vec<f64>,
    pub l_a: Vec<f64>,
    pub l_jerk: Vec<f64>,

    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub yaw: Vec<f64>,
    pub ds: Vec<f64>,
    pub curvature: Vec<f64>,

    pub cost: f64,
}

impl Trajectory {
    /// Horizon duration the candidate was sampled for.
    pub fn horizon(&self) -> f64 {
        self.t.last().copied().unwrap_or(0.0)
    }
}

fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    let mut v = start;
    while v < stop {
        values.push(v);
        v += step;
    }
    values
}

/// Sample a longitudinal profile on the time grid; `eval` returns
/// (position, velocity, acceleration, jerk) at a given time.
fn sample_longitudinal<F>(eval: F, horizon: f64, t_step: f64) -> Trajectory
where
    F: Fn(f64) -> (f64, f64, f64, f64),
{
    let mut traj = Trajectory::default();
    let mut t = 0.0;
    while t < horizon {
        let (s, s_v, s_a, s_jerk) = eval(t);
        traj.t.push(t);
        traj.s.push(s);
        traj.s_v.push(s_v);
        traj.s_a.push(s_a);
        traj.s_jerk.push(s_jerk);
        t += t_step;
    }
    traj
}

fn attach_lateral(traj: &mut Trajectory, lat: &QuinticPolynomial) {
    for i in 0..traj.t.len() {
        let t = traj.t[i];
        traj.l.push(lat.calc_point(t));
        traj.l_v.push(lat.calc_first_derivative(t));
        traj.l_a.push(lat.calc_second_derivative(t));
        traj.l_jerk.push(lat.calc_third_derivative(t));
    }
}

/// Cruise-mode candidate set: velocity-keeping quartic longitudinal profiles
/// crossed with quintic lateral moves spanning the road width.
pub(crate) fn sample_cruise_candidates<S: ReferenceSpline + ?Sized>(
    state: &FrenetState,
    spline: &S,
    footprint: &VehicleFootprint,
    obstacles: &Obstacles,
    config: &LatticeConfig,
) -> Vec<Trajectory> {
    let terminal_speeds = arange(
        config.target_speed * config.speed_band_min,
        config.target_speed * config.speed_band_max,
        config.target_speed * config.speed_band_step,
    );
    let horizons = arange(config.min_horizon, config.max_horizon, config.horizon_step);
    let offsets = arange(-config.road_width, config.road_width, config.road_sample_step);

    let mut candidates = Vec::new();

    for (s1_v, t1) in iproduct!(terminal_speeds.iter().copied(), horizons.iter().copied()) {
        let lon = QuarticPolynomial::new(state.s, state.s_v, state.s_a, s1_v, 0.0, t1);
        let base = sample_longitudinal(
            |t| {
                (
                    lon.calc_point(t),
                    lon.calc_first_derivative(t),
                    lon.calc_second_derivative(t),
                    lon.calc_third_derivative(t),
                )
            },
            t1,
            config.t_step,
        );

        for &l1 in &offsets {
            let mut traj = base.clone();
            let lat = QuinticPolynomial::new(state.l, state.l_v, state.l_a, l1, 0.0, 0.0, t1);
            attach_lateral(&mut traj, &lat);

            traj.project_onto(spline);
            traj.derive_yaw_curvature();
            if traj.yaw.is_empty() {
                continue;
            }

            traj.cost = cruise_cost(&traj, t1, footprint, obstacles, config);
            candidates.push(traj);
        }
    }

    candidates
}

/// Stop-mode candidate set: quintic longitudinal profiles pinned to the
/// stopping position, lateral profile held on the reference line.
pub(crate) fn sample_stop_candidates<S: ReferenceSpline + ?Sized>(
    state: &FrenetState,
    spline: &S,
    config: &LatticeConfig,
) -> Vec<Trajectory> {
    let horizons = arange(
        config.stop_min_horizon,
        config.stop_max_horizon,
        config.stop_horizon_step,
    );

    let mut candidates = Vec::new();

    for (s1_v, t1) in iproduct!(config.stop_speeds.iter().copied(), horizons.iter().copied()) {
        let lon = QuinticPolynomial::new(
            state.s, state.s_v, state.s_a,
            config.stop_position, s1_v, 0.0,
            t1,
        );
        let mut traj = sample_longitudinal(
            |t| {
                (
                    lon.calc_point(t),
                    lon.calc_first_derivative(t),
                    lon.calc_second_derivative(t),
                    lon.calc_third_derivative(t),
                )
            },
            t1,
            config.t_step,
        );

        let lat = QuinticPolynomial::new(state.l, state.l_v, state.l_a, 0.0, 0.0, 0.0, t1);
        attach_lateral(&mut traj, &lat);

        traj.project_onto(spline);
        traj.derive_yaw_curvature();
        if traj.yaw.is_empty() {
            continue;
        }

        traj.cost = stop_cost(&traj, t1, config);
        candidates.push(traj);
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LineSpline {
        length: f64,
    }

    impl ReferenceSpline for LineSpline {
        fn position(&self, s: f64) -> (f64, f64) {
            (s, 0.0)
        }

        fn heading(&self, _s: f64) -> f64 {
            0.0
        }

        fn max_arc_length(&self) -> f64 {
            self.length
        }
    }

    #[test]
    fn test_arange_excludes_stop() {
        assert_eq!(arange(0.0, 1.0, 0.5), vec![0.0, 0.5]);
        assert!(arange(1.0, 1.0, 0.5).is_empty());
    }

    #[test]
    fn test_cruise_grid_size() {
        let config = LatticeConfig::default();
        let state = FrenetState::at_speed(config.target_speed);
        let candidates = sample_cruise_candidates(
            &state,
            &LineSpline { length: 500.0 },
            &VehicleFootprint::default(),
            &Obstacles::new(),
            &config,
        );

        // Every (speed, horizon, offset) grid point yields one candidate
        let speeds = arange(
            config.target_speed * config.speed_band_min,
            config.target_speed * config.speed_band_max,
            config.target_speed * config.speed_band_step,
        )
        .len();
        let horizons = arange(config.min_horizon, config.max_horizon, config.horizon_step).len();
        let offsets =
            arange(-config.road_width, config.road_width, config.road_sample_step).len();
        assert_eq!(candidates.len(), speeds * horizons * offsets);
    }

    #[test]
    fn test_cruise_profiles_share_time_grid() {
        let config = LatticeConfig::default();
        let state = FrenetState::at_speed(5.0);
        let candidates = sample_cruise_candidates(
            &state,
            &LineSpline { length: 500.0 },
            &VehicleFootprint::default(),
            &Obstacles::new(),
            &config,
        );

        for traj in &candidates {
            assert_eq!(traj.t.len(), traj.s.len());
            assert_eq!(traj.t.len(), traj.l.len());
            assert_eq!(traj.t.len(), traj.s_jerk.len());
            assert_eq!(traj.t.len(), traj.l_jerk.len());
            // Constant time step
            for pair in traj.t.windows(2) {
                assert!((pair[1] - pair[0] - config.t_step).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_cruise_first_sample_matches_state() {
        let config = LatticeConfig::default();
        let state = FrenetState::new(1.5, 0.2, 0.0, 10.0, 6.0, 0.3);
        let candidates = sample_cruise_candidates(
            &state,
            &LineSpline { length: 500.0 },
            &VehicleFootprint::default(),
            &Obstacles::new(),
            &config,
        );

        for traj in &candidates {
            assert!((traj.s[0] - state.s).abs() < 1e-9);
            assert!((traj.s_v[0] - state.s_v).abs() < 1e-9);
            assert!((traj.l[0] - state.l).abs() < 1e-9);
            assert!((traj.l_v[0] - state.l_v).abs() < 1e-9);
        }
    }

    #[test]
    fn test_stop_candidates_stay_on_reference_line() {
        let config = LatticeConfig::default();
        let state = FrenetState::at_speed(30.0 / 3.6);
        let candidates =
            sample_stop_candidates(&state, &LineSpline { length: 500.0 }, &config);

        assert!(!candidates.is_empty());
        for traj in &candidates {
            assert!(traj.l.iter().all(|l| l.abs() < 1e-9));
        }
    }

    #[test]
    fn test_degenerate_horizon_range_yields_no_candidates() {
        let mut config = LatticeConfig::default();
        config.min_horizon = 5.0;
        config.max_horizon = 5.0;
        let state = FrenetState::at_speed(5.0);
        let candidates = sample_cruise_candidates(
            &state,
            &LineSpline { length: 500.0 },
            &VehicleFootprint::default(),
            &Obstacles::new(),
            &config,
        );
        assert!(candidates.is_empty());
    }
}
