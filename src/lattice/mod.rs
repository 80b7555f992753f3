// Frenet-frame lattice planner module

pub mod cost;
pub mod frenet;
pub mod polynomials;
pub mod sampler;
pub mod selector;

pub use frenet::ReferenceSpline;
pub use sampler::{LatticeConfig, Trajectory};
pub use selector::{plan_cruise, plan_stop};
