//! local_planner - trajectory generation for autonomous driving
//!
//! This crate provides the two local-planning engines of a driving stack:
//! Reeds-Shepp shortest paths under a bounded turning curvature, and a
//! Frenet-frame lattice planner that samples, scores, and filters candidate
//! trajectories around a reference line once per control cycle.

// Core modules
pub mod common;

// Planner modules
pub mod lattice;
pub mod reeds_shepp;

// Re-export common types for convenience
pub use common::{FrenetState, Obstacles, Point2D, Pose2D, VehicleFootprint};
pub use lattice::{plan_cruise, plan_stop, LatticeConfig, ReferenceSpline, Trajectory};
pub use reeds_shepp::{plan_reeds_shepp, ReedsSheppPath, SegmentType};
