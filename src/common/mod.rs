//! Common types and angle utilities shared by the planners.

pub mod angles;
pub mod types;

pub use angles::*;
pub use types::*;
