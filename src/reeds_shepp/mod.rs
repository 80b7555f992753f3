// Reeds-Shepp path planning module

pub mod generator;
pub mod primitives;
pub mod sampler;

pub use generator::ReedsSheppPath;
pub use primitives::SegmentType;
pub use sampler::plan_reeds_shepp;
