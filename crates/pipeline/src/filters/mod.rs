//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod already_selected;
pub mod quality;
pub mod self_exclusion;

// Re-export for convenience
pub use already_selected::AlreadySelectedFilter;
pub use quality::QualityFilter;
pub use self_exclusion::SelfExclusionFilter;
