//! Pipeline for filtering recommendation lists.
//!
//! This crate provides:
//! - Filter trait and implementations for list filtering
//! - FilterPipeline for composing filters
//! - QualityThreshold constants for each upstream source
//!
//! ## Architecture
//! Each upstream list passes through its own pipeline:
//! 1. SelfExclusionFilter drops the movie being detailed
//! 2. AlreadySelectedFilter drops titles an earlier stage already chose
//! 3. QualityFilter drops titles below that source's threshold
//!
//! Every filter keeps the relative order of what it retains, so the
//! provider's ranking survives the pipeline.
//!
//! ## Example Usage
//! ```ignore
//! use pipeline::{FilterContext, FilterPipeline, QualityThreshold};
//! use pipeline::filters::*;
//!
//! let pipeline = FilterPipeline::new()
//!     .add_filter(SelfExclusionFilter)
//!     .add_filter(QualityFilter::new(QualityThreshold::RECOMMENDATIONS));
//!
//! let filtered = pipeline.apply(movies, &FilterContext::new(movie_id))?;
//! ```

pub mod filter_pipeline;
pub mod filters;
pub mod thresholds;
pub mod traits;

// Re-export main types
pub use filter_pipeline::FilterPipeline;
pub use thresholds::QualityThreshold;
pub use traits::{Filter, FilterContext};
