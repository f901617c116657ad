//! Scoring, budget allocation, and recommendation pipeline for a batch of
//! institution records.
//!
//! All entities are created fresh per batch; nothing persists across
//! invocations and nothing is mutated after creation. The only operation
//! touching the outside world is the optional text enhancement step, which
//! degrades to a passthrough on any failure.

pub mod domain;
pub mod engine;
pub mod enhancer;
pub mod recommendations;
pub mod report;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Criterion, CriterionWeights, InstitutionRecord, InstitutionResult, MetricValue,
    UNKNOWN_INSTITUTION,
};
pub use engine::AllocationEngine;
pub use enhancer::RecommendationEnhancer;
pub use recommendations::RecommendationGenerator;
pub use scoring::{ScoreBreakdown, ScoreCalculator, ScoreComponent};
pub use service::{AllocationService, AllocationServiceError};
