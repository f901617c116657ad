//! Budget allocation engine for UGC-style institutional funding rounds.
//!
//! The crate scores institution records against a fixed five-criterion
//! rubric, converts the scores into budget allocations from a shared pool,
//! and derives improvement recommendations that can optionally be enriched
//! by an external text-generation collaborator. Ingestion (CSV/JSON
//! decoding) and report rendering (PDF/DOCX/HTML) are owned by callers;
//! this library only consumes records and produces result views.

pub mod allocation;
pub mod config;
pub mod error;

pub use allocation::{
    AllocationEngine, AllocationService, AllocationServiceError, Criterion, CriterionWeights,
    InstitutionRecord, InstitutionResult, MetricValue, RecommendationEnhancer,
    RecommendationGenerator, ScoreBreakdown, ScoreCalculator, ScoreComponent,
};
pub use allocation::enhancer::{EnhancementPrompt, EnhancerError, GroqTextEnhancer, TextEnhancer};
pub use allocation::report::{AllocationReportSummary, InstitutionRow};
pub use config::{AppConfig, BudgetPolicy, ConfigError, GroqConfig};
pub use error::ValidationError;
