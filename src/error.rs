use crate::allocation::Criterion;

/// Input problems that abort a batch before any results are produced.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("criterion {criterion:?} for \"{institution}\" is not numeric: \"{value}\"")]
    NonNumericMetric {
        institution: String,
        criterion: Criterion,
        value: String,
    },
    #[error("allocation requires at least one institution record")]
    EmptyBatch,
}
