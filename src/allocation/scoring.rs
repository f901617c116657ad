use serde::{Deserialize, Serialize};

use super::domain::{Criterion, CriterionWeights, InstitutionRecord};
use crate::error::ValidationError;

/// Discrete contribution of one criterion, allowing transparent audits of
/// how a composite score came together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub criterion: Criterion,
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Composite score for one institution on the 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total_score: f64,
    pub components: Vec<ScoreComponent>,
}

/// Stateless calculator applying the rubric weights to a record.
#[derive(Debug, Clone)]
pub struct ScoreCalculator {
    weights: CriterionWeights,
}

impl ScoreCalculator {
    pub fn new(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &CriterionWeights {
        &self.weights
    }

    /// Weighted total over the criteria the institution reported.
    ///
    /// Absent criteria are skipped rather than treated as zero, so an
    /// institution is scored only on what it reports. Values outside the
    /// nominal 0-10 range are not clamped; they flow into the total as-is.
    pub fn score(&self, record: &InstitutionRecord) -> Result<ScoreBreakdown, ValidationError> {
        let mut total_score = 0.0;
        let mut components = Vec::new();

        for (criterion, weight) in self.weights.iter() {
            if let Some(value) = record.metric(criterion)? {
                let contribution = value * weight;
                total_score += contribution;
                components.push(ScoreComponent {
                    criterion,
                    value,
                    weight,
                    contribution,
                });
            }
        }

        Ok(ScoreBreakdown {
            total_score,
            components,
        })
    }
}
