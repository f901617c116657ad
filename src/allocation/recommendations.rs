use super::domain::{display_score, CriterionWeights, InstitutionRecord};
use crate::error::ValidationError;

/// Below this a criterion needs active improvement.
const IMPROVE_THRESHOLD: f64 = 5.0;
/// Below this (and at or above the improve threshold) a criterion is worth
/// enhancing; at or above it no recommendation is raised.
const ENHANCE_THRESHOLD: f64 = 7.0;

/// Rule-based improvement suggestions derived from per-criterion scores.
#[derive(Debug, Clone)]
pub struct RecommendationGenerator {
    weights: CriterionWeights,
}

impl RecommendationGenerator {
    pub fn new(weights: CriterionWeights) -> Self {
        Self { weights }
    }

    /// One suggestion per underperforming criterion, in rubric order.
    /// An empty list means the institution performs adequately across the
    /// board and is a meaningful result, not a failure.
    pub fn recommend(&self, record: &InstitutionRecord) -> Result<Vec<String>, ValidationError> {
        let mut recommendations = Vec::new();

        for (criterion, _weight) in self.weights.iter() {
            let Some(score) = record.metric(criterion)? else {
                continue;
            };

            if score < IMPROVE_THRESHOLD {
                recommendations.push(format!(
                    "Improve {} (current score: {}/10)",
                    criterion.label(),
                    display_score(score)
                ));
            } else if score < ENHANCE_THRESHOLD {
                recommendations.push(format!(
                    "Consider enhancing {} (current score: {}/10)",
                    criterion.label(),
                    display_score(score)
                ));
            }
        }

        Ok(recommendations)
    }
}
