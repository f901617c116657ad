pub mod groq;

pub use groq::{EnhancementPrompt, EnhancerError, GroqTextEnhancer, TextEnhancer};

use tracing::warn;

use super::domain::{CriterionWeights, InstitutionRecord};

/// Optional post-processing of rule-based recommendations through an
/// external text-generation collaborator.
///
/// The enhancer never fails toward the caller: with no collaborator
/// configured the basic list passes through untouched, and any collaborator
/// failure is logged and absorbed the same way.
#[derive(Debug)]
pub struct RecommendationEnhancer {
    enhancer: Option<Box<dyn TextEnhancer>>,
    currency_marker: String,
}

impl RecommendationEnhancer {
    pub fn new(enhancer: Option<Box<dyn TextEnhancer>>, currency_marker: impl Into<String>) -> Self {
        Self {
            enhancer,
            currency_marker: currency_marker.into(),
        }
    }

    /// Passthrough configuration; `enhance` returns its input unchanged.
    pub fn passthrough() -> Self {
        Self::new(None, "Rs.")
    }

    pub fn is_configured(&self) -> bool {
        self.enhancer.is_some()
    }

    pub fn enhance(
        &self,
        record: &InstitutionRecord,
        weights: &CriterionWeights,
        basic: Vec<String>,
    ) -> Vec<String> {
        let Some(enhancer) = &self.enhancer else {
            return basic;
        };

        let prompt = self.build_prompt(record, weights, &basic);
        match enhancer.enhance_text(&prompt) {
            Ok(content) => self.postprocess(&content),
            Err(err) => {
                warn!(
                    institution = record.display_name(),
                    error = %err,
                    "text enhancement failed; keeping rule-based recommendations"
                );
                basic
            }
        }
    }

    fn build_prompt(
        &self,
        record: &InstitutionRecord,
        weights: &CriterionWeights,
        basic: &[String],
    ) -> EnhancementPrompt {
        let criterion_scores = weights
            .iter()
            .map(|(criterion, _)| (criterion, record.metric(criterion).ok().flatten()))
            .collect();

        EnhancementPrompt {
            institution: record.display_name().to_string(),
            criterion_scores,
            basic_recommendations: basic.to_vec(),
            currency_marker: self.currency_marker.clone(),
        }
    }

    /// Split the generated prose into trimmed non-empty lines and apply the
    /// currency-marker substitution. Presentation policy carried over from
    /// the published reports: dollar signs are rewritten to the configured
    /// local marker.
    fn postprocess(&self, content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.replace('$', &self.currency_marker))
            .collect()
    }
}
