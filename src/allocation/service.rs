use tracing::debug;

use super::domain::{round2, CriterionWeights, InstitutionRecord, InstitutionResult};
use super::engine::AllocationEngine;
use super::enhancer::{GroqTextEnhancer, RecommendationEnhancer, TextEnhancer};
use super::recommendations::RecommendationGenerator;
use super::scoring::ScoreCalculator;
use crate::config::AppConfig;
use crate::error::ValidationError;

/// Service composing the score calculator, allocation engine, and
/// recommendation pipeline over a batch of institution records.
pub struct AllocationService {
    calculator: ScoreCalculator,
    engine: AllocationEngine,
    generator: RecommendationGenerator,
    enhancer: RecommendationEnhancer,
}

impl AllocationService {
    pub fn new(
        weights: CriterionWeights,
        engine: AllocationEngine,
        enhancer: RecommendationEnhancer,
    ) -> Self {
        Self {
            calculator: ScoreCalculator::new(weights.clone()),
            engine,
            generator: RecommendationGenerator::new(weights),
            enhancer,
        }
    }

    /// Standard rubric wired from loaded configuration; a Groq enhancer is
    /// attached only when credentials are present.
    pub fn from_config(config: &AppConfig) -> Self {
        let enhancer: Option<Box<dyn TextEnhancer>> = config
            .groq
            .clone()
            .map(|groq| Box::new(GroqTextEnhancer::new(groq)) as Box<dyn TextEnhancer>);

        Self::new(
            CriterionWeights::standard(),
            AllocationEngine::new(config.budget),
            RecommendationEnhancer::new(enhancer, config.currency_marker.clone()),
        )
    }

    /// Analyze a batch of records, in input order.
    ///
    /// The batch fails atomically: any validation error aborts the run with
    /// no partial result set. An empty batch is a valid request and yields
    /// an empty result set. Enhancement failures never surface; each
    /// institution falls back to its rule-based recommendations.
    pub fn analyze(
        &self,
        records: &[InstitutionRecord],
    ) -> Result<Vec<InstitutionResult>, AllocationServiceError> {
        if records.is_empty() {
            debug!("allocation batch was empty");
            return Ok(Vec::new());
        }

        let breakdowns = records
            .iter()
            .map(|record| self.calculator.score(record))
            .collect::<Result<Vec<_>, _>>()?;

        let totals: Vec<f64> = breakdowns
            .iter()
            .map(|breakdown| breakdown.total_score)
            .collect();
        let allocations = self.engine.allocate(&totals)?;

        let mut results = Vec::with_capacity(records.len());
        for ((record, breakdown), allocation) in
            records.iter().zip(breakdowns).zip(allocations)
        {
            let basic = self.generator.recommend(record)?;
            let recommendations =
                self.enhancer
                    .enhance(record, self.calculator.weights(), basic);

            results.push(InstitutionResult {
                name: record.display_name().to_string(),
                total_score: round2(breakdown.total_score),
                budget_allocation: round2(allocation),
                recommendations,
                components: breakdown.components,
            });
        }

        debug!(institutions = results.len(), "analyzed allocation batch");
        Ok(results)
    }
}

/// Error raised by the allocation service.
#[derive(Debug, thiserror::Error)]
pub enum AllocationServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
