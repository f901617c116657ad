use crate::config::BudgetPolicy;
use crate::error::ValidationError;

/// Highest attainable composite score; totals are normalized against it
/// before the performance pool is shared out.
const SCORE_SCALE: f64 = 10.0;

/// Converts a batch of composite scores into budget allocations.
///
/// Every institution is guaranteed the policy floor; the remainder of the
/// pool (`total_budget - min_allocation * count`) is handed out in
/// proportion to each institution's own normalized score. Known limitation:
/// the share is not normalized by the sum of scores across the batch, so
/// the allocations only sum to `total_budget` for score distributions that
/// happen to line up. The arithmetic is kept as published; changing it is
/// a stakeholder decision, not a code fix.
#[derive(Debug, Clone)]
pub struct AllocationEngine {
    policy: BudgetPolicy,
}

impl AllocationEngine {
    pub fn new(policy: BudgetPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BudgetPolicy {
        self.policy
    }

    /// Allocation per institution, in the order the scores were given.
    ///
    /// A pool smaller than `min_allocation * count` leaves the performance
    /// pool negative; the computation still runs and may yield under-floor
    /// allocations. An empty batch is rejected because there is no
    /// per-institution reserve to compute.
    pub fn allocate(&self, total_scores: &[f64]) -> Result<Vec<f64>, ValidationError> {
        if total_scores.is_empty() {
            return Err(ValidationError::EmptyBatch);
        }

        let count = total_scores.len() as f64;
        let performance_pool = self.policy.total_budget - self.policy.min_allocation * count;

        Ok(total_scores
            .iter()
            .map(|total_score| {
                let normalized_score = total_score / SCORE_SCALE;
                self.policy.min_allocation + normalized_score * performance_pool
            })
            .collect())
    }
}
