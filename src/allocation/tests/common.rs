use std::sync::{Arc, Mutex};

use crate::allocation::enhancer::{EnhancementPrompt, EnhancerError, TextEnhancer};
use crate::allocation::{Criterion, CriterionWeights, InstitutionRecord};
use crate::config::BudgetPolicy;

pub(super) fn weights() -> CriterionWeights {
    CriterionWeights::standard()
}

pub(super) fn policy() -> BudgetPolicy {
    BudgetPolicy {
        total_budget: 10_000_000.0,
        min_allocation: 500_000.0,
    }
}

pub(super) fn record_with_scores(
    name: &str,
    infrastructure: f64,
    faculty: f64,
    research: f64,
    students: f64,
    placement: f64,
) -> InstitutionRecord {
    InstitutionRecord::new(name)
        .with_metric(Criterion::Infrastructure, infrastructure)
        .with_metric(Criterion::Faculty, faculty)
        .with_metric(Criterion::Research, research)
        .with_metric(Criterion::Students, students)
        .with_metric(Criterion::Placement, placement)
}

pub(super) fn uniform_record(name: &str, score: f64) -> InstitutionRecord {
    record_with_scores(name, score, score, score, score, score)
}

/// Collaborator stub replying with a fixed body, or failing when none is
/// scripted. Clones share the captured prompt log so tests can keep a
/// handle after boxing the stub.
#[derive(Debug, Clone)]
pub(super) struct ScriptedEnhancer {
    reply: Option<String>,
    captured: Arc<Mutex<Vec<EnhancementPrompt>>>,
}

impl ScriptedEnhancer {
    pub(super) fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn failing() -> Self {
        Self {
            reply: None,
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(super) fn captured(&self) -> Vec<EnhancementPrompt> {
        self.captured
            .lock()
            .expect("prompt mutex poisoned")
            .clone()
    }
}

impl TextEnhancer for ScriptedEnhancer {
    fn enhance_text(&self, prompt: &EnhancementPrompt) -> Result<String, EnhancerError> {
        self.captured
            .lock()
            .expect("prompt mutex poisoned")
            .push(prompt.clone());
        match &self.reply {
            Some(reply) => Ok(reply.clone()),
            None => Err(EnhancerError::Transport("connection refused".to_string())),
        }
    }
}
