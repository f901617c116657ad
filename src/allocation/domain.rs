use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::error::ValidationError;

pub const UNKNOWN_INSTITUTION: &str = "Unknown Institution";

/// The five scored dimensions of institutional performance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    Infrastructure,
    Faculty,
    Research,
    Students,
    Placement,
}

impl Criterion {
    /// Fixed rubric order; recommendation output follows it.
    pub fn ordered() -> [Criterion; 5] {
        [
            Criterion::Infrastructure,
            Criterion::Faculty,
            Criterion::Research,
            Criterion::Students,
            Criterion::Placement,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Criterion::Infrastructure => "infrastructure",
            Criterion::Faculty => "faculty",
            Criterion::Research => "research",
            Criterion::Students => "students",
            Criterion::Placement => "placement",
        }
    }
}

/// Raw metric as supplied by the ingestion collaborator.
///
/// CSV sources hand over strings, JSON sources hand over numbers; both are
/// accepted and coerced at scoring time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
}

impl MetricValue {
    /// Coerce to a float the way the ingestion formats require. A decimal
    /// comma is accepted for CSV exports from locales that emit one.
    pub fn coerce(&self) -> Option<f64> {
        match self {
            MetricValue::Number(value) => Some(*value),
            MetricValue::Text(raw) => raw.trim().replace(',', ".").parse::<f64>().ok(),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        MetricValue::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        MetricValue::Text(value.to_string())
    }
}

/// One institution as submitted for an allocation round. Read-only input;
/// criteria the institution did not report are simply absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionRecord {
    pub name: Option<String>,
    pub metrics: HashMap<Criterion, MetricValue>,
}

impl InstitutionRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            metrics: HashMap::new(),
        }
    }

    pub fn unnamed() -> Self {
        Self {
            name: None,
            metrics: HashMap::new(),
        }
    }

    pub fn with_metric(mut self, criterion: Criterion, value: impl Into<MetricValue>) -> Self {
        self.metrics.insert(criterion, value.into());
        self
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_INSTITUTION)
    }

    /// Coerced value for one criterion, or `None` when the institution did
    /// not report it. Non-numeric input is a validation failure.
    pub fn metric(&self, criterion: Criterion) -> Result<Option<f64>, ValidationError> {
        match self.metrics.get(&criterion) {
            None => Ok(None),
            Some(value) => value.coerce().map(Some).ok_or_else(|| {
                ValidationError::NonNumericMetric {
                    institution: self.display_name().to_string(),
                    criterion,
                    value: match value {
                        MetricValue::Number(n) => n.to_string(),
                        MetricValue::Text(raw) => raw.clone(),
                    },
                }
            }),
        }
    }
}

/// Rubric weights, one per criterion, summing to 1.0 by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CriterionWeights {
    infrastructure: f64,
    faculty: f64,
    research: f64,
    students: f64,
    placement: f64,
}

impl CriterionWeights {
    /// The standard UGC rubric.
    pub fn standard() -> Self {
        Self {
            infrastructure: 0.25,
            faculty: 0.30,
            research: 0.20,
            students: 0.15,
            placement: 0.10,
        }
    }

    /// Custom rubric; rejected unless the shares are non-negative and sum
    /// to 1.0 (within floating-point tolerance).
    pub fn from_shares(
        infrastructure: f64,
        faculty: f64,
        research: f64,
        students: f64,
        placement: f64,
    ) -> Result<Self, ConfigError> {
        let shares = [infrastructure, faculty, research, students, placement];
        let sum: f64 = shares.iter().sum();
        if shares.iter().any(|share| *share < 0.0) || (sum - 1.0).abs() > 1e-9 {
            return Err(ConfigError::InvalidWeights { sum });
        }
        Ok(Self {
            infrastructure,
            faculty,
            research,
            students,
            placement,
        })
    }

    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Infrastructure => self.infrastructure,
            Criterion::Faculty => self.faculty,
            Criterion::Research => self.research,
            Criterion::Students => self.students,
            Criterion::Placement => self.placement,
        }
    }

    /// (criterion, weight) pairs in rubric order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, f64)> + '_ {
        Criterion::ordered()
            .into_iter()
            .map(move |criterion| (criterion, self.get(criterion)))
    }
}

impl Default for CriterionWeights {
    fn default() -> Self {
        Self::standard()
    }
}

/// Per-institution outcome of one allocation round, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstitutionResult {
    pub name: String,
    pub total_score: f64,
    pub budget_allocation: f64,
    pub recommendations: Vec<String>,
    pub components: Vec<super::scoring::ScoreComponent>,
}

/// Render a score the way report tables expect: whole numbers keep one
/// decimal ("3.0"), everything else prints as-is ("6.5", "7.25").
pub(crate) fn display_score(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

/// Presentation rounding to two decimals, applied at the service boundary.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
