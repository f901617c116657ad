use std::env;
use std::fmt;

/// Default pool reserved for one allocation round, in rupees.
const DEFAULT_TOTAL_BUDGET: f64 = 10_000_000.0;
/// Floor guaranteed to every institution regardless of score.
const DEFAULT_MIN_ALLOCATION: f64 = 500_000.0;
const DEFAULT_CURRENCY_MARKER: &str = "Rs.";
const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const DEFAULT_GROQ_MODEL: &str = "llama3-8b-8192";

/// Budget constants shared by every batch run through the engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetPolicy {
    pub total_budget: f64,
    pub min_allocation: f64,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            total_budget: DEFAULT_TOTAL_BUDGET,
            min_allocation: DEFAULT_MIN_ALLOCATION,
        }
    }
}

/// Credentials and endpoint for the Groq text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct GroqConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
}

/// Top-level configuration for the allocation engine.
///
/// Loaded once at startup; nothing here is mutated afterwards. A missing
/// `GROQ_API_KEY` is a valid state and simply disables enhancement.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub budget: BudgetPolicy,
    pub currency_marker: String,
    pub groq: Option<GroqConfig>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let total_budget = parse_amount("UGC_TOTAL_BUDGET", DEFAULT_TOTAL_BUDGET)?;
        let min_allocation = parse_amount("UGC_MIN_ALLOCATION", DEFAULT_MIN_ALLOCATION)?;

        let currency_marker =
            env::var("UGC_CURRENCY_MARKER").unwrap_or_else(|_| DEFAULT_CURRENCY_MARKER.to_string());

        let groq = env::var("GROQ_API_KEY").ok().map(|api_key| GroqConfig {
            api_key,
            api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            model: env::var("GROQ_MODEL").unwrap_or_else(|_| DEFAULT_GROQ_MODEL.to_string()),
        });

        Ok(Self {
            budget: BudgetPolicy {
                total_budget,
                min_allocation,
            },
            currency_marker,
            groq,
        })
    }
}

fn parse_amount(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => {
            let value = raw
                .trim()
                .parse::<f64>()
                .map_err(|_| ConfigError::InvalidAmount { key })?;
            if value <= 0.0 {
                return Err(ConfigError::InvalidAmount { key });
            }
            Ok(value)
        }
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAmount { key: &'static str },
    InvalidWeights { sum: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAmount { key } => {
                write!(f, "{} must be a positive currency amount", key)
            }
            ConfigError::InvalidWeights { sum } => {
                write!(f, "criterion weights must sum to 1.0, got {}", sum)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
