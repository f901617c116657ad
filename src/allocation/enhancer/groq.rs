use std::fmt::Debug;
use std::fmt::Write as _;

use serde::Deserialize;
use serde_json::json;

use crate::allocation::domain::display_score;
use crate::allocation::Criterion;
use crate::config::GroqConfig;

/// Structured request handed to a text-generation collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementPrompt {
    pub institution: String,
    pub criterion_scores: Vec<(Criterion, Option<f64>)>,
    pub basic_recommendations: Vec<String>,
    pub currency_marker: String,
}

impl EnhancementPrompt {
    /// User-message text shared by every collaborator implementation.
    pub fn render(&self) -> String {
        let mut prompt = String::new();
        writeln!(
            prompt,
            "As an educational budget allocation expert, provide detailed recommendations for improving the following institution:"
        )
        .expect("write preamble");
        writeln!(prompt).expect("write spacer");
        writeln!(prompt, "Institution Name: {}", self.institution).expect("write name");
        writeln!(prompt).expect("write spacer");
        writeln!(prompt, "Current Scores:").expect("write scores heading");
        for &(criterion, score) in &self.criterion_scores {
            let shown = score
                .map(display_score)
                .unwrap_or_else(|| "N/A".to_string());
            let label = criterion.label();
            let mut chars = label.chars();
            let capitalized = match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            };
            writeln!(prompt, "- {}: {}/10", capitalized, shown).expect("write score line");
        }
        writeln!(prompt).expect("write spacer");
        writeln!(prompt, "Basic Recommendations:").expect("write basics heading");
        if self.basic_recommendations.is_empty() {
            writeln!(prompt, "None").expect("write none");
        } else {
            writeln!(prompt, "{}", self.basic_recommendations.join(", ")).expect("write basics");
        }
        writeln!(prompt).expect("write spacer");
        writeln!(
            prompt,
            "Please provide 3-5 specific, actionable recommendations that would help this institution improve its scores and budget allocation. For each recommendation, include:"
        )
        .expect("write ask");
        writeln!(prompt, "1. A clear action item").expect("write item");
        writeln!(prompt, "2. Expected impact on scores").expect("write item");
        writeln!(prompt, "3. Implementation timeframe (short/medium/long term)")
            .expect("write item");
        writeln!(prompt).expect("write spacer");
        writeln!(
            prompt,
            "Important: When mentioning any monetary values, always use \"{}\" instead of $ or other currency symbols.",
            self.currency_marker
        )
        .expect("write currency rule");
        writeln!(prompt).expect("write spacer");
        writeln!(prompt, "Format each recommendation as a bullet point.").expect("write format");
        prompt
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnhancerError {
    #[error("text-generation request failed: {0}")]
    Transport(String),
    #[error("text-generation service returned status {0}")]
    Status(u16),
    #[error("text-generation response was malformed: {0}")]
    MalformedResponse(String),
}

/// Capability seam for external prose generation. Implementations must be
/// stateless across calls; each enhancement request is independent.
pub trait TextEnhancer: Debug {
    fn enhance_text(&self, prompt: &EnhancementPrompt) -> Result<String, EnhancerError>;
}

const SYSTEM_PROMPT: &str =
    "You are an expert in higher education budget allocation and institutional improvement.";

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

/// Text enhancer backed by the Groq OpenAI-compatible chat endpoint.
///
/// One synchronous request per enhancement, no retries; callers absorb any
/// failure by falling back to rule-based recommendations.
#[derive(Debug)]
pub struct GroqTextEnhancer {
    client: reqwest::blocking::Client,
    config: GroqConfig,
}

impl GroqTextEnhancer {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            config,
        }
    }
}

impl TextEnhancer for GroqTextEnhancer {
    fn enhance_text(&self, prompt: &EnhancementPrompt) -> Result<String, EnhancerError> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": SYSTEM_PROMPT },
                { "role": "user", "content": prompt.render() },
            ],
            "temperature": 0.7,
            "max_tokens": 1024,
        });

        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .map_err(|err| EnhancerError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnhancerError::Status(status.as_u16()));
        }

        let body: ChatCompletionResponse = response
            .json()
            .map_err(|err| EnhancerError::MalformedResponse(err.to_string()))?;

        let content = body
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                EnhancerError::MalformedResponse("response carried no choices".to_string())
            })?;

        Ok(content)
    }
}
