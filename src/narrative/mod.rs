//! Narrative generation
//!
//! Turns a classification into a short analysis and a list of
//! recommendations. Text comes from a `TextGenerator` when one is
//! configured; any failure falls back to the deterministic templates in
//! `fallback`, independently for each of the two parts.

pub mod fallback;
pub mod parser;
pub mod prompts;

use crate::errors::NarrativeError;
use crate::growth::{ClassificationResult, Gender, GrowthInput, StuntingStatus};
use async_trait::async_trait;
use parser::MIN_RECOMMENDATIONS;
use tracing::{debug, warn};

/// Fallible text-generation capability
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Produce text for `prompt`
    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError>;

    /// Short name for logs
    fn name(&self) -> &str;
}

/// Where a piece of narrative came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NarrativeSource {
    Generated,
    Template,
}

/// Analysis text plus recommendations, ready for the report
#[derive(Debug, Clone, PartialEq)]
pub struct NarrativeResult {
    pub analysis_text: String,
    pub recommendations: Vec<String>,
    pub analysis_source: NarrativeSource,
    pub recommendations_source: NarrativeSource,
}

/// Produces narrative for a classification, falling back to templates
pub struct Narrator {
    generator: Option<Box<dyn TextGenerator>>,
}

impl Narrator {
    /// Narrator backed by a generative service
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self {
            generator: Some(generator),
        }
    }

    /// Narrator that only uses templates
    pub fn offline() -> Self {
        Self { generator: None }
    }

    pub fn is_offline(&self) -> bool {
        self.generator.is_none()
    }

    async fn generate(&self, prompt: &str) -> Result<String, NarrativeError> {
        match &self.generator {
            Some(generator) => {
                debug!(generator = generator.name(), "requesting generated text");
                generator.generate(prompt).await
            }
            None => Err(NarrativeError::Disabled),
        }
    }

    /// Generated analysis; errors on transport failure or blank text
    pub async fn generate_analysis(
        &self,
        input: &GrowthInput,
        result: &ClassificationResult,
    ) -> Result<String, NarrativeError> {
        let prompt = prompts::analysis_prompt(input, result);
        let text = self.generate(&prompt).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(NarrativeError::EmptyResponse);
        }
        Ok(text.to_string())
    }

    /// Generated recommendations; errors when fewer than three lines parse
    pub async fn generate_recommendations(
        &self,
        status: StuntingStatus,
        age_months: u32,
        bmi: f64,
        gender: Gender,
    ) -> Result<Vec<String>, NarrativeError> {
        let prompt = prompts::recommendations_prompt(status, age_months, bmi, gender);
        let text = self.generate(&prompt).await?;

        let mut recommendations = parser::parse_bullets(&text);
        if recommendations.len() < MIN_RECOMMENDATIONS {
            return Err(NarrativeError::TooFewRecommendations {
                found: recommendations.len(),
                required: MIN_RECOMMENDATIONS,
            });
        }

        fallback::fill_missing_guidance(&mut recommendations, age_months, bmi);
        Ok(recommendations)
    }

    /// Analysis and recommendations; never fails
    pub async fn narrate(
        &self,
        input: &GrowthInput,
        result: &ClassificationResult,
    ) -> NarrativeResult {
        let (analysis_text, analysis_source) = match self.generate_analysis(input, result).await {
            Ok(text) => (text, NarrativeSource::Generated),
            Err(err) => {
                self.log_fallback("analysis", &err);
                (fallback::analysis(input, result), NarrativeSource::Template)
            }
        };

        let (recommendations, recommendations_source) = match self
            .generate_recommendations(result.status, input.age_months(), result.bmi, input.gender())
            .await
        {
            Ok(recs) => (recs, NarrativeSource::Generated),
            Err(err) => {
                self.log_fallback("recommendations", &err);
                (
                    fallback::recommendations(result.status, input.age_months(), result.bmi),
                    NarrativeSource::Template,
                )
            }
        };

        NarrativeResult {
            analysis_text,
            recommendations,
            analysis_source,
            recommendations_source,
        }
    }

    fn log_fallback(&self, part: &str, err: &NarrativeError) {
        if matches!(err, NarrativeError::Disabled) {
            debug!(part, "offline, using template");
        } else {
            warn!(part, error = %err, "generation failed, using template");
        }
    }
}
