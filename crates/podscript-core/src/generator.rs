//! PodcastGenerator — the generation flow behind the submit button.
//! Validate, call the generation service, sectionize. Every failure is caught here and collapsed
//! into one user-facing message; diagnostics go to the log only.

use crate::form::{FormError, PodcastForm};
use crate::generation::{GenerationClient, GenerationError};
use crate::sectionizer::{sectionize, SectionedScript};

/// Shown for any transport or service failure.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to generate podcast script. Please try again!";

#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    #[error(transparent)]
    Validation(#[from] FormError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl GenerateError {
    /// Message safe to show to the user. Generation failures never expose their details.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Validation(e) => e.to_string(),
            GenerateError::Generation(_) => GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, GenerateError::Validation(_))
    }
}

pub struct PodcastGenerator {
    client: GenerationClient,
}

impl PodcastGenerator {
    pub fn new(client: GenerationClient) -> Self {
        Self { client }
    }

    /// Runs one generation. A form that fails validation never reaches the service.
    pub async fn generate(&self, form: &PodcastForm) -> Result<SectionedScript, GenerateError> {
        let request = form.validate()?;

        let lines = self.client.generate(&request).await.map_err(|e| {
            tracing::error!("[GENERATOR] Script generation failed: {}", e);
            GenerateError::Generation(e)
        })?;

        let script = sectionize(lines);
        tracing::info!(
            "[GENERATOR] Script sectioned: {} intro, {} main, {} conclusion",
            script.intro.len(),
            script.main_discussion.len(),
            script.conclusion.len()
        );
        Ok(script)
    }
}
