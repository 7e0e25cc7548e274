//! Generation client — posts the transcript and metadata to the external script generator.
//! One request, one response; the response must be a JSON array of script lines.

use crate::form::GenerationRequest;

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request: {0}")]
    Request(#[from] reqwest::Error),
    #[error("generation service {status}: {body}")]
    Service { status: u16, body: String },
    #[error("generation response parse: {0}")]
    Json(#[from] serde_json::Error),
}

/// Client bound to one configured generation endpoint.
#[derive(Debug, Clone)]
pub struct GenerationClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GenerationClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Sends `request` and returns the raw script lines in order.
    pub async fn generate(&self, request: &GenerationRequest) -> Result<Vec<String>, GenerationError> {
        tracing::info!(
            "[GENERATOR] Requesting script \"{}\" ({} min) from {}",
            request.title,
            request.length,
            self.endpoint
        );

        let res = self.http.post(&self.endpoint).json(request).send().await?;

        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(GenerationError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        let lines: Vec<String> = serde_json::from_str(&text)?;
        tracing::debug!("[GENERATOR] Received {} script lines", lines.len());
        Ok(lines)
    }
}
