use crate::config::credentials::ApiKey;
use crate::core::TextGenerator;
use crate::domain::model::RawCompletion;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const API_KEY_HEADER: &str = "x-goog-api-key";

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

/// Client for the Generative Language `generateContent` endpoint.
pub struct GeminiClient {
    client: Client,
    api_base: String,
    model: String,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(api_base: &str, model: &str, api_key: ApiKey) -> Result<Self> {
        validation::validate_url("api_base", api_base)?;
        validation::validate_non_empty_string("model", model)?;

        Ok(Self {
            client: Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_base, self.model)
    }

    fn extract_text(response: GenerateContentResponse) -> Option<String> {
        let candidate = response.candidates.into_iter().next()?;
        if let Some(reason) = &candidate.finish_reason {
            tracing::debug!("Candidate finish reason: {}", reason);
        }

        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|part| part.text)
            .collect();

        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<RawCompletion> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let url = self.endpoint();
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        let payload = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiErrorBody>(&payload)
                .map(|body| body.error.message)
                .unwrap_or(payload);
            return Err(EtlError::UpstreamStatusError {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&payload)?;
        let text = Self::extract_text(parsed).ok_or_else(|| EtlError::EmptyUpstreamResponse {
            model: self.model.clone(),
        })?;

        tracing::debug!("Received {} bytes of generated text", text.len());

        Ok(RawCompletion {
            text,
            model: self.model.clone(),
        })
    }
}
