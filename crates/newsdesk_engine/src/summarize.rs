use newsdesk_core::SummaryInput;
use newsdesk_logging::{newsdesk_info, newsdesk_warn};
use serde::Deserialize;
use serde_json::json;

use crate::fetch::join_endpoint;
use crate::FetchSettings;

/// Passed to the provider when an article has neither content nor description.
pub const NO_CONTENT_MARKER: &str = "No additional content provided.";

const SYSTEM_INSTRUCTION: &str = "You are an expert news summarizer. Your summaries are clear, \
concise, and capture the essence of the article for a general audience.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SummaryError {
    #[error("AI summaries are not configured: set GEMINI_API_KEY.")]
    MissingCredential,
    #[error("The AI summary could not be generated at this time ({0}). Please try again later.")]
    Provider(String),
    #[error("The AI returned an empty summary. Please try again later.")]
    EmptyResponse,
}

#[async_trait::async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, input: &SummaryInput) -> Result<String, SummaryError>;
}

/// Prompt for one article: the title plus the best available body.
pub fn build_prompt(input: &SummaryInput) -> String {
    let material = input.material().unwrap_or(NO_CONTENT_MARKER);
    format!(
        "Provide a concise and engaging summary of the following news article. \
Focus on the key information that a reader would want to know.\n\n\
Title: {}\nContent: {}",
        input.title.trim(),
        material
    )
}

#[derive(Debug, Clone)]
pub struct GeminiSettings {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub fetch: FetchSettings,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: None,
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

/// Summarizer backed by the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiSummarizer {
    settings: GeminiSettings,
}

impl GeminiSummarizer {
    pub fn new(settings: GeminiSettings) -> Self {
        Self { settings }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key().is_some()
    }

    fn api_key(&self) -> Option<&str> {
        self.settings
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[async_trait::async_trait]
impl Summarizer for GeminiSummarizer {
    async fn summarize(&self, input: &SummaryInput) -> Result<String, SummaryError> {
        let api_key = self.api_key().ok_or(SummaryError::MissingCredential)?;
        let endpoint = join_endpoint(
            &self.settings.base_url,
            &format!("v1beta/models/{}:generateContent", self.settings.model),
        )
        .map_err(|err| SummaryError::Provider(format!("invalid endpoint: {err}")))?;

        let body = json!({
            "systemInstruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "role": "user", "parts": [{ "text": build_prompt(input) }] }],
        });

        let client = self
            .settings
            .fetch
            .build_client()
            .map_err(|err| SummaryError::Provider(err.to_string()))?;
        newsdesk_info!("requesting summary for {:?}", input.title);
        let response = client
            .post(endpoint.as_str())
            .header("x-goog-api-key", api_key)
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|err| {
                newsdesk_warn!("summary request failed: {}", err);
                SummaryError::Provider(if err.is_timeout() {
                    "timed out".to_string()
                } else {
                    "network error".to_string()
                })
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            newsdesk_warn!("summary provider answered {}: {}", status, detail);
            return Err(SummaryError::Provider(format!("status {}", status.as_u16())));
        }

        let raw = response
            .bytes()
            .await
            .map_err(|err| SummaryError::Provider(err.to_string()))?;
        let parsed: GenerateResponse = serde_json::from_slice(&raw)
            .map_err(|err| SummaryError::Provider(format!("unexpected response: {err}")))?;

        let text = parsed
            .candidates
            .into_iter()
            .filter_map(|candidate| candidate.content)
            .flat_map(|content| content.parts)
            .filter_map(|part| part.text)
            .collect::<Vec<_>>()
            .join("");
        let text = text.trim();
        if text.is_empty() {
            return Err(SummaryError::EmptyResponse);
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(description: Option<&str>, content: Option<&str>) -> SummaryInput {
        SummaryInput {
            title: "Robots learn to fold laundry".to_string(),
            description: description.map(ToOwned::to_owned),
            content: content.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn prompt_prefers_content() {
        let prompt = build_prompt(&input(Some("teaser"), Some("full body")));
        assert!(prompt.contains("Title: Robots learn to fold laundry"));
        assert!(prompt.contains("Content: full body"));
        assert!(!prompt.contains("teaser"));
    }

    #[test]
    fn prompt_falls_back_to_description_then_marker() {
        assert!(build_prompt(&input(Some("teaser"), None)).contains("Content: teaser"));
        assert!(build_prompt(&input(None, None)).contains(NO_CONTENT_MARKER));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let summarizer = GeminiSummarizer::new(GeminiSettings {
            api_key: Some("  ".to_string()),
            ..GeminiSettings::default()
        });
        assert!(!summarizer.is_configured());
    }
}
