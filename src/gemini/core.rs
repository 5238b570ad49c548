use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ai::chat::RemoteError;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "model")]
    Model,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Content {
    pub role: Role,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn new(role: Role, text: &str) -> Self {
        Content {
            role,
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Serialize, Debug)]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
}

// Only the fields needed to get the reply text out are modeled here,
// everything else in the response (safety ratings, usage, etc.) is
// ignored.
#[derive(Deserialize, Debug)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorBody {
    message: String,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    error: ApiErrorBody,
}

/// Run a single `generateContent` call over the full conversation
/// `contents` and return the text of the first candidate.
pub async fn generate_content(
    client: &reqwest::Client,
    contents: &[Content],
    api_hostname: &str,
    api_key: &str,
    model: &str,
    timeout: Duration,
) -> Result<String, RemoteError> {
    let url = format!(
        "{}/v1beta/models/{}:generateContent",
        api_hostname.trim_end_matches("/"),
        model
    );
    let response = client
        .post(url)
        .header("x-goog-api-key", api_key)
        .header("Content-Type", "application/json")
        .timeout(timeout)
        .json(&GenerateContentRequest { contents })
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Fall back to the raw body when the error isn't the usual
        // `{"error": {...}}` shape
        let message = serde_json::from_str::<ApiErrorResponse>(&body)
            .map(|e| e.error.message)
            .unwrap_or(body);
        tracing::error!("Gemini API error {}: {}", status, message);
        return Err(RemoteError::Api {
            status: status.as_u16(),
            message,
        });
    }

    let parsed: GenerateContentResponse = serde_json::from_str(&body)
        .map_err(|e| RemoteError::InvalidResponse(format!("{}: {}", e, body)))?;

    let content = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .ok_or_else(|| RemoteError::InvalidResponse(format!("No candidates in response: {}", body)))?;

    Ok(content
        .parts
        .into_iter()
        .map(|p| p.text)
        .collect::<Vec<_>>()
        .join(""))
}
