//! Gemini integration via REST API (no SDK dependency)

use crate::core::Config;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the generation endpoints
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("GEMINI_API_KEY is not configured")]
    NotConfigured,

    #[error("request to generation provider failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("generation provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("malformed provider response: {0}")]
    MalformedResponse(String),
}

/// Client for the Gemini `generateContent` endpoint
///
/// Built once at startup and shared through the application state;
/// the underlying `reqwest::Client` pools connections internally.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            text_model: config.gemini_text_model.clone(),
            image_model: config.gemini_image_model.clone(),
        }
    }

    /// Generate a menu description for a dish
    pub async fn generate_description(
        &self,
        dish_name: &str,
        category: &str,
    ) -> Result<String, GenerationError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": description_prompt(dish_name, category) }] }]
        });

        let response = self.generate(&self.text_model, body).await?;
        let text = response.first_text().ok_or_else(|| {
            GenerationError::MalformedResponse("no text part in candidates".to_string())
        })?;
        Ok(text.trim().to_string())
    }

    /// Generate a dish photo, returned as a PNG data URI
    pub async fn generate_image(
        &self,
        dish_name: &str,
        description: &str,
    ) -> Result<String, GenerationError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": image_prompt(dish_name, description) }] }],
            "generationConfig": { "responseMimeType": "image/png" }
        });

        let response = self.generate(&self.image_model, body).await?;
        let data = response.first_inline_data().ok_or_else(|| {
            GenerationError::MalformedResponse("no inline image data in candidates".to_string())
        })?;
        Ok(format!("data:image/png;base64,{data}"))
    }

    async fn generate(
        &self,
        model: &str,
        body: serde_json::Value,
    ) -> Result<GenerateContentResponse, GenerationError> {
        let api_key = self.api_key.as_deref().ok_or(GenerationError::NotConfigured)?;
        let url = format!("{}/v1beta/models/{}:generateContent", self.base_url, model);

        let response = self
            .http
            .post(&url)
            .query(&[("key", api_key)])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let payload = response.text().await.unwrap_or_default();
            // Provider errors come as {"error": {"message": ...}}
            let message = serde_json::from_str::<serde_json::Value>(&payload)
                .ok()
                .and_then(|v| v["error"]["message"].as_str().map(String::from))
                .unwrap_or(payload);
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| GenerationError::MalformedResponse(e.to_string()))
    }
}

fn description_prompt(dish_name: &str, category: &str) -> String {
    format!(
        "Write a short, appealing menu description (2-3 sentences) for a dish named '{dish_name}' in the category '{category}'. Make it sound mouthwatering and creative."
    )
}

fn image_prompt(dish_name: &str, description: &str) -> String {
    format!(
        "Create a professional, high-quality photo of {dish_name}. {description}. The image should look like perfect food photography with great lighting and presentation."
    )
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
    #[serde(default, rename = "inlineData")]
    inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
struct InlineData {
    data: String,
}

impl GenerateContentResponse {
    fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .text
            .as_deref()
    }

    fn first_inline_data(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()?
            .inline_data
            .as_ref()
            .map(|d| d.data.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_prompt_wording() {
        let prompt = description_prompt("Truffle Fries", "Appetizers");
        assert_eq!(
            prompt,
            "Write a short, appealing menu description (2-3 sentences) for a dish named 'Truffle Fries' in the category 'Appetizers'. Make it sound mouthwatering and creative."
        );
    }

    #[test]
    fn image_prompt_wording() {
        let prompt = image_prompt("Truffle Fries", "Crispy fries with shaved truffle");
        assert_eq!(
            prompt,
            "Create a professional, high-quality photo of Truffle Fries. Crispy fries with shaved truffle. The image should look like perfect food photography with great lighting and presentation."
        );
    }

    #[test]
    fn parses_text_response() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"text": "  Golden fries kissed with truffle oil.  "}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            response.first_text().unwrap().trim(),
            "Golden fries kissed with truffle oil."
        );
        assert!(response.first_inline_data().is_none());
    }

    #[test]
    fn parses_inline_image_response() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [{"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}]
                }
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.first_inline_data(), Some("aGVsbG8="));
        assert!(response.first_text().is_none());
    }

    #[test]
    fn empty_candidates_yield_none() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(response.first_text().is_none());
        assert!(response.first_inline_data().is_none());
    }
}
