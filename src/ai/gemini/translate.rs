use super::client::GeminiHttpClient;
use super::types::{Content, GenerateContentRequest, GenerateContentResponse, Part};
use crate::ai::TranslationService;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Translates Indonesian prompt fields to English via Gemini.
pub struct GeminiTranslateClient {
    http: GeminiHttpClient,
}

impl GeminiTranslateClient {
    pub fn new(api_key: String, model: String) -> Self {
        Self::new_with_client(api_key, model, reqwest::Client::new())
    }

    pub fn new_with_client(api_key: String, model: String, client: reqwest::Client) -> Self {
        Self {
            http: GeminiHttpClient::new_with_client(
                api_key,
                model,
                Duration::from_secs(30),
                client,
            ),
        }
    }

    #[cfg(test)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.http = self.http.with_base_url(base_url);
        self
    }
}

#[async_trait]
impl TranslationService for GeminiTranslateClient {
    async fn translate(&self, text: &str) -> Result<String> {
        // Empty fields short-circuit: no request, empty result.
        if text.is_empty() {
            return Ok(String::new());
        }

        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::TRANSLATE_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompts::render(prompts::TRANSLATE_USER, &[("text", text)]),
                }],
            }],
            generation_config: None,
        };

        let response: GenerateContentResponse = self
            .http
            .generate_content(&request)
            .await
            .map_err(|e| Error::Translation(e.to_string()))?;

        let translated = response
            .first_text()
            .ok_or_else(|| Error::Translation("No text in translation response".to_string()))?;

        Ok(translated.trim().to_string())
    }
}
