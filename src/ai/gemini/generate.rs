use super::client::GeminiHttpClient;
use super::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    ResponseSchema,
};
use crate::ai::PromptGenerationService;
use crate::models::PromptParts;
use crate::{prompts, Error, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Schema field descriptions sent with every generation request. Wire keys
/// and wording follow the generation endpoint contract.
const SCHEMA_FIELDS: [(&str, &str); 4] = [
    (
        "background",
        "Deskripsi detail tentang latar belakang atau lingkungan adegan. \
         Buatlah menjadi hidup dan menarik.",
    ),
    (
        "subjek",
        "Deskripsi yang sangat detail tentang subjek utama, yang merupakan karakter muda. \
         Jelaskan penampilan, pakaian, ekspresi, dan gaya mereka.",
    ),
    (
        "pose",
        "Deskripsi detail tentang pose atau tindakan karakter. \
         Haruskah dinamis, tenang, termenung, atau ceria?",
    ),
    (
        "kamera",
        "Deskripsi tentang pengaturan kamera, termasuk jenis bidikan, sudut, dan pencahayaan. \
         Selalu tentukan lensa berkualitas tinggi (misalnya, lensa prime, f/1.8, 85mm) dan \
         pencahayaan sinematik untuk menghasilkan gambar yang tajam, detail, dan berkualitas \
         profesional.",
    ),
];

/// Expands an idea into the four prompt fields via Gemini structured output.
pub struct GeminiPromptClient {
    http: GeminiHttpClient,
}

impl GeminiPromptClient {
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

    fn parse_parts(text: &str) -> Result<PromptParts> {
        let parts: PromptParts = serde_json::from_str(text).map_err(|e| {
            Error::Generation(format!("Invalid JSON in generation response: {}", e))
        })?;

        // The schema marks all four fields required, but the model can still
        // return empty strings; treat those as a malformed response.
        let complete = !parts.background.is_empty()
            && !parts.subject.is_empty()
            && !parts.pose.is_empty()
            && !parts.camera.is_empty();
        if !complete {
            return Err(Error::Generation(
                "Generation response is missing one or more prompt fields".to_string(),
            ));
        }

        Ok(parts)
    }
}

#[async_trait]
impl PromptGenerationService for GeminiPromptClient {
    async fn generate_prompt_parts(&self, idea: &str) -> Result<PromptParts> {
        if idea.trim().is_empty() {
            return Err(Error::Validation("Idea must not be blank".to_string()));
        }

        let request = GenerateContentRequest {
            system_instruction: Some(Content {
                role: None,
                parts: vec![Part {
                    text: prompts::GENERATION_SYSTEM.to_string(),
                }],
            }),
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: prompts::render(prompts::GENERATION_USER, &[("idea", idea)]),
                }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(ResponseSchema::object(&SCHEMA_FIELDS)),
            }),
        };

        let response: GenerateContentResponse = self
            .http
            .generate_content(&request)
            .await
            .map_err(|e| Error::Generation(e.to_string()))?;

        let text = response
            .first_text()
            .ok_or_else(|| Error::Generation("No text in generation response".to_string()))?;

        Self::parse_parts(text.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::gemini::test_support;
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DEFAULT_MODEL: &str = "gemini-2.5-flash";

    fn make_client(server: &MockServer, api_key: &str, model: &str) -> GeminiPromptClient {
        GeminiPromptClient::new(api_key.to_string(), model.to_string())
            .with_base_url(server.uri())
    }

    fn parts_json() -> String {
        serde_json::json!({
            "background": "taman kota saat senja",
            "subjek": "seorang gadis muda membaca buku",
            "pose": "duduk di bangku taman",
            "kamera": "lensa 85mm, f/1.8, pencahayaan sinematik"
        })
        .to_string()
    }

    #[tokio::test]
    async fn test_generate_parses_structured_response() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .and(body_string_contains("responseSchema"))
            .and(body_string_contains("\"responseMimeType\":\"application/json\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": parts_json() }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let parts = client
            .generate_prompt_parts("gadis membaca saat senja")
            .await
            .unwrap();
        assert_eq!(parts.subject, "seorang gadis muda membaca buku");
        assert_eq!(parts.camera, "lensa 85mm, f/1.8, pencahayaan sinematik");
    }

    #[tokio::test]
    async fn test_blank_idea_is_rejected_without_network_call() {
        let server = MockServer::start().await;
        // No mock mounted: a request would fail with a connection-level error
        // instead of the validation error asserted here.
        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_prompt_parts("   ").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn test_api_error_returns_generation_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
            .mount(&server)
            .await;

        let client = make_client(&server, "bad-key", DEFAULT_MODEL);

        let err = client.generate_prompt_parts("sebuah ide").await.unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[tokio::test]
    async fn test_missing_field_is_a_format_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"background\": \"taman\", \"subjek\": \"gadis\", \"pose\": \"duduk\"}" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_prompt_parts("sebuah ide").await.unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[tokio::test]
    async fn test_empty_field_is_a_format_error() {
        let server = MockServer::start().await;

        test_support::post_path_regex(test_support::GENERATE_CONTENT_PATH_REGEX)
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": "{\"background\": \"\", \"subjek\": \"gadis\", \"pose\": \"duduk\", \"kamera\": \"85mm\"}" }]
                    }
                }]
            })))
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", DEFAULT_MODEL);

        let err = client.generate_prompt_parts("sebuah ide").await.unwrap_err();
        assert!(matches!(err, Error::Generation(_)));
    }

    #[tokio::test]
    async fn test_generate_strips_models_prefix_from_model_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "candidates": [{
                    "content": {
                        "parts": [{ "text": parts_json() }]
                    }
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = make_client(&server, "test-key", "models/gemini-2.5-flash");

        client.generate_prompt_parts("sebuah ide").await.unwrap();
    }
}
