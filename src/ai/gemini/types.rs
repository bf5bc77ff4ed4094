//! Shared Gemini payload types used by the generation and translation modules.

use serde::{Deserialize, Serialize};

/// Gemini content container used in both requests and responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

/// Plain text content part. This tool never sends or receives inline media.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

/// Request envelope for `generateContent`.
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub system_instruction: Option<Content>,
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_mime_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_schema: Option<ResponseSchema>,
}

/// Structured-output schema constraint: an object with a fixed set of
/// required string properties.
#[derive(Debug, Serialize)]
pub struct ResponseSchema {
    #[serde(rename = "type")]
    pub schema_type: &'static str,
    pub properties: serde_json::Map<String, serde_json::Value>,
    pub required: Vec<&'static str>,
}

impl ResponseSchema {
    pub fn object(fields: &[(&'static str, &'static str)]) -> Self {
        let mut properties = serde_json::Map::new();
        for (name, description) in fields {
            properties.insert(
                (*name).to_string(),
                serde_json::json!({ "type": "STRING", "description": description }),
            );
        }
        Self {
            schema_type: "OBJECT",
            properties,
            required: fields.iter().map(|(name, _)| *name).collect(),
        }
    }
}

/// Top-level `generateContent` response envelope.
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    pub candidates: Vec<Candidate>,
}

/// Candidate completion item returned by Gemini.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

impl GenerateContentResponse {
    /// Text of the first candidate's first part, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.as_str())
    }
}
