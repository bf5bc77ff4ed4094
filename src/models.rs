//! Data models and structures
//!
//! Defines the four-part prompt record shared by the native and translated
//! views, the final two-field output document, and environment configuration.

use serde::{Deserialize, Serialize};

/// Four-part image prompt.
///
/// Two instances live side by side in a session: the Indonesian original
/// (user-editable) and its English translation (derived, read-only). Wire
/// keys `subjek`/`kamera` follow the generation endpoint's schema.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptParts {
    pub background: String,
    #[serde(rename = "subjek")]
    pub subject: String,
    pub pose: String,
    #[serde(rename = "kamera")]
    pub camera: String,
}

impl PromptParts {
    pub fn new(background: String, subject: String, pose: String, camera: String) -> Self {
        Self {
            background,
            subject,
            pose,
            camera,
        }
    }

    /// A generation result is usable only when the subject came back non-empty.
    pub fn has_subject(&self) -> bool {
        !self.subject.trim().is_empty()
    }

    pub fn get(&self, field: PartField) -> &str {
        match field {
            PartField::Background => &self.background,
            PartField::Subject => &self.subject,
            PartField::Pose => &self.pose,
            PartField::Camera => &self.camera,
        }
    }

    pub fn set(&mut self, field: PartField, value: String) {
        match field {
            PartField::Background => self.background = value,
            PartField::Subject => self.subject = value,
            PartField::Pose => self.pose = value,
            PartField::Camera => self.camera = value,
        }
    }
}

/// Names one of the four prompt fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartField {
    Background,
    Subject,
    Pose,
    Camera,
}

impl PartField {
    pub const ALL: [PartField; 4] = [
        PartField::Background,
        PartField::Subject,
        PartField::Pose,
        PartField::Camera,
    ];

    /// Capitalized Indonesian label used in the combined text views.
    pub fn label(&self) -> &'static str {
        match self {
            PartField::Background => "Background",
            PartField::Subject => "Subjek",
            PartField::Pose => "Pose",
            PartField::Camera => "Kamera",
        }
    }

    pub fn parse(name: &str) -> Option<PartField> {
        match name.to_ascii_lowercase().as_str() {
            "background" => Some(PartField::Background),
            "subjek" | "subject" => Some(PartField::Subject),
            "pose" => Some(PartField::Pose),
            "kamera" | "camera" => Some(PartField::Camera),
            _ => None,
        }
    }
}

/// Final output consumed by an image generator: one positive prompt string
/// plus the fixed negative prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalPromptDocument {
    pub prompt: String,
    pub negative_prompt: String,
}

impl FinalPromptDocument {
    /// Stable two-space-indented rendering for display and copying.
    pub fn to_json_pretty(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_model: String,
}

const DEFAULT_MODEL: &str = "gemini-2.5-flash";

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY")
                .map_err(|_| crate::Error::Generic("GEMINI_API_KEY not set".to_string()))?,
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        })
    }
}
