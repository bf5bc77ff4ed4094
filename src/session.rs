//! Session orchestration
//!
//! Owns the native/translated prompt pair and the transient UI flags, and
//! drives the generate -> parallel translate -> derived views sequence. All
//! rendered text is recomputed from this state on demand; nothing here is
//! cached between actions.

use crate::ai::{
    GeminiPromptClient, GeminiTranslateClient, PromptGenerationService, TranslationService,
};
use crate::assemble::assemble_final;
use crate::clipboard::{ClipboardService, CopyFeedback, CopyStatus, SystemClipboard};
use crate::models::{Config, FinalPromptDocument, PartField, PromptParts};
use crate::{Error, Result};
use tracing::{error, info};

/// User-facing messages, one per failure category. Causes go to the log only.
pub const MSG_BLANK_IDEA: &str = "Mohon masukkan ide awal untuk prompt.";
pub const MSG_GENERATION_FAILED: &str = "Gagal membuat prompt. Silakan coba lagi.";
pub const MSG_TRANSLATION_FAILED: &str = "Gagal menerjemahkan prompt. Silakan coba lagi.";

/// Copyable surfaces, each with its own feedback indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyTarget {
    NativeAll,
    TranslatedAll,
    FinalJson,
}

impl CopyTarget {
    pub fn id(&self) -> &'static str {
        match self {
            CopyTarget::NativeAll => "id-all",
            CopyTarget::TranslatedAll => "en-all",
            CopyTarget::FinalJson => "json-final",
        }
    }
}

/// Injectable service bundle used to construct [`Session`] in tests.
pub struct SessionServices {
    pub generator: Box<dyn PromptGenerationService>,
    pub translator: Box<dyn TranslationService>,
    pub clipboard: Box<dyn ClipboardService>,
}

/// One interactive session: prompt pair, flags, and the services acting on
/// them. Nothing persists beyond the session.
pub struct Session {
    generator: Box<dyn PromptGenerationService>,
    translator: Box<dyn TranslationService>,
    clipboard: Box<dyn ClipboardService>,
    native: PromptParts,
    translated: PromptParts,
    loading: bool,
    translating: bool,
    error: Option<String>,
    copy_feedback: CopyFeedback,
}

impl Session {
    /// Build a session from concrete service dependencies.
    pub fn with_services(services: SessionServices) -> Self {
        Self {
            generator: services.generator,
            translator: services.translator,
            clipboard: services.clipboard,
            native: PromptParts::default(),
            translated: PromptParts::default(),
            loading: false,
            translating: false,
            error: None,
            copy_feedback: CopyFeedback::new(),
        }
    }

    /// Construct a session from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;

        // Reuse one HTTP connection pool across both Gemini clients.
        let http_client = reqwest::Client::new();

        let generator = Box::new(GeminiPromptClient::new_with_client(
            config.gemini_api_key.clone(),
            config.gemini_model.clone(),
            http_client.clone(),
        ));
        let translator = Box::new(GeminiTranslateClient::new_with_client(
            config.gemini_api_key,
            config.gemini_model,
            http_client,
        ));

        Ok(Self::with_services(SessionServices {
            generator,
            translator,
            clipboard: Box::new(SystemClipboard),
        }))
    }

    /// Expand an idea into the four native fields, then translate them.
    ///
    /// A blank idea sets the validation message and changes nothing else.
    /// Generation failure leaves both prompt instances empty; translation
    /// failure keeps the fresh native parts so the user can still edit them.
    pub async fn generate(&mut self, idea: &str) {
        if idea.trim().is_empty() {
            self.error = Some(MSG_BLANK_IDEA.to_string());
            return;
        }

        self.error = None;
        self.native = PromptParts::default();
        self.translated = PromptParts::default();
        self.loading = true;

        match self.generator.generate_prompt_parts(idea).await {
            Ok(parts) => {
                info!("Generated prompt parts for idea ({} chars)", idea.len());
                self.native = parts;
                self.loading = false;
                self.translate_all().await;
            }
            Err(e) => {
                error!("Prompt generation failed: {}", e);
                self.error = Some(MSG_GENERATION_FAILED.to_string());
                self.loading = false;
            }
        }
    }

    /// Translate all four native fields in one parallel batch.
    ///
    /// All-or-nothing commit: the translated parts are replaced in a single
    /// assignment after every call succeeded, so a partial batch is never
    /// observable. Any failure keeps the previous translated parts intact.
    pub async fn translate_all(&mut self) {
        if !self.native.has_subject() {
            return;
        }

        self.translating = true;

        let (background, subject, pose, camera) = tokio::join!(
            self.translator.translate(&self.native.background),
            self.translator.translate(&self.native.subject),
            self.translator.translate(&self.native.pose),
            self.translator.translate(&self.native.camera),
        );

        self.translating = false;

        match (background, subject, pose, camera) {
            (Ok(background), Ok(subject), Ok(pose), Ok(camera)) => {
                self.translated = PromptParts::new(background, subject, pose, camera);
            }
            (background, subject, pose, camera) => {
                for e in [
                    background.err(),
                    subject.err(),
                    pose.err(),
                    camera.err(),
                ]
                .into_iter()
                .flatten()
                {
                    error!("Translation failed: {}", e);
                }
                self.error = Some(MSG_TRANSLATION_FAILED.to_string());
            }
        }
    }

    /// Edit one native field. Permitted only after a successful generation;
    /// never re-triggers translation.
    pub fn edit_field(&mut self, field: PartField, value: String) -> Result<()> {
        if !self.native.has_subject() {
            return Err(Error::Validation(
                "No generated prompt to edit yet".to_string(),
            ));
        }
        self.native.set(field, value);
        Ok(())
    }

    /// Copy one of the derived views to the clipboard, recording transient
    /// feedback under the target's id. Empty views are ignored, matching the
    /// disabled copy buttons before the first generation.
    pub fn copy(&mut self, target: CopyTarget) {
        let text = match target {
            CopyTarget::NativeAll => self.combined_native_text(),
            CopyTarget::TranslatedAll => self.combined_translated_text(),
            CopyTarget::FinalJson => self.final_json(),
        };
        if text.is_empty() {
            return;
        }

        match self.clipboard.write_text(&text) {
            Ok(()) => self.copy_feedback.note(target.id(), CopyStatus::Copied),
            Err(e) => {
                error!("Could not copy text: {}", e);
                self.copy_feedback.note(target.id(), CopyStatus::Failed);
            }
        }
    }

    // Derived views

    /// Final `{prompt, negative_prompt}` document, absent until a
    /// translation has landed.
    pub fn final_document(&self) -> Option<FinalPromptDocument> {
        assemble_final(&self.translated)
    }

    /// Pretty-printed final document, or `""` when there is none yet.
    pub fn final_json(&self) -> String {
        self.final_document()
            .and_then(|doc| doc.to_json_pretty().ok())
            .unwrap_or_default()
    }

    pub fn combined_native_text(&self) -> String {
        combined_text(&self.native)
    }

    pub fn combined_translated_text(&self) -> String {
        combined_text(&self.translated)
    }

    // State accessors

    pub fn native(&self) -> &PromptParts {
        &self.native
    }

    pub fn translated(&self) -> &PromptParts {
        &self.translated
    }

    pub fn has_results(&self) -> bool {
        self.native.has_subject()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_translating(&self) -> bool {
        self.translating
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn copy_status(&self, target: CopyTarget) -> Option<CopyStatus> {
        self.copy_feedback.status(target.id())
    }

    /// Transient copy indicator label for a target, if still within its
    /// display window.
    pub fn copy_label(&self, target: CopyTarget) -> Option<&'static str> {
        self.copy_status(target).map(|status| status.label())
    }

    #[cfg(test)]
    pub(crate) fn set_copy_feedback(&mut self, feedback: CopyFeedback) {
        self.copy_feedback = feedback;
    }
}

/// Labelled `Background:`/`Subjek:`/`Pose:`/`Kamera:` blocks, or `""` while
/// the subject is blank.
fn combined_text(parts: &PromptParts) -> String {
    if !parts.has_subject() {
        return String::new();
    }
    PartField::ALL
        .iter()
        .map(|field| format!("{}:\n{}", field.label(), parts.get(*field)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
