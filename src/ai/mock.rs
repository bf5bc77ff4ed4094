use super::{PromptGenerationService, TranslationService};
use crate::models::PromptParts;
use crate::{Error, Result};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Scripted generation client for tests. Queued responses cycle by call
/// count, mirroring the real client's one-call-per-invocation contract.
#[derive(Clone)]
pub struct MockPromptClient {
    responses: Arc<Mutex<Vec<Result<PromptParts>>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockPromptClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_parts_response(self, parts: PromptParts) -> Self {
        self.responses.lock().unwrap().push(Ok(parts));
        self
    }

    pub fn with_failure(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push(Err(Error::Generation(message.to_string())));
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockPromptClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PromptGenerationService for MockPromptClient {
    async fn generate_prompt_parts(&self, idea: &str) -> Result<PromptParts> {
        if idea.trim().is_empty() {
            return Err(Error::Validation("Idea must not be blank".to_string()));
        }

        let mut count = self.call_count.lock().unwrap();
        *count += 1;

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            // Default mock response derived from the idea
            Ok(PromptParts::new(
                format!("latar untuk {}", idea),
                format!("subjek dari {}", idea),
                format!("pose untuk {}", idea),
                "lensa 85mm, f/1.8".to_string(),
            ))
        } else {
            let index = (*count - 1) % responses.len();
            match &responses[index] {
                Ok(parts) => Ok(parts.clone()),
                Err(Error::Generation(message)) => Err(Error::Generation(message.clone())),
                Err(e) => Err(Error::Generic(e.to_string())),
            }
        }
    }
}

/// Scripted translation client keyed by source text, so results stay
/// deterministic no matter how the four parallel calls interleave.
#[derive(Clone)]
pub struct MockTranslationClient {
    translations: Arc<Mutex<HashMap<String, String>>>,
    failures: Arc<Mutex<HashSet<String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockTranslationClient {
    pub fn new() -> Self {
        Self {
            translations: Arc::new(Mutex::new(HashMap::new())),
            failures: Arc::new(Mutex::new(HashSet::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_translation(self, source: &str, result: &str) -> Self {
        self.translations
            .lock()
            .unwrap()
            .insert(source.to_string(), result.to_string());
        self
    }

    /// Make any call translating `source` fail.
    pub fn with_failure_for(self, source: &str) -> Self {
        self.failures.lock().unwrap().insert(source.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockTranslationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranslationService for MockTranslationClient {
    async fn translate(&self, text: &str) -> Result<String> {
        // Matches the real client: empty input never counts as a call.
        if text.is_empty() {
            return Ok(String::new());
        }

        *self.call_count.lock().unwrap() += 1;

        if self.failures.lock().unwrap().contains(text) {
            return Err(Error::Translation(format!(
                "Scripted translation failure for '{}'",
                text
            )));
        }

        let translations = self.translations.lock().unwrap();
        Ok(translations
            .get(text)
            .cloned()
            .unwrap_or_else(|| format!("[en] {}", text)))
    }
}
