//! services/api/src/adapters/gemini_llm.rs
//!
//! This module contains the adapter for the lesson-generating LLM.
//! It implements the `LessonGenerationService` port from the `core` crate,
//! talking to Gemini through its OpenAI-compatible chat-completions surface.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use lesson_planner_core::{
    domain::LessonParams,
    ports::{LessonGenerationService, PortError, PortResult},
    prompt,
};
use regex::Regex;
use tracing::error;

/// Shown when the model returned an empty completion.
const EMPTY_COMPLETION_FALLBACK: &str = "Maaf, gagal menghasilkan konten. Silakan coba lagi.";

/// Shown when the service failed without a usable upstream message.
const SERVICE_ERROR_FALLBACK: &str = "Terjadi kesalahan saat menghubungi layanan AI.";

//=========================================================================================
// Terminology Substitutions
//=========================================================================================

/// One case-insensitive literal-text replacement applied to the generated
/// text after the call, independent of whether the model honored the prompt
/// instruction.
#[derive(Clone, Debug)]
pub struct TermSubstitution {
    pattern: Regex,
    replacement: String,
}

impl TermSubstitution {
    /// Builds a substitution for a literal phrase (no regex syntax).
    pub fn literal(phrase: &str, replacement: &str) -> Self {
        let pattern = Regex::new(&format!("(?i){}", regex::escape(phrase))).unwrap();
        Self { pattern, replacement: replacement.to_string() }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement.as_str()).into_owned()
    }
}

/// The mandated curriculum terminology replacements, longest phrase first so
/// the narrow form never rewrites an already-replaced long form.
pub fn default_term_substitutions() -> Vec<TermSubstitution> {
    vec![
        TermSubstitution::literal("Profil Pelajar Pancasila", "Dimensi Profil Lulusan"),
        TermSubstitution::literal("Pelajar Pancasila", "Profil Lulusan"),
    ]
}

fn apply_substitutions(substitutions: &[TermSubstitution], text: &str) -> String {
    substitutions
        .iter()
        .fold(text.to_string(), |current, sub| sub.apply(&current))
}

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `LessonGenerationService` against Gemini's
/// OpenAI-compatible endpoint.
#[derive(Clone)]
pub struct GeminiLessonAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    substitutions: Vec<TermSubstitution>,
}

impl GeminiLessonAdapter {
    /// Creates a new `GeminiLessonAdapter`. The substitution list is injected
    /// so callers can extend or disable the post-processing step.
    pub fn new(
        client: Client<OpenAIConfig>,
        model: String,
        temperature: f32,
        substitutions: Vec<TermSubstitution>,
    ) -> Self {
        Self { client, model, temperature, substitutions }
    }
}

//=========================================================================================
// `LessonGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl LessonGenerationService for GeminiLessonAdapter {
    /// Runs one generation attempt: system instruction plus the built user
    /// prompt, no retry. The terminology substitutions run on the result.
    async fn generate_lesson(&self, params: &LessonParams) -> PortResult<String> {
        let user_prompt = prompt::build_user_prompt(params);

        let messages = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(prompt::SYSTEM_INSTRUCTION)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_prompt)
                .build()
                .map_err(|e| PortError::Unexpected(e.to_string()))?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs; the upstream
        // message is surfaced to the user when one is available.
        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e: OpenAIError| {
                error!("Gemini API error: {e}");
                let message = e.to_string();
                if message.trim().is_empty() {
                    PortError::Service(SERVICE_ERROR_FALLBACK.to_string())
                } else {
                    PortError::Service(message)
                }
            })?;

        let generated = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.is_empty())
            .unwrap_or_else(|| EMPTY_COMPLETION_FALLBACK.to_string());

        Ok(apply_substitutions(&self.substitutions, &generated))
    }
}
