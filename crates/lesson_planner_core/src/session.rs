//! crates/lesson_planner_core/src/session.rs
//!
//! The form/orchestration state machine: owns the field snapshot, the
//! submission status, the generated result and the current print target.
//! The generation backend is injected per call so tests can substitute a
//! stub without touching process environment.

use crate::domain::{
    DocumentParts, GeneratedDocument, GenerationStatus, LessonParams, PrintSection,
};
use crate::ports::LessonGenerationService;

/// The inline message shown when a required field is missing.
pub const VALIDATION_MESSAGE: &str = "Mohon lengkapi Mata Pelajaran, Topik, dan Kelas.";

/// One in-memory generation session. Nothing here outlives the page session.
#[derive(Default)]
pub struct LessonSession {
    params: LessonParams,
    status: GenerationStatus,
    result: Option<GeneratedDocument>,
    error_message: Option<String>,
    print_target: Option<PrintSection>,
}

impl LessonSession {
    pub fn new(params: LessonParams) -> Self {
        Self { params, ..Default::default() }
    }

    pub fn params(&self) -> &LessonParams {
        &self.params
    }

    pub fn params_mut(&mut self) -> &mut LessonParams {
        &mut self.params
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The generated documents, split on the separator; `None` until a
    /// submission has succeeded.
    pub fn documents(&self) -> Option<DocumentParts> {
        self.result.as_ref().map(GeneratedDocument::parts)
    }

    /// The unmodified generated text, separator included.
    pub fn raw_result(&self) -> Option<&str> {
        self.result.as_ref().map(GeneratedDocument::raw)
    }

    pub fn print_target(&self) -> Option<PrintSection> {
        self.print_target
    }

    /// Validates the required fields and, when they are present, runs one
    /// generation attempt through the injected backend.
    ///
    /// A missing required field sets the inline error and returns without
    /// touching the status or the backend. A submit while a request is in
    /// flight is ignored; the caller disables the control during Loading.
    pub async fn submit(&mut self, generator: &dyn LessonGenerationService) {
        if self.status == GenerationStatus::Loading {
            return;
        }
        if !self.params.has_required_fields() {
            self.error_message = Some(VALIDATION_MESSAGE.to_string());
            return;
        }

        self.status = GenerationStatus::Loading;
        self.error_message = None;
        self.result = None;

        match generator.generate_lesson(&self.params).await {
            Ok(text) => {
                self.result = Some(GeneratedDocument::new(text));
                self.status = GenerationStatus::Success;
            }
            Err(err) => {
                self.status = GenerationStatus::Error;
                self.error_message = Some(err.to_string());
            }
        }
    }

    /// Clears all fields, the result and the error, returning to Idle.
    /// An in-flight request is not cancelled.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Marks one document as the print target; the sibling section is hidden
    /// while a target is selected.
    pub fn select_print_target(&mut self, section: PrintSection) {
        self.print_target = Some(section);
    }

    /// Clears the print target once the platform reports printing finished,
    /// so both sections are visible again on screen.
    pub fn finish_print(&mut self) {
        self.print_target = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DOCUMENT_SEPARATOR;
    use crate::ports::{PortError, PortResult};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct StubGenerator {
        reply: Result<String, String>,
        calls: AtomicUsize,
    }

    impl StubGenerator {
        fn ok(text: &str) -> Self {
            Self { reply: Ok(text.to_string()), calls: AtomicUsize::new(0) }
        }

        fn failing(message: &str) -> Self {
            Self { reply: Err(message.to_string()), calls: AtomicUsize::new(0) }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LessonGenerationService for StubGenerator {
        async fn generate_lesson(&self, _params: &LessonParams) -> PortResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(message) => Err(PortError::Service(message.clone())),
            }
        }
    }

    fn valid_params() -> LessonParams {
        LessonParams {
            subject: "IPA".into(),
            topic: "Ekosistem".into(),
            grade: "7 SMP".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn missing_required_field_blocks_the_backend_call() {
        let stub = StubGenerator::ok("tidak boleh terpanggil");
        let mut session = LessonSession::new(LessonParams {
            subject: String::new(),
            topic: "Iklim".into(),
            grade: "8 SMP".into(),
            ..Default::default()
        });

        session.submit(&stub).await;

        assert_eq!(stub.calls(), 0);
        assert_eq!(session.error_message(), Some(VALIDATION_MESSAGE));
        // A validation error does not change the generation status.
        assert_eq!(session.status(), GenerationStatus::Idle);
    }

    #[tokio::test]
    async fn successful_submit_splits_the_two_documents() {
        let stub = StubGenerator::ok(&format!("# A\n{DOCUMENT_SEPARATOR}\n# B"));
        let mut session = LessonSession::new(valid_params());

        session.submit(&stub).await;

        assert_eq!(session.status(), GenerationStatus::Success);
        let parts = session.documents().unwrap();
        assert_eq!(parts.primary, "# A\n");
        assert_eq!(parts.secondary.as_deref(), Some("# B"));
    }

    #[tokio::test]
    async fn service_error_surfaces_the_upstream_message() {
        let stub = StubGenerator::failing("timeout");
        let mut session = LessonSession::new(valid_params());

        session.submit(&stub).await;

        assert_eq!(session.status(), GenerationStatus::Error);
        assert_eq!(session.error_message(), Some("timeout"));
        assert!(session.documents().is_none());
    }

    #[tokio::test]
    async fn resubmission_after_error_clears_the_previous_failure() {
        let failing = StubGenerator::failing("timeout");
        let ok = StubGenerator::ok("hasil baru");
        let mut session = LessonSession::new(valid_params());

        session.submit(&failing).await;
        assert_eq!(session.status(), GenerationStatus::Error);

        // The teacher edits a field before retrying.
        session.params_mut().topic = "Ekosistem Sawah".into();
        session.submit(&ok).await;
        assert_eq!(session.status(), GenerationStatus::Success);
        assert_eq!(session.params().topic, "Ekosistem Sawah");
        assert_eq!(session.error_message(), None);
        assert_eq!(session.documents().unwrap().primary, "hasil baru");
    }

    #[tokio::test]
    async fn reset_returns_to_idle_and_clears_everything() {
        let stub = StubGenerator::ok("isi");
        let mut session = LessonSession::new(valid_params());
        session.submit(&stub).await;
        session.select_print_target(PrintSection::Lkpd);

        session.reset();

        assert_eq!(session.status(), GenerationStatus::Idle);
        assert!(session.documents().is_none());
        assert_eq!(session.error_message(), None);
        assert_eq!(session.print_target(), None);
        assert_eq!(session.params(), &LessonParams::default());
    }

    #[tokio::test]
    async fn print_target_selection_and_clear() {
        let mut session = LessonSession::default();
        session.select_print_target(PrintSection::Ppm);
        assert_eq!(session.print_target(), Some(PrintSection::Ppm));
        session.finish_print();
        assert_eq!(session.print_target(), None);
    }
}
