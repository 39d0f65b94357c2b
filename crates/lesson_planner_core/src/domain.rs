//! crates/lesson_planner_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

/// The literal marker the model is instructed to place between the two
/// generated documents (PPM and LKPD).
pub const DOCUMENT_SEPARATOR: &str = "<!-- BATAS_DOKUMEN -->";

/// The lesson-planning metadata a teacher fills in before generating.
///
/// `subject`, `topic` and `grade` are required; the rest are optional and
/// rendered as `-` in the prompt when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LessonParams {
    pub subject: String,
    pub topic: String,
    pub grade: String,
    pub integration: Option<String>,
    pub author: Option<String>,
    pub school: Option<String>,
    pub duration: Option<String>,
}

impl LessonParams {
    /// Returns true when every required field is non-empty (after trimming).
    pub fn has_required_fields(&self) -> bool {
        !self.subject.trim().is_empty()
            && !self.topic.trim().is_empty()
            && !self.grade.trim().is_empty()
    }
}

/// The submission lifecycle of a generation request.
///
/// Transitions are strictly Idle→Loading→{Success,Error}, and
/// Success/Error→Loading on resubmission. There are no intermediate states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// Which of the two generated documents is the current print target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintSection {
    /// Tahap 1: the lesson module (Modul Ajar / RPP).
    Ppm,
    /// Tahap 2: the student worksheet (LKPD) and supporting material.
    Lkpd,
}

/// A single generated text blob, conceptually two documents joined by
/// [`DOCUMENT_SEPARATOR`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    raw: String,
}

/// The two logical documents as presented to the user. `secondary` is absent
/// when the separator never occurred in the generated text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentParts {
    pub primary: String,
    pub secondary: Option<String>,
}

impl GeneratedDocument {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The unmodified generated text.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Splits the raw text on the first occurrence of the separator.
    ///
    /// The split is exact: when the separator occurs exactly once, rejoining
    /// the two parts with the separator reconstructs the original text.
    pub fn split(&self) -> (&str, Option<&str>) {
        match self.raw.split_once(DOCUMENT_SEPARATOR) {
            Some((primary, secondary)) => (primary, Some(secondary)),
            None => (self.raw.as_str(), None),
        }
    }

    /// The presentation view of the split: identical to [`Self::split`]
    /// except that the single newline ending the separator marker line is
    /// not carried into the secondary part.
    pub fn parts(&self) -> DocumentParts {
        let (primary, secondary) = self.split();
        DocumentParts {
            primary: primary.to_string(),
            secondary: secondary
                .map(|s| s.strip_prefix('\n').unwrap_or(s).to_string()),
        }
    }
}
