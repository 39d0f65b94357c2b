//! crates/lesson_planner_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of the concrete AI backend behind the generation
//! call.

use async_trait::async_trait;

use crate::domain::LessonParams;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The remote generation service failed; carries the upstream message
    /// when one was available, otherwise a localized fallback.
    #[error("{0}")]
    Service(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait LessonGenerationService: Send + Sync {
    /// Generates the complete two-stage lesson text (Modul Ajar + LKPD) for
    /// the given parameters. One attempt per call; no retry.
    async fn generate_lesson(&self, params: &LessonParams) -> PortResult<String>;
}
