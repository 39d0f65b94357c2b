//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::config::Config;
use lesson_planner_core::ports::LessonGenerationService;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all
/// handlers. The generation backend is held as a trait object so tests can
/// substitute a stub.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn LessonGenerationService>,
}
