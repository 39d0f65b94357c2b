pub mod gemini_llm;

pub use gemini_llm::{default_term_substitutions, GeminiLessonAdapter, TermSubstitution};
