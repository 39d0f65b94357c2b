pub mod domain;
pub mod ports;
pub mod prompt;
pub mod render;
pub mod session;

pub use domain::{
    DocumentParts, GeneratedDocument, GenerationStatus, LessonParams, PrintSection,
    DOCUMENT_SEPARATOR,
};
pub use ports::{LessonGenerationService, PortError, PortResult};
pub use session::LessonSession;
