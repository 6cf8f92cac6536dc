//! Prompt file parsing shared by both binaries

pub mod classifier;
pub mod initials;
pub mod loader;

pub use classifier::{Classification, ClassifiedLine, classify_line, classify_lines};
pub use initials::UserInitials;
pub use loader::{MissingFile, PromptDocument, load_document, parse_document};
