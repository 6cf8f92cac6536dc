pub mod config;
pub mod models;

pub use config::AppConfig;
pub use models::{ConversationResult, Message, Usage};
