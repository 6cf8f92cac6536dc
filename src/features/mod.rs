pub mod converse;
pub mod transcript;

pub use converse::{ConversationDriver, DEFAULT_SYSTEM_MESSAGE, system_message};
pub use transcript::{TranscriptPage, build_transcript_page, write_transcript_page};
