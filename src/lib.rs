//! chatlog - prompt files in, model answers and chat history pages out.
//!
//! A prompt file is a YAML list of loosely formatted lines. Lines starting
//! with `P:` are directives for the model; `Q`/`A` lines (optionally numbered,
//! `Q1:`, `A3:`) are a transcript meant for display. Two binaries share that
//! input:
//! 1. `chatlog-client` sends the directives to an `OpenAI` chat completions
//!    endpoint as one conversation and prints the answer and token usage
//! 2. `chatlog-render` turns the transcript into a standalone HTML chat page
//!    with a typing replay
//!
//! # Example
//!
//! ```
//! use chatlog::render::render_page;
//! use chatlog::transcript::{UserInitials, classify_lines};
//!
//! let lines = ["P: one", "P: two", "Q: hi", "A1: hello"];
//! let parsed = classify_lines(lines);
//! assert_eq!(parsed.directives, vec!["one", "two"]);
//!
//! let users: UserInitials = [("1", "CD")].into_iter().collect();
//! let html = render_page(&parsed.messages, &users).unwrap();
//! assert!(html.contains("\"type\": \"A1\""));
//! ```

// Module declarations
pub mod ai;
pub mod core;
pub mod errors;
pub mod features;
pub mod render;
pub mod report;
pub mod transcript;

pub use errors::ChatlogError;

/// Install the `tracing` subscriber used by both binaries.
///
/// Logs go to stderr so the console reports on stdout stay readable. The
/// level comes from `RUST_LOG` when set, otherwise `info` (`debug` when
/// `verbose`). Calling it more than once is harmless.
///
/// # Example
///
/// ```
/// chatlog::setup_logging(false);
/// ```
pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
