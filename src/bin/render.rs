//! Renders the Q/A lines of a prompt file into a chat history page.

use std::path::PathBuf;

use anyhow::Context;
use chatlog::features::{build_transcript_page, write_transcript_page};
use chatlog::render::DEFAULT_OUTPUT_FILE;
use chatlog::report::format_transcript_summary;
use chatlog::transcript::loader::DEFAULT_PROMPT_FILE;
use chatlog::transcript::{MissingFile, load_document};
use clap::Parser;

/// Generate a static HTML chat history page from a prompt file
#[derive(Parser, Debug)]
#[command(name = "chatlog-render")]
#[command(version)]
struct Cli {
    /// Path to the YAML prompt file
    #[arg(short, long, default_value = DEFAULT_PROMPT_FILE)]
    input: PathBuf,

    /// Where to write the HTML page
    #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chatlog::setup_logging(cli.verbose);

    let doc = load_document(&cli.input, MissingFile::UseEmpty);

    let Some(page) = build_transcript_page(&doc).context("Failed to render chat page")? else {
        println!("No Q&A messages found.");
        return Ok(());
    };

    print!(
        "{}",
        format_transcript_summary(&cli.input.display().to_string(), &page.messages)
    );

    write_transcript_page(&cli.output, &page)
        .with_context(|| format!("Failed to save {}", cli.output.display()))?;

    println!(
        "Generated {} with {} messages.",
        cli.output.display(),
        page.messages.len()
    );
    Ok(())
}
