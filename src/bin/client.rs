//! Sends the `P:` lines of a prompt file to the model and prints the answer.

use std::path::PathBuf;

use chatlog::ai::{CompletionBackend, LlmClient, SamplingParams};
use chatlog::core::AppConfig;
use chatlog::features::{ConversationDriver, system_message};
use chatlog::report::{
    format_batch_report, format_conversation_report, format_display_lines, format_session_header,
};
use chatlog::transcript::loader::DEFAULT_PROMPT_FILE;
use chatlog::transcript::{MissingFile, classify_lines, load_document};
use clap::Parser;
use tracing::error;

/// Forward the `P:` prompts of a prompt file to an `OpenAI` chat model
#[derive(Parser, Debug)]
#[command(name = "chatlog-client")]
#[command(version)]
struct Cli {
    /// Path to the YAML prompt file
    #[arg(short, long, default_value = DEFAULT_PROMPT_FILE)]
    input: PathBuf,

    /// Model to use instead of OPENAI_MODEL
    #[arg(long)]
    model: Option<String>,

    /// Send every prompt as its own request instead of one conversation
    #[arg(long)]
    each: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    chatlog::setup_logging(cli.verbose);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            eprintln!("Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let doc = load_document(&cli.input, MissingFile::UseBuiltinPrompts);

    println!("Processing prompt lines:");
    println!("{}", "-".repeat(40));
    let parsed = classify_lines(&doc.prompts);
    print!("{}", format_display_lines(&parsed.messages));

    if parsed.directives.is_empty() {
        println!("No prompts starting with 'P:' found for LLM processing.");
        return Ok(());
    }

    println!(
        "\nFound {} prompts for LLM processing.\n",
        parsed.directives.len()
    );

    let system = system_message(doc.context.as_deref());

    let mut client = LlmClient::from_config(&config);
    if let Some(model) = cli.model {
        client = client.with_model(model);
    }
    let driver = ConversationDriver::new(client, SamplingParams::from_config(&config));

    println!("Starting ChatGPT interaction...");
    print!(
        "{}",
        format_session_header(
            driver.backend().model_name(),
            parsed.directives.len(),
            system
        )
    );

    if cli.each {
        let results = driver.run_each(&parsed.directives, Some(system)).await;
        print!("{}", format_batch_report(&results));
    } else {
        let result = driver
            .run_conversation(&parsed.directives, Some(system))
            .await;
        print!("{}", format_conversation_report(&result));
    }

    Ok(())
}
