//! seshat CLI: English questions in, graph queries out.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};

use seshat::schema::SchemaRegistry;
use seshat::translate::{Translator, TranslatorConfig};

#[derive(Parser)]
#[command(name = "seshat", version, about = "Natural-language to graph-query translator")]
struct Cli {
    /// Schema definition file (TOML). Defaults to the built-in demo schema.
    #[arg(long, global = true)]
    schema: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a question into graph queries.
    Translate {
        /// The question. Reads standard input when omitted.
        question: Vec<String>,
    },

    /// Show the active schema vocabulary.
    Schema,
}

fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .ok(); // Ignore error if hook already set (e.g., in tests)

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let schema = match &cli.schema {
        Some(path) => SchemaRegistry::load(path)?,
        None => SchemaRegistry::outlaw_demo(),
    };

    match cli.command {
        Commands::Translate { question } => {
            let question = if question.is_empty() {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf).into_diagnostic()?;
                buf
            } else {
                question.join(" ")
            };

            let translator = Translator::new(TranslatorConfig {
                schema,
                ..Default::default()
            })?;

            let results = translator.translate_question(question.trim());
            if results.is_empty() {
                println!("No rule matched the question.");
            }
            for result in results {
                println!("[{}] {}", result.rule, result.query);
            }
        }

        Commands::Schema => {
            for label in schema.labels() {
                println!(":{} ({})", label.name, label.properties.join(", "));
            }
            for rel in schema.relationships() {
                if rel.roles.is_empty() {
                    println!("-[:{}]", rel.name);
                } else {
                    println!("-[:{}] ({})", rel.name, rel.roles.join(", "));
                }
            }
        }
    }

    Ok(())
}
