//! comboindex: run an index command against a sheet fixture.
//!
//! Stands in for the chat transport during development: it feeds a
//! command line to the same dispatch the bot uses and prints the reply.

use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};

use combo_bot::{combo, roundlength, Reply, Response, StaticVocabulary};
use combo_sheets::MemorySheet;

/// Output format for replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Combo index command runner.
#[derive(Parser)]
#[command(name = "comboindex", version, about = "Combo index command runner")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Path to a JSON sheet fixture (row_count + cells keyed by A1)
    #[arg(long)]
    sheet: Option<PathBuf>,

    /// Command name (combo, roundlength)
    command: String,

    /// Command arguments, as the user would type them
    args: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let vocab = StaticVocabulary::new();
    let args: Vec<&str> = cli.args.iter().map(String::as_str).collect();

    let response = match cli.command.as_str() {
        combo::NAME => {
            let sheet = match &cli.sheet {
                Some(path) => load_sheet(path),
                None => {
                    eprintln!("the combo command needs --sheet <fixture.json>");
                    process::exit(2);
                }
            };
            match combo::execute(&args, &sheet, &vocab).await {
                Ok(response) => response,
                Err(e) => {
                    // Structural error: the sheet no longer matches the
                    // engine's assumptions. Fail loudly.
                    eprintln!("fatal: {}", e);
                    process::exit(1);
                }
            }
        }
        roundlength::NAME => roundlength::execute(&args, &vocab),
        other => {
            eprintln!("unknown command: {}", other);
            process::exit(2);
        }
    };

    match cli.output {
        OutputFormat::Json => match serde_json::to_string_pretty(&response) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("failed to serialize response: {}", e);
                process::exit(1);
            }
        },
        OutputFormat::Text => print_text(&response),
    }
}

fn load_sheet(path: &Path) -> MemorySheet {
    let json = match std::fs::read_to_string(path) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("cannot read {}: {}", path.display(), e);
            process::exit(2);
        }
    };
    match MemorySheet::from_json(&json) {
        Ok(sheet) => sheet,
        Err(e) => {
            eprintln!("cannot load {}: {}", path.display(), e);
            process::exit(2);
        }
    }
}

fn print_text(response: &Response) {
    match response {
        Response::Embed(reply) => print_embed(reply),
        Response::Error(err) => {
            println!("{}", err.title);
            println!("Likely Cause(s):");
            for cause in &err.causes {
                println!("  \u{2022} {}", cause);
            }
            println!("{}", err.help);
        }
        Response::Text(text) => println!("{}", text),
    }
}

fn print_embed(reply: &Reply) {
    println!("{}", reply.title);
    for field in &reply.fields {
        println!("  {}: {}", field.name, field.value);
    }
    if let Some(footer) = &reply.footer {
        println!("  -- {}", footer);
    }
}
