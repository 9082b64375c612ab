//! # Tillroll CLI
//!
//! Command-line interface for the receipt emulator.
//!
//! ## Usage
//!
//! ```bash
//! # Show the default sample receipt
//! tillroll print
//!
//! # Interpret a script file on 58mm paper
//! tillroll print --paper 58mm receipt.txt
//!
//! # Read a script from stdin and emit tokens as JSON
//! cat receipt.txt | tillroll print --format json -
//!
//! # List built-in samples
//! tillroll samples
//!
//! # Start the HTTP API
//! tillroll serve --listen 0.0.0.0:8080
//! ```
//!
//! Diagnostics go to stderr; set `RUST_LOG=tillroll=trace` to see every
//! ignored command and logged action.

use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tillroll::{
    TillrollError,
    ir::interpret,
    printer::PaperSize,
    receipt,
    render::preview,
    server::{self, ServerConfig},
};

/// Tillroll - receipt printer emulator for ESC/POS-style scripts
#[derive(Parser, Debug)]
#[command(name = "tillroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Interpret a command script and show the result
    Print {
        /// Script file, or `-` for stdin (omit to use a sample)
        script: Option<PathBuf>,

        /// Sample to use when no script file is given
        #[arg(long, default_value = receipt::DEFAULT)]
        sample: String,

        /// Paper width for the text preview
        #[arg(long, value_enum, default_value_t = PaperSize::default())]
        paper: PaperSize,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List built-in sample scripts
    Samples,

    /// Serve the JSON API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Initial paper size
        #[arg(long, value_enum, default_value_t = PaperSize::default())]
        paper: PaperSize,
    },
}

/// How `print` writes its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Text preview followed by the command log
    Text,
    /// Tokens and log as JSON
    Json,
    /// Command log only
    Log,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), TillrollError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Print {
            script,
            sample,
            paper,
            format,
        } => {
            let source = load_script(script.as_deref(), &sample)?;
            let output = interpret(&source);

            match format {
                Format::Text => {
                    print!("{}", preview::render_text(&output, paper));
                    println!();
                    println!("Command Log:");
                    for message in output.messages() {
                        println!("  {}", message);
                    }
                }
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                Format::Log => {
                    for message in output.messages() {
                        println!("{}", message);
                    }
                }
            }
        }
        Commands::Samples => {
            println!("Available samples:");
            for name in receipt::list_receipts() {
                let marker = if *name == receipt::DEFAULT { " (default)" } else { "" };
                println!("  {}{}", name, marker);
            }
        }
        Commands::Serve { listen, paper } => {
            server::serve(ServerConfig {
                listen_addr: listen,
                paper,
            })
            .await?;
        }
    }

    Ok(())
}

/// Read the script from a file, stdin (`-`), or the named sample.
///
/// Bytes that are not valid UTF-8 become U+FFFD instead of failing.
fn load_script(path: Option<&Path>, sample: &str) -> Result<String, TillrollError> {
    let bytes = match path {
        Some(path) if path == Path::new("-") => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            bytes
        }
        Some(path) => std::fs::read(path)?,
        None => {
            return receipt::by_name(sample)
                .map(str::to_string)
                .ok_or_else(|| TillrollError::UnknownSample(sample.to_string()));
        }
    };
    Ok(decode_script(&bytes))
}

fn decode_script(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
