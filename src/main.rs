//! # zpl-label CLI
//!
//! Command-line interface for producing ZPL.
//!
//! ## Usage
//!
//! ```bash
//! # Compile a JSON label document
//! zpl-label render label.json
//!
//! # Read the document from stdin, force a 300 dpi head
//! cat label.json | zpl-label render --printer 12dpmm -
//!
//! # Print a stored template with field data
//! zpl-label recall --name SHIP --field 1="ACME Corp" --field 2=1Z999 --quantity 2
//!
//! # Verbose logging
//! RUST_LOG=debug zpl-label render label.json
//! ```

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zpl_label::{PrinterConfig, Recall, ZplError, document::LabelDocument};

/// zpl-label - ZPL encoder for Zebra label printers
#[derive(Parser, Debug)]
#[command(name = "zpl-label")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write ZPL to a file instead of stdout
    #[arg(long, short, value_name = "FILE", global = true)]
    output: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile a JSON label document to ZPL
    Render {
        /// Document path, or `-` for stdin
        input: String,

        /// Override the document resolution (e.g. `300`, `8dpmm`)
        #[arg(long)]
        printer: Option<String>,
    },

    /// Build a job that prints a stored template
    Recall {
        /// Name the template was stored under
        #[arg(long)]
        name: String,

        /// Field data as `ID=DATA`, repeatable
        #[arg(long = "field", value_name = "ID=DATA", value_parser = parse_field)]
        fields: Vec<(u32, String)>,

        /// Number of copies
        #[arg(long, default_value = "1")]
        quantity: u32,
    },
}

fn parse_field(s: &str) -> Result<(u32, String), String> {
    let (id, data) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=DATA, got '{}'", s))?;
    let id: u32 = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid field number '{}'", id))?;
    Ok((id, data.to_string()))
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ZplError> {
    let cli = Cli::parse();

    let zpl = match cli.command {
        Commands::Render { input, printer } => {
            let json = read_input(&input)?;
            let mut doc = LabelDocument::from_json(&json)?;
            if let Some(printer) = printer {
                doc.dpi = PrinterConfig::parse(&printer)?.dpi;
            }
            tracing::info!(input = %input, dpi = doc.dpi, fields = doc.fields.len(), "rendering");
            doc.build()?
        }
        Commands::Recall {
            name,
            fields,
            quantity,
        } => fields
            .into_iter()
            .fold(Recall::new(&name)?, |job, (id, data)| job.field(id, data))
            .quantity(quantity)
            .to_zpl(),
    };

    match cli.output {
        Some(path) => {
            std::fs::write(&path, &zpl)?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", zpl),
    }

    Ok(())
}

/// Read a document from a path, or stdin for `-`
fn read_input(input: &str) -> Result<String, ZplError> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read_to_string(input)?)
    }
}
