//! The `mdfrag` binary: markdown on standard input (or a file), an HTML
//! fragment on standard output with no added framing.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "mdfrag", version, about)]
struct Cli {
    /// The markdown file to render; or standard input if none passed
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("mdfrag: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let input = match &cli.file {
        Some(path) => read_document(BufReader::new(File::open(path)?))?,
        None => read_document(io::stdin().lock())?,
    };

    let html = mdfrag::markdown_to_html(&input)?;
    io::stdout().write_all(html.as_bytes())?;
    Ok(())
}

/// Reads the whole stream, normalizing every line (the last included) to end
/// with a newline.
fn read_document(reader: impl BufRead) -> io::Result<String> {
    let mut doc = String::new();
    for line in reader.lines() {
        doc.push_str(&line?);
        doc.push('\n');
    }
    Ok(doc)
}
