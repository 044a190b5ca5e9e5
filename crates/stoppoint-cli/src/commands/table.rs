use std::fs;
use std::path::PathBuf;

use stoppoint_core::{StateTable, StateTableError};

pub struct TableArgs {
    pub input: PathBuf,
    pub output: PathBuf,
    pub include_empty: bool,
}

pub fn run(args: TableArgs) {
    let bytes = fs::read(&args.input).unwrap_or_else(|e| {
        eprintln!("error: failed to read '{}': {}", args.input.display(), e);
        std::process::exit(1);
    });
    // Dumps may carry stray bytes; keep going with replacement characters.
    let text = String::from_utf8_lossy(&bytes);

    let json = convert(&text, args.include_empty).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = fs::write(&args.output, json) {
        eprintln!("error: failed to write '{}': {}", args.output.display(), e);
        std::process::exit(1);
    }
    println!("Wrote: {}", args.output.display());
}

/// Convert a textual state dump into the JSON state table.
pub fn convert(text: &str, include_empty: bool) -> Result<String, StateTableError> {
    let mut table = StateTable::from_dump(text)?;
    if include_empty {
        table.pad_empty_states();
    }
    tracing::debug!(states = table.len(), include_empty, "converted state dump");
    table.to_json()
}
