//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Source file to resolve against (positional, `-` for stdin).
pub fn source_path_arg() -> Arg {
    Arg::new("source_path")
        .value_name("SOURCE")
        .value_parser(value_parser!(PathBuf))
        .help("Source file (use - for stdin)")
}

/// Inline source text (-s/--source).
pub fn source_text_arg() -> Arg {
    Arg::new("source_text")
        .short('s')
        .long("source")
        .value_name("TEXT")
        .conflicts_with("source_path")
        .help("Inline source text")
}

/// Language flag (-l/--lang).
pub fn lang_arg() -> Arg {
    Arg::new("lang")
        .short('l')
        .long("lang")
        .value_name("LANG")
        .help("Language (inferred from extension if not specified)")
}

/// Cursor row (--row).
pub fn row_arg(help: &'static str) -> Arg {
    Arg::new("row")
        .long("row")
        .value_name("ROW")
        .required(true)
        .value_parser(value_parser!(u32))
        .help(help)
}

/// Cursor column (--col).
pub fn col_arg(help: &'static str) -> Arg {
    Arg::new("col")
        .long("col")
        .value_name("COL")
        .required(true)
        .value_parser(value_parser!(u32))
        .help(help)
}

/// Columns between tab stops (--tab-width).
pub fn tab_width_arg() -> Arg {
    Arg::new("tab_width")
        .long("tab-width")
        .value_name("N")
        .default_value("4")
        .value_parser(value_parser!(u32).range(1..))
        .help("Columns between tab stops")
}

/// Print diagnostics with the result (-v).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .help("Also show the parsed prefix length and how the state was recovered")
}

/// State dump to convert (positional).
pub fn dump_path_arg() -> Arg {
    Arg::new("input")
        .value_name("INPUT")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Textual state dump")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .default_value("out.json")
        .value_parser(value_parser!(PathBuf))
        .help("Write output to file")
}

/// Don't pad missing state ids (--no-empty).
pub fn no_empty_arg() -> Arg {
    Arg::new("no_empty")
        .long("no-empty")
        .action(ArgAction::SetTrue)
        .help("Do not include empty states")
}
