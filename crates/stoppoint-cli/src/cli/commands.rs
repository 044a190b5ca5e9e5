//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("stoppoint")
        .about("Parser automaton state at an editor cursor")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(state_command())
        .subcommand(offset_command())
        .subcommand(table_command())
        .subcommand(langs_command())
}

/// Resolve the parser state at a cursor.
pub fn state_command() -> Command {
    Command::new("state")
        .about("Resolve the parser state at a cursor")
        .override_usage(
            "\
  stoppoint state <SOURCE> --row <ROW> --col <COL>
  stoppoint state -s <TEXT> -l <LANG> --row <ROW> --col <COL>",
        )
        .after_help(
            r#"EXAMPLES:
  stoppoint state app.js --row 3 --col 10      # state before line 3, column 10
  stoppoint state - -l py --row 1 --col 5      # source from stdin
  stoppoint state -s '{"a": ' -l json --row 1 --col 7 -v

Rows and columns are 1-based, as editors report them."#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(lang_arg())
        .arg(row_arg("Cursor row (1-based)"))
        .arg(col_arg("Cursor column (1-based)"))
        .arg(tab_width_arg())
        .arg(verbose_arg())
}

/// Map a position onto a byte offset.
pub fn offset_command() -> Command {
    Command::new("offset")
        .about("Map a 0-based row/column onto a byte offset")
        .override_usage(
            "\
  stoppoint offset <SOURCE> --row <ROW> --col <COL>
  stoppoint offset -s <TEXT> --row <ROW> --col <COL>",
        )
        .after_help(
            r#"EXAMPLES:
  stoppoint offset app.js --row 2 --col 4
  stoppoint offset -s "$(printf '\tx')" --row 0 --col 4 --tab-width 8"#,
        )
        .arg(source_path_arg())
        .arg(source_text_arg())
        .arg(row_arg("Row (0-based)"))
        .arg(col_arg("Column (0-based, tabs expanded)"))
        .arg(tab_width_arg())
}

/// Convert a textual state dump to JSON.
pub fn table_command() -> Command {
    Command::new("table")
        .about("Convert a textual state dump to JSON")
        .after_help(
            r#"EXAMPLES:
  stoppoint table states.txt                   # writes out.json
  stoppoint table states.txt -o table.json --no-empty"#,
        )
        .arg(dump_path_arg())
        .arg(output_file_arg())
        .arg(no_empty_arg())
}

/// List supported languages.
pub fn langs_command() -> Command {
    Command::new("langs").about("List supported languages")
}
