//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::offset::OffsetArgs;
use crate::commands::state::StateArgs;
use crate::commands::table::TableArgs;

pub struct StateParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub lang: Option<String>,
    pub row: u32,
    pub col: u32,
    pub tab_width: u32,
    pub verbose: bool,
}

impl StateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            lang: m.get_one::<String>("lang").cloned(),
            row: m.get_one::<u32>("row").copied().unwrap_or(0),
            col: m.get_one::<u32>("col").copied().unwrap_or(0),
            tab_width: m.get_one::<u32>("tab_width").copied().unwrap_or(4),
            verbose: m.get_flag("verbose"),
        }
    }
}

impl From<StateParams> for StateArgs {
    fn from(p: StateParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            lang: p.lang,
            row: p.row,
            col: p.col,
            tab_width: p.tab_width,
            verbose: p.verbose,
        }
    }
}

pub struct OffsetParams {
    pub source_path: Option<PathBuf>,
    pub source_text: Option<String>,
    pub row: u32,
    pub col: u32,
    pub tab_width: u32,
}

impl OffsetParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source_path: m.get_one::<PathBuf>("source_path").cloned(),
            source_text: m.get_one::<String>("source_text").cloned(),
            row: m.get_one::<u32>("row").copied().unwrap_or(0),
            col: m.get_one::<u32>("col").copied().unwrap_or(0),
            tab_width: m.get_one::<u32>("tab_width").copied().unwrap_or(4),
        }
    }
}

impl From<OffsetParams> for OffsetArgs {
    fn from(p: OffsetParams) -> Self {
        Self {
            source_path: p.source_path,
            source_text: p.source_text,
            row: p.row,
            col: p.col,
            tab_width: p.tab_width,
        }
    }
}

pub struct TableParams {
    pub input: PathBuf,
    pub output: PathBuf,
    pub no_empty: bool,
}

impl TableParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: m.get_one::<PathBuf>("input").cloned().unwrap_or_default(),
            output: m
                .get_one::<PathBuf>("output")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("out.json")),
            no_empty: m.get_flag("no_empty"),
        }
    }
}

impl From<TableParams> for TableArgs {
    fn from(p: TableParams) -> Self {
        Self {
            input: p.input,
            output: p.output,
            include_empty: !p.no_empty,
        }
    }
}

pub struct LangsParams;

impl LangsParams {
    pub fn from_matches(_m: &ArgMatches) -> Self {
        Self
    }
}

