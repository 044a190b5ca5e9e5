//! Entry point for editor integrations.
//!
//! Editors call in with loosely typed arguments (`sourceCode, row, col`)
//! and get back a single state id. Argument checking happens here, before
//! any parser resource exists.

use serde_json::Value;
use stoppoint_core::{Point, StateId};
use stoppoint_langs::Lang;

use crate::engine::{ParseEngine, TreeSitterEngine};
use crate::resolve::{Resolution, ResolveOptions, resolve_state};
use crate::{Error, Result};

/// Message of the usage error raised for malformed calls.
pub const USAGE: &str = "Args: sourceCode, row, col";

/// Answers state queries for one grammar.
///
/// Holds no per-query state: concurrent queries each open their own engine
/// session.
pub struct PhysicalStateService<E: ParseEngine> {
    engine: E,
    grammar: E::Grammar,
    options: ResolveOptions,
}

impl PhysicalStateService<TreeSitterEngine> {
    /// Service backed by tree-sitter.
    pub fn tree_sitter(lang: Lang) -> Self {
        Self::new(TreeSitterEngine, lang)
    }
}

impl<E: ParseEngine> PhysicalStateService<E> {
    pub fn new(engine: E, grammar: E::Grammar) -> Self {
        Self {
            engine,
            grammar,
            options: ResolveOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn grammar(&self) -> &E::Grammar {
        &self.grammar
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Resolve with full diagnostics. `row` and `col` are 1-based.
    pub fn resolve(&self, source: &[u8], row: u32, col: u32) -> Result<Resolution> {
        resolve_state(
            &self.engine,
            &self.grammar,
            source,
            Point::new(row, col),
            &self.options,
        )
    }

    /// The state id at a 1-based cursor.
    pub fn physical_state(&self, source: &[u8], row: u32, col: u32) -> Result<StateId> {
        self.resolve(source, row, col).map(|r| r.state)
    }

    /// The state id for a dynamic call `(sourceCode, row, col)`.
    ///
    /// Fewer than three arguments, a non-string source or a row/column that
    /// is not a non-negative integer is an [`Error::Usage`]. Extra
    /// arguments are ignored.
    pub fn get_physical_state(&self, args: &[Value]) -> Result<StateId> {
        let (source, row, col) = parse_args(args)?;
        self.physical_state(source.as_bytes(), row, col)
    }
}

fn parse_args(args: &[Value]) -> Result<(&str, u32, u32)> {
    let [source, row, col, ..] = args else {
        return Err(usage(None));
    };
    let source = source
        .as_str()
        .ok_or_else(|| usage(Some("sourceCode must be a string")))?;
    let row = as_u32(row).ok_or_else(|| usage(Some("row must be a non-negative integer")))?;
    let col = as_u32(col).ok_or_else(|| usage(Some("col must be a non-negative integer")))?;
    Ok((source, row, col))
}

/// JSON numbers from JS callers arrive as floats; accept integral ones.
fn as_u32(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    let f = value.as_f64()?;
    (f.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&f)).then_some(f as u32)
}

fn usage(detail: Option<&str>) -> Error {
    match detail {
        Some(detail) => Error::Usage(format!("{USAGE} ({detail})")),
        None => Error::Usage(USAGE.to_owned()),
    }
}
