//! State tables: which grammar items each automaton state admits.
//!
//! The grammar build dumps its automaton as text:
//!
//! ```text
//! State 12
//!   [T, ID, T, =, NT, Expr] : 3
//!   [T, PRINT, NT, Expr] : 7
//! ```
//!
//! The completion engine wants the same data as JSON, keyed by state id:
//! `{"12": [{"key": "[ID, =, Expr]", "value": 3}, ...]}`. Terminal and
//! nonterminal markers (`T`, `NT`) are dropped from the keys.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::StateId;

static STATE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*State\s+(\d+)\s*$").expect("state header pattern"));
static ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\[(.*)\]\s*:\s*(\d+)\s*$").expect("item pattern"));

/// One item of a state: a normalized symbol sequence and its value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StateItem {
    pub key: String,
    pub value: u64,
}

/// Error while reading or writing a state table.
#[derive(Debug)]
pub enum StateTableError {
    /// A `State N` header whose number does not fit a state id.
    StateOutOfRange { line: usize, number: String },
    /// An item value that does not fit in 64 bits.
    ValueOutOfRange { line: usize, number: String },
    Json(serde_json::Error),
}

impl std::fmt::Display for StateTableError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StateOutOfRange { line, number } => {
                write!(f, "line {line}: state {number} is out of range")
            }
            Self::ValueOutOfRange { line, number } => {
                write!(f, "line {line}: item value {number} is out of range")
            }
            Self::Json(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for StateTableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

/// Items per state, in the order states were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StateTable {
    states: IndexMap<StateId, Vec<StateItem>>,
}

impl StateTable {
    /// Parse a textual automaton dump.
    ///
    /// Lines break where Python's `str.splitlines` breaks them, bare `\r`
    /// included. Lines that are neither a state header nor an item are
    /// skipped, as are items appearing before the first header. A repeated
    /// header appends to the existing state.
    pub fn from_dump(text: &str) -> Result<Self, StateTableError> {
        let mut states: IndexMap<StateId, Vec<StateItem>> = IndexMap::new();
        let mut current = None;

        for (idx, line) in split_lines(text).enumerate() {
            let line_no = idx + 1;

            if let Some(caps) = STATE_HEADER.captures(line) {
                let number = &caps[1];
                let state = number
                    .parse::<u16>()
                    .map(StateId::new)
                    .map_err(|_| StateTableError::StateOutOfRange {
                        line: line_no,
                        number: number.to_owned(),
                    })?;
                states.entry(state).or_default();
                current = Some(state);
                continue;
            }

            let Some(state) = current else {
                continue;
            };
            let Some(caps) = ITEM.captures(line) else {
                continue;
            };
            let (inner, number) = (&caps[1], &caps[2]);
            let value = number
                .parse::<u64>()
                .map_err(|_| StateTableError::ValueOutOfRange {
                    line: line_no,
                    number: number.to_owned(),
                })?;
            states.entry(state).or_default().push(StateItem {
                key: normalize_key(inner),
                value,
            });
        }

        Ok(Self { states })
    }

    /// Insert an empty entry for every id up to the highest one present.
    ///
    /// Padding goes after the existing states, in ascending order.
    pub fn pad_empty_states(&mut self) {
        let Some(max) = self.states.keys().map(|s| s.get()).max() else {
            return;
        };
        for raw in 0..=max {
            self.states.entry(StateId::new(raw)).or_default();
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Pretty-printed JSON (2-space indent, non-ASCII kept verbatim).
    pub fn to_json(&self) -> Result<String, StateTableError> {
        serde_json::to_string_pretty(self).map_err(StateTableError::Json)
    }
}

/// Lines of `text`, broken the way Python's `str.splitlines` breaks them:
/// `\n`, `\r\n`, `\r`, `\x0b`, `\x0c`, `\x1c`-`\x1e`, `\x85`, U+2028 and
/// U+2029. A trailing break does not start an empty line.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some((end, brk)) = rest.char_indices().find(|&(_, c)| is_line_break(c)) else {
            return Some(std::mem::take(&mut rest));
        };
        let line = &rest[..end];
        let width = if rest[end..].starts_with("\r\n") { 2 } else { brk.len_utf8() };
        rest = &rest[end + width..];
        Some(line)
    })
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// `"T, ID, T, =, NT, Expr"` → `"[ID, =, Expr]"`.
fn normalize_key(inner: &str) -> String {
    let parts: Vec<&str> = inner
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "T" && *p != "NT")
        .collect();
    format!("[{}]", parts.join(", "))
}
