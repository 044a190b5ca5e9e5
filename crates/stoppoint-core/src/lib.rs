#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for stoppoint.
//!
//! - **Positions**: editor cursor coordinates and their mapping onto byte
//!   offsets of a UTF-8 buffer (tab stops, CRLF, multibyte code points).
//! - **States**: the opaque automaton state identifier passed through from
//!   the parsing engine.
//! - **State tables**: conversion of textual state dumps into the JSON map
//!   the completion engine consumes.

pub mod position;
pub mod state_table;


pub use position::{Point, TabWidth, byte_offset_for_position};
pub use state_table::{StateItem, StateTable, StateTableError};

/// Parser automaton state (tree-sitter uses u16).
///
/// Only meaningful together with the grammar that produced it. Never
/// interpreted here, only passed through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct StateId(u16);

impl StateId {
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for StateId {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<StateId> for u16 {
    fn from(id: StateId) -> Self {
        id.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
