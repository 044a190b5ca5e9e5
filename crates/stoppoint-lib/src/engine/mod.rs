//! The parsing engine as seen from a state query.
//!
//! The engine owns the grammar's automaton and the scan/shift/reduce loop.
//! A query needs exactly five things from it: open a session for a grammar,
//! set the stop boundary, pick the resolution mode, parse a prefix, and find
//! the closest recoverable state. Releasing the tree and the session is
//! their `Drop`.

mod tree_sitter;

#[cfg(test)]
mod tree_sitter_tests;

pub use tree_sitter::{ERROR_STATE, INITIAL_STATE, TreeSitterEngine, TreeSitterSession};

use stoppoint_core::{Point, StateId};

/// Factory for per-query parser sessions.
///
/// Sessions are never shared: every query opens its own and drops it before
/// returning.
pub trait ParseEngine {
    /// Opaque grammar handle.
    type Grammar;
    type Session: ParseSession;

    fn new_session(&self, grammar: &Self::Grammar) -> Result<Self::Session, EngineError>;
}

/// One parser bound to one grammar, used for a single query.
pub trait ParseSession {
    /// Parse result. Dropping it releases the engine's tree.
    type Tree;

    /// Upper bound of interest for parsing and state resolution.
    fn set_stop_point(&mut self, stop: Point);

    fn set_resolution_mode(&mut self, mode: ResolutionMode);

    /// Parse `text` from the start. `Ok(None)` when the engine produced no
    /// tree; the state search still runs.
    fn parse(&mut self, text: &[u8]) -> Result<Option<Self::Tree>, EngineError>;

    /// The state that best represents "what would the parser accept next"
    /// at `stop`, searching back from the end of the last parse.
    ///
    /// Falls back to an engine-specific sentinel when no usable state
    /// exists; the log says which strategy produced the answer.
    fn find_closest_recoverable_state(&mut self, stop: Point) -> (StateId, RecoveryLog);
}

/// How the engine treats states it has not seen before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Read-only lookup in the known-state table.
    #[default]
    Resolve,
    /// Extend the known-state table with newly reached states.
    Discover,
}

/// Which search produced a resolved state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecoveryStrategy {
    /// The state right after the last parsed token.
    #[default]
    Exact,
    /// Skipped back over unusable tokens.
    Backtrack,
    /// Nothing was parsed: the grammar's start state.
    Initial,
    /// No usable state: the engine's sentinel.
    Sentinel,
}

/// Diagnostic record of a state search. Not interpreted by the resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecoveryLog {
    pub strategy: RecoveryStrategy,
    /// Tokens passed over before the answer was found.
    pub skipped: u32,
}

impl RecoveryLog {
    pub fn new(strategy: RecoveryStrategy, skipped: u32) -> Self {
        Self { strategy, skipped }
    }
}

impl std::fmt::Display for RecoveryLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.strategy {
            RecoveryStrategy::Exact => write!(f, "exact"),
            RecoveryStrategy::Backtrack => write!(f, "backtrack (skipped {})", self.skipped),
            RecoveryStrategy::Initial => write!(f, "initial"),
            RecoveryStrategy::Sentinel => write!(f, "sentinel (skipped {})", self.skipped),
        }
    }
}

/// Resource failures inside the parsing engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The grammar cannot be loaded into a parser.
    #[error("incompatible grammar: {0}")]
    Language(String),

    #[error("failed to acquire parser session: {0}")]
    Session(String),

    #[error("parse failed: {0}")]
    Parse(String),
}
