//! Parsing engine backed by tree-sitter.
//!
//! Nodes in a finished tree only carry the state their first token was
//! lexed in, which is recorded before the reductions that token triggers.
//! The state the parser actually moved to after shifting a token is only
//! visible while parsing, through the parser log (`shift state:N`). The
//! session records those shifts; the closest recoverable state is the one
//! reached by the last token shifted outside error recovery.

use std::cell::RefCell;
use std::rc::Rc;

use arborium_tree_sitter::{LogType, Parser, Tree};
use stoppoint_core::{Point, StateId};
use stoppoint_langs::Lang;

use super::{EngineError, ParseEngine, ParseSession, RecoveryLog, RecoveryStrategy, ResolutionMode};

/// Tree-sitter's error state. Returned when no usable state exists.
pub const ERROR_STATE: StateId = StateId::new(0);

/// State the parser starts in before consuming anything.
pub const INITIAL_STATE: StateId = StateId::new(1);

/// Parse state tree-sitter reports for nodes containing errors.
const NO_STATE: u16 = u16::MAX;

/// Opens one tree-sitter parser per query.
#[derive(Clone, Copy, Debug, Default)]
pub struct TreeSitterEngine;

impl ParseEngine for TreeSitterEngine {
    type Grammar = Lang;
    type Session = TreeSitterSession;

    fn new_session(&self, grammar: &Lang) -> Result<TreeSitterSession, EngineError> {
        let mut parser = Parser::new();
        parser
            .set_language(grammar.language())
            .map_err(|e| EngineError::Language(format!("{}: {e}", grammar.name())))?;
        Ok(TreeSitterSession {
            parser,
            mode: ResolutionMode::default(),
            shifts: None,
        })
    }
}

/// A tree-sitter parser plus what it shifted during the last parse.
pub struct TreeSitterSession {
    parser: Parser,
    mode: ResolutionMode,
    /// `None` until a parse produced a tree.
    shifts: Option<ShiftRecord>,
}

impl ParseSession for TreeSitterSession {
    type Tree = Tree;

    fn set_stop_point(&mut self, stop: Point) {
        // no stop primitive in tree-sitter; the resolver truncates the input
        tracing::trace!(%stop, "stop point bounds the parsed prefix");
    }

    fn set_resolution_mode(&mut self, mode: ResolutionMode) {
        self.mode = mode;
    }

    fn parse(&mut self, text: &[u8]) -> Result<Option<Tree>, EngineError> {
        let record = Rc::new(RefCell::new(ShiftRecord::default()));
        let sink = Rc::clone(&record);
        self.parser
            .set_logger(Some(Box::new(move |kind: LogType, message: &str| {
                if kind == LogType::Parse {
                    sink.borrow_mut().observe(message);
                }
            })));
        let tree = self.parser.parse(text, None);
        self.parser.set_logger(None);

        self.shifts = tree.is_some().then(|| record.take());
        Ok(tree)
    }

    fn find_closest_recoverable_state(&mut self, stop: Point) -> (StateId, RecoveryLog) {
        if self.mode == ResolutionMode::Discover {
            // parse tables are compiled in, there is nothing to discover
            tracing::trace!("tree-sitter resolves against static tables");
        }

        let Some(shifts) = &self.shifts else {
            return (ERROR_STATE, RecoveryLog::new(RecoveryStrategy::Sentinel, 0));
        };

        let (state, log) = match (shifts.last, shifts.skipped) {
            (Some(state), 0) => (state, RecoveryLog::new(RecoveryStrategy::Exact, 0)),
            (Some(state), skipped) => (state, RecoveryLog::new(RecoveryStrategy::Backtrack, skipped)),
            (None, 0) => (INITIAL_STATE, RecoveryLog::new(RecoveryStrategy::Initial, 0)),
            // every token went to error recovery, the start state is all that is left
            (None, skipped) => (INITIAL_STATE, RecoveryLog::new(RecoveryStrategy::Backtrack, skipped)),
        };
        tracing::trace!(%stop, %state, %log, "closest recoverable state");
        (state, log)
    }
}

/// Shifts seen in a parser log.
#[derive(Debug, Default)]
pub(super) struct ShiftRecord {
    /// State reached by the last token shifted outside error recovery.
    pub(super) last: Option<StateId>,
    /// Tokens error recovery skipped since that shift.
    pub(super) skipped: u32,
}

impl ShiftRecord {
    pub(super) fn observe(&mut self, message: &str) {
        if let Some(state) = shifted_state(message) {
            self.last = Some(StateId::new(state));
            self.skipped = 0;
        } else if message.starts_with("skip_token") {
            self.skipped = self.skipped.saturating_add(1);
        }
    }
}

/// Target state of a `shift state:N` log line. Extras shift with
/// `shift_extra` and leave the state alone.
fn shifted_state(message: &str) -> Option<u16> {
    let state = message.strip_prefix("shift state:")?.trim().parse().ok()?;
    (state != ERROR_STATE.get() && state != NO_STATE).then_some(state)
}
