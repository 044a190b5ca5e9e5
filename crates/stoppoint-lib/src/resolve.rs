//! Bounded parse resolution: one engine session per query.

use stoppoint_core::{Point, StateId, TabWidth, byte_offset_for_position};

use crate::Result;
use crate::engine::{ParseEngine, ParseSession, RecoveryLog, ResolutionMode};

/// Knobs for a state query.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResolveOptions {
    /// Columns between tab stops (default: 4).
    pub(crate) tab_width: TabWidth,
}

impl ResolveOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tab width used to map cursor columns onto bytes.
    pub fn tab_width(mut self, width: TabWidth) -> Self {
        self.tab_width = width;
        self
    }

    pub fn get_tab_width(&self) -> TabWidth {
        self.tab_width
    }
}

/// Outcome of a state query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub state: StateId,
    pub log: RecoveryLog,
    /// Length of the prefix handed to the parser.
    pub effective_len: usize,
}

/// Resolve the automaton state at `stop` (1-based cursor) in `text`.
///
/// Only the text strictly before the cursor is parsed; the search for the
/// closest recoverable state gets the untouched stop point. The session and
/// the tree are dropped before returning, on the error paths too.
pub fn resolve_state<E: ParseEngine>(
    engine: &E,
    grammar: &E::Grammar,
    text: &[u8],
    stop: Point,
    options: &ResolveOptions,
) -> Result<Resolution> {
    let mut session = engine.new_session(grammar)?;
    session.set_stop_point(stop);
    session.set_resolution_mode(ResolutionMode::Resolve);

    let target = stop.truncation_target();
    let effective_len = byte_offset_for_position(text, target, options.tab_width).min(text.len());

    let tree = session.parse(&text[..effective_len])?;
    let (state, log) = session.find_closest_recoverable_state(stop);

    drop(tree);
    drop(session);

    tracing::debug!(
        %stop,
        %target,
        effective_len,
        text_len = text.len(),
        %state,
        %log,
        "resolved parse state"
    );

    Ok(Resolution {
        state,
        log,
        effective_len,
    })
}
