//! Instrumented fake parsing engine.
//!
//! The fake grammar's automaton is trivial: starting in [`FAKE_INITIAL`],
//! every consumed byte moves to the next state, so the state after a prefix
//! of `n` bytes is `FAKE_INITIAL + n`. Two bytes are special:
//!
//! - `#` is an error token. The search backtracks over trailing `#`s.
//! - `!` poisons the whole parse: the search returns [`FAKE_SENTINEL`].
//!
//! The ledger counts every acquire and release so tests can check that no
//! session or tree outlives its query.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use stoppoint_core::{Point, StateId};

use crate::engine::{
    EngineError, ParseEngine, ParseSession, RecoveryLog, RecoveryStrategy, ResolutionMode,
};

pub const FAKE_INITIAL: StateId = StateId::new(1);
pub const FAKE_SENTINEL: StateId = StateId::new(0);

/// State the fake grammar is in after consuming `prefix`.
pub fn state_after(prefix: &str) -> StateId {
    StateId::new(FAKE_INITIAL.get() + prefix.len() as u16)
}

#[derive(Debug, Default)]
pub struct FakeGrammar;

/// Where the fake engine should fail, if anywhere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailAt {
    #[default]
    Nowhere,
    NewSession,
    Parse,
}

/// Shared record of everything the engine did.
#[derive(Debug, Default)]
pub struct Ledger {
    pub sessions_opened: AtomicUsize,
    pub sessions_released: AtomicUsize,
    pub trees_created: AtomicUsize,
    pub trees_released: AtomicUsize,
    pub last_stop: Mutex<Option<Point>>,
    pub last_mode: Mutex<Option<ResolutionMode>>,
    pub last_parsed: Mutex<Vec<u8>>,
    pub last_search: Mutex<Option<Point>>,
}

impl Ledger {
    pub fn live_sessions(&self) -> usize {
        self.sessions_opened.load(Ordering::SeqCst) - self.sessions_released.load(Ordering::SeqCst)
    }

    pub fn live_trees(&self) -> usize {
        self.trees_created.load(Ordering::SeqCst) - self.trees_released.load(Ordering::SeqCst)
    }

    pub fn assert_balanced(&self) {
        assert_eq!(self.live_sessions(), 0, "leaked parser session");
        assert_eq!(self.live_trees(), 0, "leaked parse tree");
    }

    pub fn last_parsed(&self) -> String {
        String::from_utf8_lossy(&self.last_parsed.lock().unwrap()).into_owned()
    }
}

#[derive(Debug, Default)]
pub struct FakeEngine {
    pub ledger: Arc<Ledger>,
    pub fail_at: FailAt,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_at(fail_at: FailAt) -> Self {
        Self {
            fail_at,
            ..Self::default()
        }
    }
}

impl ParseEngine for FakeEngine {
    type Grammar = FakeGrammar;
    type Session = FakeSession;

    fn new_session(&self, _grammar: &FakeGrammar) -> Result<FakeSession, EngineError> {
        if self.fail_at == FailAt::NewSession {
            return Err(EngineError::Session("out of parsers".into()));
        }
        self.ledger.sessions_opened.fetch_add(1, Ordering::SeqCst);
        Ok(FakeSession {
            ledger: Arc::clone(&self.ledger),
            fail_parse: self.fail_at == FailAt::Parse,
            parsed: None,
        })
    }
}

pub struct FakeSession {
    ledger: Arc<Ledger>,
    fail_parse: bool,
    parsed: Option<Vec<u8>>,
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.ledger.sessions_released.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FakeTree {
    ledger: Arc<Ledger>,
}

impl Drop for FakeTree {
    fn drop(&mut self) {
        self.ledger.trees_released.fetch_add(1, Ordering::SeqCst);
    }
}

impl ParseSession for FakeSession {
    type Tree = FakeTree;

    fn set_stop_point(&mut self, stop: Point) {
        *self.ledger.last_stop.lock().unwrap() = Some(stop);
    }

    fn set_resolution_mode(&mut self, mode: ResolutionMode) {
        *self.ledger.last_mode.lock().unwrap() = Some(mode);
    }

    fn parse(&mut self, text: &[u8]) -> Result<Option<FakeTree>, EngineError> {
        if self.fail_parse {
            return Err(EngineError::Parse("engine gave up".into()));
        }
        *self.ledger.last_parsed.lock().unwrap() = text.to_vec();
        self.parsed = Some(text.to_vec());
        self.ledger.trees_created.fetch_add(1, Ordering::SeqCst);
        Ok(Some(FakeTree {
            ledger: Arc::clone(&self.ledger),
        }))
    }

    fn find_closest_recoverable_state(&mut self, stop: Point) -> (StateId, RecoveryLog) {
        *self.ledger.last_search.lock().unwrap() = Some(stop);

        let Some(parsed) = &self.parsed else {
            return (FAKE_SENTINEL, RecoveryLog::new(RecoveryStrategy::Sentinel, 0));
        };
        if parsed.is_empty() {
            return (FAKE_INITIAL, RecoveryLog::new(RecoveryStrategy::Initial, 0));
        }
        if parsed.contains(&b'!') {
            return (FAKE_SENTINEL, RecoveryLog::new(RecoveryStrategy::Sentinel, 0));
        }

        let errors = parsed.iter().rev().take_while(|&&b| b == b'#').count();
        let usable = parsed.len() - errors;
        let state = StateId::new(FAKE_INITIAL.get() + usable as u16);
        if errors == 0 {
            (state, RecoveryLog::new(RecoveryStrategy::Exact, 0))
        } else {
            (state, RecoveryLog::new(RecoveryStrategy::Backtrack, errors as u32))
        }
    }
}
