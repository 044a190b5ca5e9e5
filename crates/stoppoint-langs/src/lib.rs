//! Language grammars for stoppoint.
//!
//! Each grammar is a pre-built tree-sitter automaton. The rest of the
//! workspace only ever passes a [`Lang`] around: it is the opaque grammar
//! handle handed to the parsing engine.

use std::sync::Arc;

use arborium_tree_sitter::Language;

pub mod builtin;

pub use builtin::*;

/// User-facing grammar handle.
pub type Lang = Arc<dyn LangImpl>;

/// Facade over tree-sitter's `Language`.
pub trait LangImpl: Send + Sync {
    fn name(&self) -> &str;

    /// The compiled automaton.
    fn language(&self) -> &Language;

    /// Number of parse states in the automaton.
    fn state_count(&self) -> usize {
        self.language().parse_state_count()
    }
}

/// A grammar compiled into the binary.
#[derive(Debug)]
pub struct StaticLang {
    name: &'static str,
    ts_lang: Language,
}

impl StaticLang {
    pub fn new(name: &'static str, ts_lang: Language) -> Self {
        Self { name, ts_lang }
    }
}

impl LangImpl for StaticLang {
    fn name(&self) -> &str {
        self.name
    }

    fn language(&self) -> &Language {
        &self.ts_lang
    }
}
