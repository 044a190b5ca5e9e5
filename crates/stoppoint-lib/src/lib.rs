//! stoppoint: the parser automaton state at an editor cursor.
//!
//! Given source text and a cursor, parse everything before the cursor and
//! ask the parsing engine for the closest state that still admits valid
//! continuations. Works on incomplete and malformed code.
//!
//! # Example
//!
//! ```
//! use stoppoint_lib::PhysicalStateService;
//!
//! let service = PhysicalStateService::tree_sitter(stoppoint_langs::json());
//! let state = service.physical_state(br#"{"a": "#, 1, 7).expect("grammar loads");
//! println!("state: {state}");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod engine;
mod error;
mod physical;
mod resolve;

#[cfg(test)]
mod test_utils;

pub use engine::{
    EngineError, ParseEngine, ParseSession, RecoveryLog, RecoveryStrategy, ResolutionMode,
    TreeSitterEngine,
};
pub use error::Error;
pub use physical::{PhysicalStateService, USAGE};
pub use resolve::{Resolution, ResolveOptions, resolve_state};
pub use stoppoint_core::{Point, StateId, TabWidth};

/// Result type for state queries.
pub type Result<T> = std::result::Result<T, Error>;
