//! Errors surfaced to callers of a state query.

use crate::engine::EngineError;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Malformed call. Nothing was acquired, nothing to clean up.
    #[error("{0}")]
    Usage(String),

    /// The parsing engine could not provide a session or a parse.
    ///
    /// Everything acquired before the failure has been released; the query
    /// can be re-run as is.
    #[error(transparent)]
    Engine(#[from] EngineError),
}
