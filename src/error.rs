//! Crate error type.
//!
//! Almost everything in this engine is non-failing by construction; the
//! operations that can fail are the ones that touch the terminal, so the
//! error type is a thin wrapper over I/O failures.

use thiserror::Error;

/// Errors produced by the engine.
#[derive(Debug, Error)]
pub enum Error {
    /// A read or write against the terminal failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result alias for engine operations.
pub type Result<T> = std::result::Result<T, Error>;
